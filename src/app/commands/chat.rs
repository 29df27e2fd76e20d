//! Interactive chat session.

use std::io::Write;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ContentProvider, GenerationClient};

pub const GREETING: &str = "Hello! I'm here to help answer any questions you have about our \
church's beliefs, programs, or faith in general. What would you like to know?";

const EXIT_WORDS: &[&str] = &["exit", "quit", "bye"];

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatOutcome {
    pub answered: usize,
}

/// Run a chat session over `next_question` until it yields `None`, a blank
/// line, or an exit word.
///
/// Knowledge loads on a background thread; questions asked before it lands
/// are answered without church-specific context.
pub fn execute<C, P, F, W>(
    ctx: &AppContext<C, P>,
    mut next_question: F,
    out: &mut W,
) -> Result<ChatOutcome, AppError>
where
    C: GenerationClient,
    P: ContentProvider + Clone + Send + 'static,
    F: FnMut() -> Result<Option<String>, AppError>,
    W: Write,
{
    let loader = ctx.resolver().knowledge().spawn_load(ctx.content().clone());
    writeln!(out, "{}\n", GREETING)?;

    let mut answered = 0;
    while let Some(line) = next_question()? {
        let question = line.trim();
        if question.is_empty() || EXIT_WORDS.contains(&question.to_lowercase().as_str()) {
            break;
        }

        let answer = ctx.resolver().ask_question(question);
        writeln!(out, "{}\n", answer)?;
        answered += 1;
    }

    if loader.join().is_err() {
        tracing::warn!("Knowledge loader thread panicked");
    }
    Ok(ChatOutcome { answered })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AnswerResolver;
    use crate::domain::{ApiCredential, AssistantConfig, GENERIC_CONTACT_MESSAGE};
    use crate::testing::{FakeContentProvider, FakeGenerationClient};

    fn offline_context() -> AppContext<FakeGenerationClient, FakeContentProvider> {
        AppContext::new(
            AssistantConfig::default(),
            AnswerResolver::new(FakeGenerationClient::default(), ApiCredential::missing()),
            FakeContentProvider::failing(),
        )
    }

    fn scripted(lines: &[&str]) -> impl FnMut() -> Result<Option<String>, AppError> {
        let mut lines: Vec<String> = lines.iter().rev().map(|line| line.to_string()).collect();
        move || Ok(lines.pop())
    }

    #[test]
    fn answers_until_exit_word() {
        let ctx = offline_context();
        let mut out = Vec::new();

        let outcome =
            execute(&ctx, scripted(&["Do you have a gym?", "QUIT", "never asked"]), &mut out).unwrap();

        assert_eq!(outcome.answered, 1);
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.starts_with(GREETING));
        assert!(transcript.contains(GENERIC_CONTACT_MESSAGE));
    }

    #[test]
    fn blank_line_ends_session() {
        let ctx = offline_context();
        let mut out = Vec::new();

        let outcome = execute(&ctx, scripted(&["   ", "Tell me about prayer"]), &mut out).unwrap();
        assert_eq!(outcome.answered, 0);
    }

    #[test]
    fn knowledge_is_loaded_by_the_end_of_the_session() {
        let ctx = offline_context();
        let mut out = Vec::new();

        execute(&ctx, scripted(&[]), &mut out).unwrap();
        assert!(ctx.resolver().knowledge().is_loaded());
    }

    #[test]
    fn input_errors_are_propagated() {
        let ctx = offline_context();
        let mut out = Vec::new();

        let result = execute(&ctx, || Err(AppError::Interactive("closed".into())), &mut out);
        assert!(matches!(result, Err(AppError::Interactive(_))));
    }
}
