//! API facade for the application.
//!
//! Builds the production context from configuration and the environment, then
//! runs one command against it.

use std::io::Write;
use std::path::Path;

use crate::adapters::{ContentSource, HttpGenerationClient};
use crate::app::{
    AnswerResolver, AppContext,
    commands::{ask, chat, pages, prompt, status},
};
use crate::domain::{ApiCredential, load_config};

pub use crate::app::commands::chat::{ChatOutcome, GREETING};
pub use crate::app::commands::status::StatusReport;
pub use crate::domain::{AboutContent, AppError, ChurchKnowledge, ContactContent};

type LiveContext = AppContext<HttpGenerationClient, ContentSource>;

/// Create the production context.
///
/// Configuration errors surface here; a missing API key does not.
fn create_context(config_path: Option<&Path>) -> Result<LiveContext, AppError> {
    let config = load_config(config_path)?;
    let credential = ApiCredential::from_env();
    let client = HttpGenerationClient::new(credential.clone(), &config.assistant)?;
    let content = ContentSource::from_config(&config.content)?;
    let resolver = AnswerResolver::new(client, credential);

    Ok(AppContext::new(config, resolver, content))
}

/// Answer a single question.
pub fn ask(config_path: Option<&Path>, question: &str) -> Result<String, AppError> {
    let ctx = create_context(config_path)?;
    Ok(ask::execute(&ctx, question))
}

/// Run a chat session reading questions from `next_question`.
pub fn chat<F, W>(config_path: Option<&Path>, next_question: F, out: &mut W) -> Result<ChatOutcome, AppError>
where
    F: FnMut() -> Result<Option<String>, AppError>,
    W: Write,
{
    let ctx = create_context(config_path)?;
    chat::execute(&ctx, next_question, out)
}

/// Report whether the generation API would be used.
pub fn status(config_path: Option<&Path>) -> Result<StatusReport, AppError> {
    let ctx = create_context(config_path)?;
    Ok(status::execute(&ctx))
}

/// Render the system prompt the assistant would send.
pub fn system_prompt(config_path: Option<&Path>) -> Result<String, AppError> {
    let ctx = create_context(config_path)?;
    Ok(prompt::execute(&ctx))
}

pub fn about(config_path: Option<&Path>) -> Result<AboutContent, AppError> {
    let ctx = create_context(config_path)?;
    Ok(pages::about(&ctx))
}

pub fn contact(config_path: Option<&Path>) -> Result<ContactContent, AppError> {
    let ctx = create_context(config_path)?;
    Ok(pages::contact(&ctx))
}

/// Knowledge record behind the Beliefs page, defaults on load failure.
pub fn beliefs(config_path: Option<&Path>) -> Result<ChurchKnowledge, AppError> {
    let ctx = create_context(config_path)?;
    Ok(pages::beliefs(&ctx))
}

pub fn render_about(about: &AboutContent) -> String {
    pages::render_about(about)
}

pub fn render_contact(contact: &ContactContent) -> String {
    pages::render_contact(contact)
}

pub fn render_beliefs(knowledge: &ChurchKnowledge) -> String {
    pages::render_beliefs(knowledge)
}

pub fn render_leadership() -> String {
    pages::render_leadership()
}
