//! System prompt composition for the generation API.
//!
//! The prompt body lives in an embedded minijinja template. Sections for
//! missing data are left out rather than rendered empty, and the role
//! framing, statement of faith and guidelines are always present. If the
//! template cannot be rendered the composer returns a minimal prompt, so
//! composition itself never fails.

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;
use crate::domain::knowledge::{
    Belief, ChurchKnowledge, CommunityProgram, DEFAULT_CHURCH_NAME, FaqEntry, Ministry,
};

static TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const SYSTEM_PROMPT_TEMPLATE: &str = "system_prompt.txt.j2";

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

#[derive(Debug, Serialize)]
struct Field<'a> {
    label: &'static str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct ChurchInfoView<'a> {
    identity: Vec<Field<'a>>,
    ministries: &'a [Ministry],
    community: &'a [CommunityProgram],
    care: Vec<Field<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemPromptView<'a> {
    church: &'a str,
    info: Option<ChurchInfoView<'a>>,
    statement_of_faith: &'a str,
    beliefs: Vec<&'a Belief>,
    faqs: &'a [FaqEntry],
}

impl<'a> SystemPromptView<'a> {
    fn new(knowledge: Option<&'a ChurchKnowledge>, statement_of_faith: &'a str) -> Self {
        let info = knowledge.map(|knowledge| ChurchInfoView {
            identity: present_fields([
                ("Church Name", knowledge.church_name.as_str()),
                ("Founded", knowledge.founded.as_str()),
                ("Denomination", knowledge.denomination.as_str()),
                ("Pastor's Message", knowledge.pastor_message.as_str()),
                ("Church History", knowledge.church_history.as_str()),
            ]),
            ministries: &knowledge.ministries,
            community: &knowledge.community_involvement,
            care: present_fields([
                ("Pastoral Care", knowledge.pastoral_care.as_str()),
                ("Small Groups", knowledge.small_groups.as_str()),
            ]),
        });

        Self {
            church: knowledge.map(ChurchKnowledge::display_name).unwrap_or(DEFAULT_CHURCH_NAME),
            info,
            statement_of_faith: statement_of_faith.trim(),
            beliefs: knowledge.map(|k| k.detailed_beliefs.values().collect()).unwrap_or_default(),
            faqs: knowledge.map(|k| k.frequently_asked_questions.as_slice()).unwrap_or_default(),
        }
    }
}

/// Blank values are dropped so the prompt never carries empty `Label:` lines.
fn present_fields<'a, const N: usize>(pairs: [(&'static str, &'a str); N]) -> Vec<Field<'a>> {
    pairs
        .into_iter()
        .map(|(label, value)| Field { label, value: value.trim() })
        .filter(|field| !field.value.is_empty())
        .collect()
}

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env
    })
}

fn render_template(name: &str, view: &impl Serialize) -> Result<String, AppError> {
    let source = TEMPLATES
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::template_render(name, "template is not embedded"))?;

    environment().render_str(source, view).map_err(|err| AppError::template_render(name, err))
}

/// Render the system prompt for the given knowledge snapshot.
pub fn compose_system_prompt(knowledge: Option<&ChurchKnowledge>, statement_of_faith: &str) -> String {
    let view = SystemPromptView::new(knowledge, statement_of_faith);
    render_template(SYSTEM_PROMPT_TEMPLATE, &view).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Using minimal system prompt");
        minimal_prompt(view.church, view.statement_of_faith)
    })
}

fn minimal_prompt(church: &str, statement_of_faith: &str) -> String {
    format!(
        "You are an AI assistant for {church}, a warm and welcoming Christian church community.\n\n\
         STATEMENT OF FAITH:\n{statement_of_faith}\n\n\
         GUIDELINES:\n\
         1. Always be welcoming, warm, and encouraging in your responses\n\
         2. If you don't have specific information about the church, acknowledge this and offer \
         to help them contact the church directly\n\n\
         Remember: You represent {church}, so always maintain a Christ-like attitude of love, \
         grace, and truth."
    )
}

/// Join the system prompt and the visitor's question into one request text.
pub fn compose_request(system_prompt: &str, question: &str) -> String {
    format!(
        "{system_prompt}\n\nVISITOR QUESTION:\n{}\n\nPlease answer the visitor's question following the guidelines above.",
        question.trim()
    )
}
