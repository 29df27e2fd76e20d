//! hope-assistant: fallback-aware Q&A assistant for a church website.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AboutContent, AppError, ChatOutcome, ContactContent, GREETING, StatusReport, about, ask,
    beliefs, chat, contact, render_about, render_beliefs, render_contact, render_leadership,
    status, system_prompt,
};
pub use app::{AnswerResolver, AppContext, KnowledgeSlot};
pub use domain::{ChurchKnowledge, FallbackTable, LEADERSHIP_PROFILES};
