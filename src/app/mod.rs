pub mod api;
pub mod cli;
pub mod commands;
mod context;
mod knowledge_slot;
mod resolver;

pub use context::AppContext;
pub use knowledge_slot::KnowledgeSlot;
pub use resolver::AnswerResolver;
