//! One-shot question.

use crate::app::AppContext;
use crate::ports::{ContentProvider, GenerationClient};

/// Load knowledge, then answer a single question.
pub fn execute<C: GenerationClient, P: ContentProvider>(ctx: &AppContext<C, P>, question: &str) -> String {
    ctx.resolver().load_knowledge(ctx.content());
    ctx.resolver().ask_question(question)
}
