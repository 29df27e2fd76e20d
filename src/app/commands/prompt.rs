//! System prompt preview.

use crate::app::AppContext;
use crate::ports::{ContentProvider, GenerationClient};

/// Load knowledge and return the system prompt sent with every question.
pub fn execute<C: GenerationClient, P: ContentProvider>(ctx: &AppContext<C, P>) -> String {
    ctx.resolver().load_knowledge(ctx.content());
    ctx.resolver().system_prompt()
}
