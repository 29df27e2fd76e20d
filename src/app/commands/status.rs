//! Service availability report.

use std::fmt;

use crate::app::AppContext;
use crate::ports::{ContentProvider, GenerationClient};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Whether questions will be sent to the generation API.
    pub available: bool,
    pub model: String,
    pub endpoint: String,
    pub content_source: String,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.available {
            "available"
        } else {
            "unavailable (no API key; using built-in answers)"
        };
        writeln!(f, "AI service: {}", state)?;
        writeln!(f, "Model:      {}", self.model)?;
        writeln!(f, "Endpoint:   {}", self.endpoint)?;
        write!(f, "Content:    {}", self.content_source)
    }
}

pub fn execute<C: GenerationClient, P: ContentProvider>(ctx: &AppContext<C, P>) -> StatusReport {
    let api = &ctx.config().assistant;
    let endpoint = api
        .generate_endpoint()
        .map(|url| url.to_string())
        .unwrap_or_else(|_| api.api_url.to_string());

    StatusReport {
        available: ctx.resolver().is_service_available(),
        model: api.model.clone(),
        endpoint,
        content_source: ctx.config().content.source.clone(),
    }
}
