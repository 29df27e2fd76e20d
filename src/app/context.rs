use crate::app::AnswerResolver;
use crate::domain::AssistantConfig;
use crate::ports::{ContentProvider, GenerationClient};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: GenerationClient, P: ContentProvider> {
    config: AssistantConfig,
    resolver: AnswerResolver<C>,
    content: P,
}

impl<C: GenerationClient, P: ContentProvider> AppContext<C, P> {
    /// Create a new application context.
    pub fn new(config: AssistantConfig, resolver: AnswerResolver<C>, content: P) -> Self {
        Self { config, resolver, content }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn resolver(&self) -> &AnswerResolver<C> {
        &self.resolver
    }

    pub fn content(&self) -> &P {
        &self.content
    }
}
