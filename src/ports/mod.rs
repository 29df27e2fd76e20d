mod content_provider;
mod generation_client;

pub use content_provider::ContentProvider;
pub use generation_client::GenerationClient;
