//! Generation API client port definition.

use crate::domain::AppError;

/// Port for the external text-generation API.
///
/// One request per call: the combined system prompt and question go in, the
/// model's text comes out. Retries and fallbacks are the caller's concern.
pub trait GenerationClient {
    /// Submit `prompt` and return the generated text.
    fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

impl<T: GenerationClient + ?Sized> GenerationClient for Box<T> {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        (**self).generate(prompt)
    }
}

impl<T: GenerationClient + ?Sized> GenerationClient for std::sync::Arc<T> {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        (**self).generate(prompt)
    }
}
