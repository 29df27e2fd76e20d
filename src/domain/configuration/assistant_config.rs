//! Assistant configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

const MAX_TIMEOUT_SECS: u64 = 120;

/// Configuration loaded from `hope.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    /// Generation API configuration.
    #[serde(default)]
    pub assistant: GenerationApiConfig,
    /// Content source configuration.
    #[serde(default)]
    pub content: ContentConfig,
}

impl AssistantConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.assistant.validate()?;
        self.content.validate()?;
        Ok(())
    }
}

/// Generation API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationApiConfig {
    /// Base URL of the Generative Language API.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier, e.g. `gemini-pro`.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GenerationApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl GenerationApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(AppError::InvalidConfig(format!(
                "timeout_secs must be between 1 and {}",
                MAX_TIMEOUT_SECS
            )));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        Ok(())
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn generate_endpoint(&self) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        let endpoint = format!("{}/models/{}:generateContent", base, self.model.trim());
        Url::parse(&endpoint)
            .map_err(|e| AppError::InvalidConfig(format!("Invalid endpoint '{}': {}", endpoint, e)))
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_timeout() -> u64 {
    15
}

/// Where page content JSON files are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Directory path, or an `http(s)://` base URL.
    #[serde(default = "default_content_source")]
    pub source: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self { source: default_content_source() }
    }
}

impl ContentConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.source.trim().is_empty() {
            return Err(AppError::InvalidConfig("content source must not be empty".to_string()));
        }
        Ok(())
    }

    /// Parsed base URL when the source is remote.
    pub fn remote_base(&self) -> Option<Url> {
        let source = self.source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            Url::parse(source).ok()
        } else {
            None
        }
    }
}

fn default_content_source() -> String {
    "content".to_string()
}
