use std::io;

use thiserror::Error;

/// Library-wide error type for assistant operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file named explicitly but not present.
    #[error("Config file not found: {0}")]
    ConfigFileMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// A content record could not be fetched or decoded.
    #[error("Failed to load content '{name}': {details}")]
    ContentLoad { name: String, details: String },

    /// The generation API call failed.
    #[error("Generation API error{}: {}", status_suffix(.status), .message)]
    GenerationApi { message: String, status: Option<u16> },

    /// An embedded template could not be rendered.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Interactive prompt failed.
    #[error("Interactive input failed: {0}")]
    Interactive(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn content_load<N: Into<String>, D: ToString>(name: N, details: D) -> Self {
        AppError::ContentLoad { name: name.into(), details: details.to_string() }
    }

    pub fn template_render<T: Into<String>, R: ToString>(template: T, reason: R) -> Self {
        AppError::TemplateRender { template: template.into(), reason: reason.to_string() }
    }

    /// HTTP status of a failed generation call, if the server answered.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            AppError::GenerationApi { status, .. } => *status,
            _ => None,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" ({})", code)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_display_includes_status() {
        let err = AppError::GenerationApi { message: "quota exceeded".into(), status: Some(429) };
        assert_eq!(err.to_string(), "Generation API error (429): quota exceeded");
        assert_eq!(err.http_status(), Some(429));
    }

    #[test]
    fn generation_error_display_without_status() {
        let err = AppError::GenerationApi { message: "connection refused".into(), status: None };
        assert_eq!(err.to_string(), "Generation API error: connection refused");
        assert_eq!(err.http_status(), None);
    }

    #[test]
    fn content_load_names_the_record() {
        let err = AppError::content_load("contact.json", "missing field `phone`");
        assert_eq!(err.to_string(), "Failed to load content 'contact.json': missing field `phone`");
    }
}
