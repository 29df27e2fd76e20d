//! Content provider selected from configuration.

use crate::adapters::{FilesystemContentProvider, HttpContentProvider};
use crate::domain::{AboutContent, AppError, ChurchKnowledge, ContactContent, ContentConfig};
use crate::ports::ContentProvider;

/// Local directory or remote base URL, per `[content] source`.
#[derive(Debug, Clone)]
pub enum ContentSource {
    Filesystem(FilesystemContentProvider),
    Http(HttpContentProvider),
}

impl ContentSource {
    pub fn from_config(config: &ContentConfig) -> Result<Self, AppError> {
        match config.remote_base() {
            Some(base) => Ok(Self::Http(HttpContentProvider::new(base)?)),
            None => Ok(Self::Filesystem(FilesystemContentProvider::new(config.source.trim()))),
        }
    }

    fn provider(&self) -> &dyn ContentProvider {
        match self {
            Self::Filesystem(provider) => provider,
            Self::Http(provider) => provider,
        }
    }
}

impl ContentProvider for ContentSource {
    fn about(&self) -> Result<AboutContent, AppError> {
        self.provider().about()
    }

    fn contact(&self) -> Result<ContactContent, AppError> {
        self.provider().contact()
    }

    fn church_info(&self) -> Result<ChurchKnowledge, AppError> {
        self.provider().church_info()
    }
}
