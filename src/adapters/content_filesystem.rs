//! Content provider reading JSON records from a local directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::domain::content::{ABOUT_FILE, CHURCH_INFO_FILE, CONTACT_FILE};
use crate::domain::{AboutContent, AppError, ChurchKnowledge, ContactContent};
use crate::ports::ContentProvider;

#[derive(Debug, Clone)]
pub struct FilesystemContentProvider {
    root: PathBuf,
}

impl FilesystemContentProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, AppError> {
        let path = self.root.join(name);
        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::content_load(name, format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content).map_err(|e| AppError::content_load(name, e))
    }
}

impl ContentProvider for FilesystemContentProvider {
    fn about(&self) -> Result<AboutContent, AppError> {
        self.read_json(ABOUT_FILE)
    }

    fn contact(&self) -> Result<ContactContent, AppError> {
        self.read_json(CONTACT_FILE)
    }

    fn church_info(&self) -> Result<ChurchKnowledge, AppError> {
        self.read_json(CHURCH_INFO_FILE)
    }
}
