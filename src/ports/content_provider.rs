//! Content provider port definition.

use crate::domain::{AboutContent, AppError, ChurchKnowledge, ContactContent};

/// Source of the JSON content records behind the site pages.
pub trait ContentProvider {
    /// Record for `about.json`.
    fn about(&self) -> Result<AboutContent, AppError>;

    /// Record for `contact.json`.
    fn contact(&self) -> Result<ContactContent, AppError>;

    /// Record for `church-info.json`.
    fn church_info(&self) -> Result<ChurchKnowledge, AppError>;
}
