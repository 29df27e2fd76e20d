use crate::domain::{AboutContent, AppError, ChurchKnowledge, ContactContent};
use crate::ports::ContentProvider;

/// In-memory content provider; `None` records fail to load.
#[derive(Debug, Clone, Default)]
pub struct FakeContentProvider {
    pub about: Option<AboutContent>,
    pub contact: Option<ContactContent>,
    pub knowledge: Option<ChurchKnowledge>,
}

impl FakeContentProvider {
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_knowledge(knowledge: ChurchKnowledge) -> Self {
        Self { knowledge: Some(knowledge), ..Self::default() }
    }

    fn missing(name: &str) -> AppError {
        AppError::content_load(name, "not available in fake provider")
    }
}

impl ContentProvider for FakeContentProvider {
    fn about(&self) -> Result<AboutContent, AppError> {
        self.about.clone().ok_or_else(|| Self::missing("about.json"))
    }

    fn contact(&self) -> Result<ContactContent, AppError> {
        self.contact.clone().ok_or_else(|| Self::missing("contact.json"))
    }

    fn church_info(&self) -> Result<ChurchKnowledge, AppError> {
        self.knowledge.clone().ok_or_else(|| Self::missing("church-info.json"))
    }
}
