pub mod configuration;
pub mod content;
pub mod credential;
pub mod error;
pub mod faith;
pub mod fallback;
pub mod knowledge;
pub mod leadership;
pub mod prompt;

pub use configuration::{AssistantConfig, ContentConfig, GenerationApiConfig, load_config};
pub use content::{
    AboutContent, ContactContent, load_about_or_default, load_contact_or_default,
    load_knowledge_or_default,
};
pub use credential::{ApiCredential, PLACEHOLDER_API_KEY};
pub use error::AppError;
pub use faith::STATEMENT_OF_FAITH;
pub use fallback::{FallbackEntry, FallbackTable, GENERIC_CONTACT_MESSAGE};
pub use knowledge::{ChurchKnowledge, DEFAULT_CHURCH_NAME};
pub use leadership::{LEADERSHIP_PROFILES, LeadershipProfile, LeadershipRole};
pub use prompt::{compose_request, compose_system_prompt};
