pub mod assistant_config;
pub mod loader;

pub use assistant_config::{AssistantConfig, ContentConfig, GenerationApiConfig};
pub use loader::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, load_config, parse_config_content};
