mod env_var_guard;
mod fake_content_provider;
mod fake_generation_client;

pub use env_var_guard::EnvVarGuard;
pub use fake_content_provider::FakeContentProvider;
pub use fake_generation_client::FakeGenerationClient;
