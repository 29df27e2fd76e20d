//! Generation API credential.

/// Dummy key shipped in sample environments; treated as "not configured".
pub const PLACEHOLDER_API_KEY: &str = "PLACEHOLDER_API_KEY";

/// Environment variables consulted for the key, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Optional API key. The value never appears in `Debug` output.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiCredential(Option<String>);

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = match &self.0 {
            None => "[MISSING]",
            Some(_) if !self.is_usable() => "[PLACEHOLDER]",
            Some(_) => "[REDACTED]",
        };
        f.debug_tuple("ApiCredential").field(&shown).finish()
    }
}

impl ApiCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }

    /// Read the first non-empty key from [`API_KEY_ENV_VARS`].
    pub fn from_env() -> Self {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Present, non-blank, and not the placeholder sentinel.
    pub fn is_usable(&self) -> bool {
        match self.0.as_deref().map(str::trim) {
            Some(key) => !key.is_empty() && key != PLACEHOLDER_API_KEY,
            None => false,
        }
    }

    /// Key to send, only when usable.
    pub fn secret(&self) -> Option<&str> {
        if self.is_usable() { self.0.as_deref().map(str::trim) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::EnvVarGuard;
    use serial_test::serial;

    #[test]
    fn placeholder_and_blank_keys_are_unusable() {
        assert!(!ApiCredential::missing().is_usable());
        assert!(!ApiCredential::new("").is_usable());
        assert!(!ApiCredential::new("   ").is_usable());
        assert!(!ApiCredential::new(PLACEHOLDER_API_KEY).is_usable());
        assert!(ApiCredential::new("AIza-real-key").is_usable());
    }

    #[test]
    fn secret_is_hidden_unless_usable() {
        assert_eq!(ApiCredential::new(PLACEHOLDER_API_KEY).secret(), None);
        assert_eq!(ApiCredential::new(" key ").secret(), Some("key"));
    }

    #[test]
    fn debug_redacts_key() {
        let rendered = format!("{:?}", ApiCredential::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    #[serial]
    fn gemini_key_takes_precedence() {
        let _gemini = EnvVarGuard::set("GEMINI_API_KEY", "gemini-key");
        let _generic = EnvVarGuard::set("API_KEY", "generic-key");
        assert_eq!(ApiCredential::from_env().secret(), Some("gemini-key"));
    }

    #[test]
    #[serial]
    fn falls_back_to_generic_key() {
        let _gemini = EnvVarGuard::remove("GEMINI_API_KEY");
        let _generic = EnvVarGuard::set("API_KEY", "generic-key");
        assert_eq!(ApiCredential::from_env().secret(), Some("generic-key"));
    }

    #[test]
    #[serial]
    fn missing_env_is_unusable() {
        let _gemini = EnvVarGuard::remove("GEMINI_API_KEY");
        let _generic = EnvVarGuard::remove("API_KEY");
        assert_eq!(ApiCredential::from_env(), ApiCredential::missing());
    }
}
