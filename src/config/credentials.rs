//! Credential resolution from configuration.
//!
//! The OMDb API key lives on the server only. It is resolved on demand
//! so a key exported after start-up is picked up without a restart.

use super::types::OmdbConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of API key resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl OmdbConfig {
    /// Resolve the API key: inline `api_key` first, then `api_key_env`.
    pub fn resolve_api_key(&self) -> CredentialStatus {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.clone()));
            }
        }

        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => CredentialStatus::Configured(SecureString::new(key)),
            _ => CredentialStatus::Unconfigured {
                reason: format!("Environment variable {} not set", self.api_key_env),
            },
        }
    }
}
