use crate::error::{Error, Result};
use faststr::FastStr;

/// Environment variable holding the upstream credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Read-only source of the upstream credential. The key is looked up
/// per request and must never appear in logs or responses.
pub trait SecretStore: Send + Sync {
    fn api_key(&self) -> Result<FastStr>;
}

/// Reads the credential from the process environment at call time, so
/// a missing key fails the request rather than the startup.
#[derive(Debug, Clone)]
pub struct EnvSecrets {
    var: FastStr,
}

impl EnvSecrets {
    pub fn new<T>(var: T) -> Self
    where
        T: Into<FastStr>,
    {
        Self { var: var.into() }
    }
}

impl Default for EnvSecrets {
    fn default() -> Self {
        Self::new(API_KEY_VAR)
    }
}

impl SecretStore for EnvSecrets {
    fn api_key(&self) -> Result<FastStr> {
        // An empty value counts as absent, same as an unset variable.
        match std::env::var(self.var.as_str()) {
            Ok(key) if !key.is_empty() => Ok(key.into()),
            _ => Err(Error::MissingApiKey(self.var.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_key_from_the_environment() {
        unsafe { std::env::set_var("CHATRELAY_TEST_KEY", "sk-test") };
        let secrets = EnvSecrets::new("CHATRELAY_TEST_KEY");
        assert_eq!(secrets.api_key().unwrap().as_str(), "sk-test");
    }

    #[test]
    fn a_missing_key_is_an_error() {
        let secrets = EnvSecrets::new("CHATRELAY_TEST_KEY_UNSET");
        let err = secrets.api_key().unwrap_err();
        assert!(err.to_string().contains("CHATRELAY_TEST_KEY_UNSET"));
    }

    #[test]
    fn an_empty_key_counts_as_missing() {
        unsafe { std::env::set_var("CHATRELAY_TEST_KEY_EMPTY", "") };
        let secrets = EnvSecrets::new("CHATRELAY_TEST_KEY_EMPTY");
        assert!(secrets.api_key().is_err());
    }
}
