use std::fmt;

use crate::domain::ProviderId;

/// Provider-issued secret resolved for a single request
#[derive(Clone)]
pub struct Credential {
    provider: ProviderId,
    api_key: String,
}

impl Credential {
    pub fn new(provider: ProviderId, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
        }
    }

    pub fn provider(&self) -> ProviderId {
        self.provider
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// Secrets must never reach logs, even through `{:?}`.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("provider", &self.provider)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_creation() {
        let cred = Credential::new(ProviderId::OpenAi, "sk-test-key");

        assert_eq!(cred.provider(), ProviderId::OpenAi);
        assert_eq!(cred.api_key(), "sk-test-key");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let cred = Credential::new(ProviderId::Groq, "gsk-very-secret");
        let debug = format!("{:?}", cred);

        assert!(!debug.contains("gsk-very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
