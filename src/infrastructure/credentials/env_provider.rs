use async_trait::async_trait;
use std::collections::HashMap;
use std::env;

use crate::domain::{Credential, CredentialProvider, DomainError, ProviderId};

/// Default environment variable holding each provider's API key
pub fn default_env_var(provider: ProviderId) -> &'static str {
    match provider {
        ProviderId::Groq => "GROQ_API_KEY",
        ProviderId::OpenAi => "OPENAI_API_KEY",
        ProviderId::Gemini => "GEMINI_API_KEY",
    }
}

/// Credential provider that reads from environment variables.
///
/// Variables are read on every lookup so a key added or removed at runtime
/// takes effect on the next request. Blank values count as missing.
#[derive(Debug)]
pub struct EnvCredentialProvider {
    mappings: HashMap<ProviderId, String>,
}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    pub fn with_mapping(mut self, provider: ProviderId, env_var: impl Into<String>) -> Self {
        self.mappings.insert(provider, env_var.into());
        self
    }

    pub fn with_defaults(mut self) -> Self {
        for provider in ProviderId::ALL {
            self.mappings
                .insert(provider, default_env_var(provider).to_string());
        }
        self
    }

    fn read_key(&self, provider: ProviderId) -> Option<String> {
        let var = self.mappings.get(&provider)?;
        env::var(var).ok().filter(|key| !key.trim().is_empty())
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new().with_defaults()
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_credential(&self, provider: ProviderId) -> Result<Credential, DomainError> {
        self.read_key(provider)
            .map(|key| Credential::new(provider, key))
            .ok_or_else(|| {
                DomainError::credential(format!("API key not configured for {}", provider))
            })
    }

    async fn supports(&self, provider: ProviderId) -> bool {
        self.read_key(provider).is_some()
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[tokio::test]
    async fn test_env_provider_with_set_variable() {
        // SAFETY: Test runs in isolation
        unsafe { env::set_var("TEST_FOLIO_GROQ_KEY", "gsk-test-123") };

        let provider =
            EnvCredentialProvider::new().with_mapping(ProviderId::Groq, "TEST_FOLIO_GROQ_KEY");

        let cred = provider.get_credential(ProviderId::Groq).await.unwrap();
        assert_eq!(cred.api_key(), "gsk-test-123");
        assert_eq!(cred.provider(), ProviderId::Groq);
        assert!(provider.supports(ProviderId::Groq).await);

        // SAFETY: Test cleanup
        unsafe { env::remove_var("TEST_FOLIO_GROQ_KEY") };
    }

    #[tokio::test]
    async fn test_missing_variable_names_provider() {
        let provider =
            EnvCredentialProvider::new().with_mapping(ProviderId::Gemini, "NONEXISTENT_VAR_12345");

        let err = provider.get_credential(ProviderId::Gemini).await.unwrap_err();
        assert!(err.to_string().contains("API key not configured for gemini"));
        assert!(!provider.supports(ProviderId::Gemini).await);
    }

    #[tokio::test]
    async fn test_blank_variable_counts_as_missing() {
        // SAFETY: Test runs in isolation
        unsafe { env::set_var("TEST_FOLIO_BLANK_KEY", "  ") };

        let provider =
            EnvCredentialProvider::new().with_mapping(ProviderId::OpenAi, "TEST_FOLIO_BLANK_KEY");
        assert!(provider.get_credential(ProviderId::OpenAi).await.is_err());

        // SAFETY: Test cleanup
        unsafe { env::remove_var("TEST_FOLIO_BLANK_KEY") };
    }

    #[tokio::test]
    async fn test_unmapped_provider_is_unsupported() {
        let provider = EnvCredentialProvider::new();
        assert!(!provider.supports(ProviderId::OpenAi).await);
    }

    #[test]
    fn test_default_env_vars() {
        assert_eq!(default_env_var(ProviderId::Groq), "GROQ_API_KEY");
        assert_eq!(default_env_var(ProviderId::OpenAi), "OPENAI_API_KEY");
        assert_eq!(default_env_var(ProviderId::Gemini), "GEMINI_API_KEY");
    }
}
