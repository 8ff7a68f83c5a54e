use async_trait::async_trait;
use std::fmt::Debug;

use super::Credential;
use crate::domain::{DomainError, ProviderId};

/// Source of provider secrets, consulted on every request
#[async_trait]
pub trait CredentialProvider: Send + Sync + Debug {
    /// Resolve the credential for a provider.
    ///
    /// A missing secret is reported as `DomainError::Credential`.
    async fn get_credential(&self, provider: ProviderId) -> Result<Credential, DomainError>;

    /// Check whether a secret is currently configured for the provider
    async fn supports(&self, provider: ProviderId) -> bool;

    /// Get provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    #[derive(Debug, Default)]
    pub struct MockCredentialProvider {
        credentials: RwLock<HashMap<ProviderId, Credential>>,
    }

    impl MockCredentialProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_key(self, provider: ProviderId, api_key: &str) -> Self {
            self.credentials
                .write()
                .unwrap()
                .insert(provider, Credential::new(provider, api_key));
            self
        }
    }

    #[async_trait]
    impl CredentialProvider for MockCredentialProvider {
        async fn get_credential(&self, provider: ProviderId) -> Result<Credential, DomainError> {
            self.credentials
                .read()
                .unwrap()
                .get(&provider)
                .cloned()
                .ok_or_else(|| {
                    DomainError::credential(format!("API key not configured for {}", provider))
                })
        }

        async fn supports(&self, provider: ProviderId) -> bool {
            self.credentials.read().unwrap().contains_key(&provider)
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
