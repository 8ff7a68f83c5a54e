//! Application state for shared services

use std::sync::Arc;

use crate::domain::{CredentialProvider, ProviderId};
use crate::infrastructure::llm::ProviderRegistry;

/// Shared, read-only gateway dependencies
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialProvider>,
    pub registry: Arc<ProviderRegistry>,
}

impl AppState {
    pub fn new(credentials: Arc<dyn CredentialProvider>, registry: ProviderRegistry) -> Self {
        Self {
            credentials,
            registry: Arc::new(registry),
        }
    }

    /// Providers that currently have a credential configured
    pub async fn configured_providers(&self) -> Vec<ProviderId> {
        let mut configured = Vec::new();
        for id in ProviderId::ALL {
            if self.credentials.supports(id).await {
                configured.push(id);
            }
        }
        configured
    }
}
