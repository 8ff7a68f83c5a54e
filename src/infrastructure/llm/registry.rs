use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use super::gemini::GeminiProvider;
use super::http_client::HttpClient;
use super::openai_compat::OpenAiCompatibleProvider;
use crate::config::GatewayConfig;
use crate::domain::{DomainError, LlmProvider, ProviderId};

/// Maps each provider id to the adapter that serves it
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<ProviderId, Arc<dyn LlmProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build all three adapters, applying per-provider endpoint overrides
    pub fn from_config(config: &GatewayConfig) -> Result<Self, DomainError> {
        let http_client = HttpClient::with_timeout(config.timeout())?;
        let mut registry = Self::new();

        for id in ProviderId::ALL {
            let endpoint = config.endpoint(id);

            let provider: Arc<dyn LlmProvider> = match id {
                ProviderId::Groq | ProviderId::OpenAi => {
                    let mut provider = if id == ProviderId::Groq {
                        OpenAiCompatibleProvider::groq(http_client.clone())
                    } else {
                        OpenAiCompatibleProvider::openai(http_client.clone())
                    };
                    if let Some(base_url) = endpoint.base_url {
                        provider = provider.with_base_url(base_url);
                    }
                    if let Some(model) = endpoint.model {
                        provider = provider.with_model(model);
                    }
                    Arc::new(provider)
                }
                ProviderId::Gemini => {
                    let mut provider = GeminiProvider::new(http_client.clone());
                    if let Some(base_url) = endpoint.base_url {
                        provider = provider.with_base_url(base_url);
                    }
                    if let Some(model) = endpoint.model {
                        provider = provider.with_model(model);
                    }
                    Arc::new(provider)
                }
            };

            info!(provider = %id, model = %provider.model(), "Registered LLM provider");
            registry = registry.register(provider);
        }

        Ok(registry)
    }

    /// Add an adapter under its own provider id, replacing any previous one
    pub fn register(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.providers.insert(provider.provider_id(), provider);
        self
    }

    pub fn get(&self, id: ProviderId) -> Result<Arc<dyn LlmProvider>, DomainError> {
        self.providers
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::configuration(format!("No adapter registered for {}", id)))
    }

    pub fn ids(&self) -> impl Iterator<Item = ProviderId> + '_ {
        self.providers.keys().copied()
    }
}
