//! Folio chat gateway
//!
//! Backend for a portfolio site's chat widget:
//! - A stateless HTTP gateway forwarding conversations to Groq, OpenAI or Gemini
//! - Keyword retrieval over static portfolio records for prompt grounding
//! - A client-side orchestrator that rotates providers on recoverable failures

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::credentials::EnvCredentialProvider;
use infrastructure::llm::ProviderRegistry;

/// Build gateway state: env-backed credentials and one adapter per provider
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let registry = ProviderRegistry::from_config(&config.gateway)?;
    let credentials = Arc::new(EnvCredentialProvider::default());

    Ok(AppState::new(credentials, registry))
}
