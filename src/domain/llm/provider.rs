use async_trait::async_trait;
use std::fmt::Debug;

use super::Message;
use crate::domain::{Credential, DomainError, ProviderId};

/// Trait for LLM provider adapters (Groq, OpenAI, Gemini)
///
/// Adapters translate a conversation into the provider's wire format and the
/// reply back into plain text. They report failures but never decide whether
/// a failure should trigger fallback.
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Send the conversation and return the first completion's text
    async fn complete(
        &self,
        credential: &Credential,
        conversation: &[Message],
    ) -> Result<String, DomainError>;

    /// The provider this adapter speaks to
    fn provider_id(&self) -> ProviderId;

    /// Model identifier sent upstream
    fn model(&self) -> &str;
}
