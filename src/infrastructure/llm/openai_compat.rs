use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http_client::HttpClientTrait;
use crate::domain::{Credential, DomainError, GenerationSettings, LlmProvider, Message, ProviderId};

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Adapter for providers speaking the OpenAI chat-completions dialect
#[derive(Debug)]
pub struct OpenAiCompatibleProvider<C: HttpClientTrait> {
    client: C,
    id: ProviderId,
    base_url: String,
    settings: GenerationSettings,
}

impl<C: HttpClientTrait> OpenAiCompatibleProvider<C> {
    pub fn new(
        client: C,
        id: ProviderId,
        base_url: impl Into<String>,
        settings: GenerationSettings,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            id,
            base_url,
            settings,
        }
    }

    pub fn groq(client: C) -> Self {
        Self::new(
            client,
            ProviderId::Groq,
            DEFAULT_GROQ_BASE_URL,
            GenerationSettings::new(DEFAULT_GROQ_MODEL),
        )
    }

    pub fn openai(client: C) -> Self {
        Self::new(
            client,
            ProviderId::OpenAi,
            DEFAULT_OPENAI_BASE_URL,
            GenerationSettings::new(DEFAULT_OPENAI_MODEL),
        )
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.settings.model = model.into();
        self
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn build_request(&self, conversation: &[Message]) -> serde_json::Value {
        let body = ChatCompletionRequest {
            model: &self.settings.model,
            messages: conversation,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        serde_json::json!(body)
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<String, DomainError> {
        let name = self.id.display_name();

        let response: ChatCompletionResponse = serde_json::from_value(json)
            .map_err(|e| DomainError::malformed_response(name, e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                DomainError::malformed_response(name, "missing choices[0].message.content")
            })
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for OpenAiCompatibleProvider<C> {
    async fn complete(
        &self,
        credential: &Credential,
        conversation: &[Message],
    ) -> Result<String, DomainError> {
        let url = self.chat_completions_url();
        let body = self.build_request(conversation);
        let auth_header = format!("Bearer {}", credential.api_key());

        debug!(
            provider = %self.id,
            model = %self.settings.model,
            messages = conversation.len(),
            "Calling chat completions"
        );

        let response = self
            .client
            .post_json(
                &url,
                vec![
                    ("Authorization", auth_header.as_str()),
                    ("Content-Type", "application/json"),
                ],
                &body,
            )
            .await
            .map_err(|e| e.for_provider(self.id.display_name()))?;

        self.parse_response(response)
    }

    fn provider_id(&self) -> ProviderId {
        self.id
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}

// Chat completions wire types

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}
