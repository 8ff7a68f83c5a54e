use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http_client::HttpClientTrait;
use crate::domain::{Credential, DomainError, GenerationSettings, LlmProvider, Message, ProviderId};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";

/// Google Gemini `generateContent` adapter.
///
/// The conversation is flattened into a single text part and the key travels
/// as a query parameter.
#[derive(Debug)]
pub struct GeminiProvider<C: HttpClientTrait> {
    client: C,
    base_url: String,
    settings: GenerationSettings,
}

impl<C: HttpClientTrait> GeminiProvider<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            settings: GenerationSettings::new(DEFAULT_GEMINI_MODEL),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.settings.model = model.into();
        self
    }

    /// The key is appended after parsing so it is percent-encoded and never
    /// appears in a parse error.
    fn generate_url(&self, api_key: &str) -> Result<String, DomainError> {
        let mut url = reqwest::Url::parse(&format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.settings.model
        ))
        .map_err(|e| DomainError::configuration(format!("Invalid Gemini endpoint: {}", e)))?;

        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url.into())
    }

    fn build_request(&self, conversation: &[Message]) -> serde_json::Value {
        let body = GenerateContentRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: flatten_conversation(conversation),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: self.settings.temperature,
                max_output_tokens: self.settings.max_tokens,
            },
        };

        serde_json::json!(body)
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<String, DomainError> {
        let name = ProviderId::Gemini.display_name();

        let response: GenerateContentResponse = serde_json::from_value(json)
            .map_err(|e| DomainError::malformed_response(name, e.to_string()))?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| {
                DomainError::malformed_response(name, "missing candidates[0].content.parts[0].text")
            })
    }
}

/// Render the conversation as `"{role}: {content}"` blocks separated by a blank line
pub fn flatten_conversation(conversation: &[Message]) -> String {
    conversation
        .iter()
        .map(|m| format!("{}: {}", m.role, m.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for GeminiProvider<C> {
    async fn complete(
        &self,
        credential: &Credential,
        conversation: &[Message],
    ) -> Result<String, DomainError> {
        let url = self.generate_url(credential.api_key())?;
        let body = self.build_request(conversation);

        debug!(
            model = %self.settings.model,
            messages = conversation.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .client
            .post_json(&url, vec![("Content-Type", "application/json")], &body)
            .await
            .map_err(|e| e.for_provider(ProviderId::Gemini.display_name()))?;

        self.parse_response(response)
    }

    fn provider_id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}
