use serde_json::Value;

use crate::domain::llm::{Conversation, Message};
use crate::domain::{DomainError, ProviderId};

pub const INVALID_REQUEST_FORMAT: &str = "Invalid request format";
pub const INVALID_PROVIDER: &str = "Invalid provider";

/// A structurally valid gateway request
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub provider: ProviderId,
    pub messages: Conversation,
}

impl ChatRequest {
    pub fn new(provider: ProviderId, messages: Conversation) -> Self {
        Self { provider, messages }
    }

    /// Validate a decoded JSON body.
    ///
    /// Shape problems are checked before provider membership so that a body
    /// missing both fields reports the format error.
    pub fn from_json(body: &Value) -> Result<Self, DomainError> {
        let provider = body
            .get("provider")
            .and_then(Value::as_str)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| DomainError::validation(INVALID_REQUEST_FORMAT))?;

        let raw_messages = body
            .get("messages")
            .and_then(Value::as_array)
            .ok_or_else(|| DomainError::validation(INVALID_REQUEST_FORMAT))?;

        if raw_messages.is_empty() {
            return Err(DomainError::validation(format!(
                "{}: messages must not be empty",
                INVALID_REQUEST_FORMAT
            )));
        }

        let messages = raw_messages
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                serde_json::from_value::<Message>(raw.clone()).map_err(|_| {
                    DomainError::validation(format!(
                        "{}: messages[{}] must have a role and string content",
                        INVALID_REQUEST_FORMAT, i
                    ))
                })
            })
            .collect::<Result<Conversation, _>>()?;

        let provider = provider
            .parse::<ProviderId>()
            .map_err(|_| DomainError::validation(INVALID_PROVIDER))?;

        Ok(Self { provider, messages })
    }

    /// Serialize into the gateway's inbound wire shape
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "provider": self.provider,
            "messages": self.messages,
        })
    }
}
