//! LLM provider domain models and traits

mod message;
mod provider;
mod request;

pub use message::{Conversation, Message, MessageRole};
pub use provider::LlmProvider;
pub use request::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, GenerationSettings};

#[cfg(test)]
pub use provider::mock::MockLlmProvider;
