//! Domain layer - Core business logic and entities

pub mod chat;
pub mod credentials;
pub mod error;
pub mod fallback;
pub mod knowledge;
pub mod llm;
pub mod provider_id;
pub mod session;

pub use chat::{ChatRequest, ChatResult};
pub use credentials::{Credential, CredentialProvider};
pub use error::DomainError;
pub use fallback::{Delivery, FallbackOrchestrator, GatewayClient, OrchestratorError};
pub use knowledge::{ContextRetriever, KnowledgeSection, RetrievedContext};
pub use llm::{Conversation, GenerationSettings, LlmProvider, Message, MessageRole};
pub use provider_id::ProviderId;
pub use session::{ChatSession, SendOutcome, build_system_prompt, friendly_failure_message};
