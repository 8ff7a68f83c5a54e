//! LLM provider implementations

mod gemini;
mod http_client;
mod openai_compat;
mod registry;

pub use gemini::{flatten_conversation, GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use http_client::{HttpClient, HttpClientTrait, DEFAULT_HTTP_TIMEOUT};
pub use openai_compat::{
    OpenAiCompatibleProvider, DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL, DEFAULT_OPENAI_BASE_URL,
    DEFAULT_OPENAI_MODEL,
};
pub use registry::ProviderRegistry;

#[cfg(test)]
pub use http_client::mock::MockHttpClient;
