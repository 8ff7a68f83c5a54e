//! Static portfolio knowledge and keyword retrieval

pub mod records;
mod retriever;
mod section;

pub use records::PROFILE;
pub use retriever::{ContextRetriever, DEFAULT_MAX_SECTIONS, DEFAULT_SECTIONS, RetrievedContext};
pub use section::KnowledgeSection;
