//! Closed set of LLM providers and their fallback rotation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Identifier of a supported LLM provider.
///
/// Declaration order is the fallback rotation: groq -> openai -> gemini -> groq.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Groq,
    OpenAi,
    Gemini,
}

impl ProviderId {
    /// All providers in rotation order
    pub const ALL: [ProviderId; 3] = [ProviderId::Groq, ProviderId::OpenAi, ProviderId::Gemini];

    /// Wire name used in requests and responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }

    /// Human-readable name used in diagnostics
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Groq => "Groq",
            Self::OpenAi => "OpenAI",
            Self::Gemini => "Gemini",
        }
    }

    /// Position in the rotation
    pub fn index(&self) -> usize {
        match self {
            Self::Groq => 0,
            Self::OpenAi => 1,
            Self::Gemini => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Next provider in the circular rotation
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("Unknown provider '{}'", s)))
    }
}
