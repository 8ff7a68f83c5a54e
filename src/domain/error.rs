use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The upstream answered with a non-2xx status
    #[error("{provider} API error: {status}")]
    UpstreamStatus { provider: String, status: u16 },

    /// The request never produced an upstream answer (connect, TLS, body read)
    #[error("{provider} API request failed: {message}")]
    Transport { provider: String, message: String },

    /// The upstream answered 2xx but the payload lacks the expected fields
    #[error("Invalid {provider} API response format: {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("{provider} API request timed out after {timeout_ms}ms")]
    Timeout { provider: String, timeout_ms: u64 },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn upstream_status(provider: impl Into<String>, status: u16) -> Self {
        Self::UpstreamStatus {
            provider: provider.into(),
            status,
        }
    }

    pub fn transport(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn malformed_response(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn timeout(provider: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            provider: provider.into(),
            timeout_ms,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Re-attribute an upstream failure raised by a shared component
    /// (e.g. the HTTP client) to the provider that issued the call.
    pub fn for_provider(self, name: &str) -> Self {
        match self {
            Self::UpstreamStatus { status, .. } => Self::upstream_status(name, status),
            Self::Transport { message, .. } => Self::transport(name, message),
            Self::MalformedResponse { message, .. } => Self::malformed_response(name, message),
            Self::Timeout { timeout_ms, .. } => Self::timeout(name, timeout_ms),
            other => other,
        }
    }

    /// Provider that raised this error, if it is an upstream failure
    pub fn provider(&self) -> Option<&str> {
        match self {
            Self::UpstreamStatus { provider, .. }
            | Self::Transport { provider, .. }
            | Self::MalformedResponse { provider, .. }
            | Self::Timeout { provider, .. } => Some(provider),
            _ => None,
        }
    }

    pub fn is_upstream(&self) -> bool {
        self.provider().is_some()
    }
}
