//! Gateway error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::{ChatResult, DomainError};

/// What class of failure an [`ApiError`] reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Malformed or unsupported request
    Client,
    MissingCredential,
    /// Adapter, configuration or upstream failure
    Upstream,
}

/// API error with status code and the gateway's `{error, shouldFallback?}` body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: FailureKind,
    pub body: ChatResult,
}

impl ApiError {
    /// Terminal client error; the body carries no `shouldFallback`
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: FailureKind::Client,
            body: ChatResult::client_error(message),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            kind: FailureKind::Client,
            body: ChatResult::client_error("Method not allowed"),
        }
    }

    /// Server-side failure another provider may be able to serve
    pub fn fallback(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            kind: FailureKind::Upstream,
            body: ChatResult::fallback(message),
        }
    }

    /// Fallback-eligible failure caused by a provider without a credential
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::MissingCredential,
            ..Self::fallback(message)
        }
    }

    pub fn message(&self) -> &str {
        self.body.error().unwrap_or_default()
    }

    pub fn should_fallback(&self) -> bool {
        self.body.should_fallback()
    }
}

/// Short caller-facing diagnostic for an upstream failure.
///
/// Detail such as transport messages stays in the server logs.
pub fn upstream_diagnostic(err: &DomainError) -> String {
    match err {
        DomainError::UpstreamStatus { provider, status } => {
            format!("{} API error: {}", provider, status)
        }
        DomainError::Transport { provider, .. } => format!("{} API request failed", provider),
        DomainError::MalformedResponse { provider, .. } => {
            format!("Invalid {} API response format", provider)
        }
        DomainError::Timeout { provider, .. } => format!("{} API request timed out", provider),
        other => other.to_string(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Credential { message } => Self::missing_credential(message),
            DomainError::Configuration { message } | DomainError::Internal { message } => {
                Self::fallback(message)
            }
            upstream => Self::fallback(upstream_diagnostic(upstream)),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status.as_u16(), self.message())
    }
}

impl std::error::Error for ApiError {}
