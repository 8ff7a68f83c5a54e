//! Gateway handler for `/api/chat`

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::api::state::AppState;
use crate::api::types::{ApiError, FailureKind};
use crate::domain::chat::INVALID_REQUEST_FORMAT;
use crate::domain::{ChatRequest, ChatResult, DomainError, ProviderId};
use crate::infrastructure::observability::{record_gateway_request, GatewayOutcome};

/// POST /api/chat
///
/// Validates the body, resolves the provider's credential, and dispatches to
/// its adapter. Every response body is a [`ChatResult`].
pub async fn chat_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let start = Instant::now();
    let client_ip = client_identity(&headers);

    let (provider, result) = match parse_request(&body) {
        Ok(request) => {
            let provider = request.provider;
            (Some(provider), dispatch(&state, request).await)
        }
        Err(e) => (None, Err(e)),
    };

    let outcome = match &result {
        Ok(_) => GatewayOutcome::Success,
        Err(e) => gateway_outcome(e.kind),
    };

    info!(
        provider = provider.map_or("unknown", |p| p.as_str()),
        client_ip = %client_ip,
        outcome = outcome.as_str(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Chat request"
    );
    record_gateway_request(provider, outcome, start.elapsed());

    match result {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// OPTIONS /api/chat
pub async fn chat_preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on /api/chat
pub async fn chat_method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

fn parse_request(body: &[u8]) -> Result<ChatRequest, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| ApiError::bad_request(INVALID_REQUEST_FORMAT))?;

    Ok(ChatRequest::from_json(&value)?)
}

async fn dispatch(state: &AppState, request: ChatRequest) -> Result<ChatResult, ApiError> {
    let provider = request.provider;
    let credential = state.credentials.get_credential(provider).await?;
    let adapter = state.registry.get(provider)?;

    let content = adapter
        .complete(&credential, &request.messages)
        .await
        .map_err(|e| log_upstream_failure(provider, e))?;

    Ok(ChatResult::success(provider, content))
}

fn log_upstream_failure(provider: ProviderId, err: DomainError) -> ApiError {
    warn!(provider = %provider, error = %err, "Provider call failed");
    err.into()
}

fn gateway_outcome(kind: FailureKind) -> GatewayOutcome {
    match kind {
        FailureKind::Client => GatewayOutcome::ClientError,
        FailureKind::MissingCredential => GatewayOutcome::MissingCredential,
        FailureKind::Upstream => GatewayOutcome::UpstreamError,
    }
}

/// Caller identity for logs: `x-forwarded-for`, then `client-ip`, else `unknown`
pub fn client_identity(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    header("x-forwarded-for")
        .or_else(|| header("client-ip"))
        .unwrap_or_else(|| "unknown".to_string())
}
