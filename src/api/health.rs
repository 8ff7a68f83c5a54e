//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;
use crate::domain::ProviderId;

/// Service health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<Vec<ProviderCheck>>,
}

/// Health check status
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Whether one provider can currently be served
#[derive(Debug, Serialize)]
pub struct ProviderCheck {
    pub provider: ProviderId,
    pub configured: bool,
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        providers: None,
    };

    (StatusCode::OK, Json(response))
}

/// GET /ready
///
/// Healthy with every credential present, degraded with some, unhealthy
/// (503) with none. Secrets are never included.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let configured = state.configured_providers().await;

    let providers: Vec<ProviderCheck> = ProviderId::ALL
        .into_iter()
        .map(|provider| ProviderCheck {
            provider,
            configured: configured.contains(&provider),
        })
        .collect();

    let status = readiness(configured.len());
    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        providers: Some(providers),
    };

    let status_code = match status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// GET /live
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

fn readiness(configured: usize) -> HealthStatus {
    match configured {
        0 => HealthStatus::Unhealthy,
        n if n == ProviderId::ALL.len() => HealthStatus::Healthy,
        _ => HealthStatus::Degraded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::router::create_router;
    use crate::domain::credentials::mock::MockCredentialProvider;
    use crate::infrastructure::llm::ProviderRegistry;

    async fn get(credentials: MockCredentialProvider, uri: &str) -> (StatusCode, Value) {
        let app = create_router(
            AppState::new(Arc::new(credentials), ProviderRegistry::new()),
            None,
        );

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Degraded).unwrap(),
            "\"degraded\""
        );
    }

    #[tokio::test]
    async fn test_health_reports_version() {
        let (status, body) = get(MockCredentialProvider::new(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body.get("providers").is_none());
    }

    #[tokio::test]
    async fn test_ready_lists_configured_providers_without_secrets() {
        let credentials = MockCredentialProvider::new().with_key(ProviderId::Gemini, "gm-secret");
        let (status, body) = get(credentials, "/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(
            body["providers"],
            json!([
                {"provider": "groq", "configured": false},
                {"provider": "openai", "configured": false},
                {"provider": "gemini", "configured": true}
            ])
        );
        assert!(!body.to_string().contains("gm-secret"));
    }

    #[tokio::test]
    async fn test_ready_without_credentials_is_unavailable() {
        let (status, body) = get(MockCredentialProvider::new(), "/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unhealthy");
    }

    #[tokio::test]
    async fn test_live() {
        let (status, _) = get(MockCredentialProvider::new(), "/live").await;
        assert_eq!(status, StatusCode::OK);
    }
}
