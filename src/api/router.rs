use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::chat;
use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Browser pages on any origin may call the gateway
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Create the full router with application state
pub fn create_router(state: AppState, metrics: Option<PrometheusMetrics>) -> Router {
    let mut router = Router::new()
        .route(
            "/api/chat",
            post(chat::chat_handler)
                .options(chat::chat_preflight)
                .fallback(chat::chat_method_not_allowed),
        )
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .with_state(state);

    if let Some(metrics) = metrics {
        router = router
            .merge(create_metrics_router(metrics))
            .layer(middleware::from_fn(metrics_middleware));
    }

    router
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
