//! Health check handlers.

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::domain::{ApiResponse, HealthResponse, ReadyComponents, ReadyResponse};
use crate::telemetry;

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Readiness probe.
///
/// Generation has no external dependencies, so the service is ready as soon
/// as it is serving.
pub async fn ready(State(state): State<AppState>) -> Json<ApiResponse<ReadyResponse>> {
    Json(ApiResponse::success(ReadyResponse {
        ready: true,
        components: ReadyComponents {
            generator: true,
            metrics: state.metrics.is_some(),
        },
    }))
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<AppState>) -> String {
    telemetry::render(state.metrics.as_ref())
}
