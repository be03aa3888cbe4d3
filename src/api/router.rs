//! Router setup and configuration.

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{export, health, variants};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes
    let mut health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready));

    if state.config.observability.metrics_enabled {
        health_routes = health_routes.route(
            &state.config.observability.metrics_path,
            get(health::metrics),
        );
    }

    // Variant generation routes
    let variant_routes = Router::new()
        .route("/", post(variants::generate))
        .route("/dot", get(variants::generate_dot))
        .route("/plus", get(variants::generate_plus))
        .route("/export", post(export::export));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .merge(health_routes)
        .nest("/v1/variants", variant_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors),
        )
        .with_state(state)
}
