//! Axum router wiring.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers::{details_handler, health_handler, root_handler, visualization_handler};
use crate::logging::create_http_trace_layer;
use crate::state::AppState;

/// Build the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/icesheet/health", get(health_handler))
        .route("/api/icesheet/:ice_sheet/details", get(details_handler))
        .route(
            "/api/icesheet/:ice_sheet/visualization",
            get(visualization_handler),
        )
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
