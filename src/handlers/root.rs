//! Root endpoint handler, a basic connectivity check.

use axum::Json;
use serde::Serialize;

/// Endpoint templates advertised by the root endpoint
pub const ENDPOINTS: [&str; 3] = [
    "/api/icesheet/{GREENLAND|ANTARCTICA}/details",
    "/api/icesheet/{GREENLAND|ANTARCTICA}/visualization?period={ANNUAL|DECADE|CENTURY}",
    "/api/icesheet/health",
];

/// Root response structure
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Service name
    pub message: &'static str,
    /// Always "running"
    pub status: &'static str,
    /// Endpoint templates
    pub endpoints: [&'static str; 3],
}

/// Handle GET / requests
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Ice Sheet Visualization API",
        status: "running",
        endpoints: ENDPOINTS,
    })
}
