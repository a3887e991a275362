//! Health endpoint handler.
//!
//! Reports the request counters. Both calculator and data-service totals are
//! read from the same counter.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use crate::metrics::MetricsSnapshot;
use crate::state::AppState;

/// How long the health check waits for the counter lock
pub const SNAPSHOT_TIMEOUT: Duration = Duration::from_millis(100);

/// Health response structure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// "UP" or "DOWN"
    pub status: String,
    pub total_calculator_requests: u64,
    pub current_concurrent_requests: u64,
    pub total_data_service_requests: u64,
}

impl HealthResponse {
    pub fn up(snapshot: MetricsSnapshot) -> Self {
        Self {
            status: "UP".to_string(),
            total_calculator_requests: snapshot.total_requests,
            current_concurrent_requests: snapshot.in_flight,
            total_data_service_requests: snapshot.total_requests,
        }
    }

    pub fn down() -> Self {
        Self {
            status: "DOWN".to_string(),
            total_calculator_requests: 0,
            current_concurrent_requests: 0,
            total_data_service_requests: 0,
        }
    }
}

/// Handle GET /api/icesheet/health requests
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.metrics.try_snapshot(SNAPSHOT_TIMEOUT) {
        Some(snapshot) => {
            debug!(
                total_requests = snapshot.total_requests,
                in_flight = snapshot.in_flight,
                "Health check"
            );
            (StatusCode::OK, Json(HealthResponse::up(snapshot))).into_response()
        }
        None => {
            error!(
                timeout_ms = SNAPSHOT_TIMEOUT.as_millis() as u64,
                "Error retrieving health status: counter lock unavailable"
            );
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthResponse::down())).into_response()
        }
    }
}
