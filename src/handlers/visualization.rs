//! Visualization statistics endpoint handler.
//!
//! Projects the mass loss of an ice sheet over a time period. Every request that
//! passes validation is counted in the shared request metrics.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::Uri,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::{ice_sheet_segment, json_response, require_param, ApiError};
use crate::calculator::calculate_mass_loss;
use crate::error::{IceSheetError, Result, VALID_ICE_SHEETS, VALID_PERIODS};
use crate::logging::{generate_request_id, log_request_error};
use crate::model::{IceSheetType, TimePeriod};
use crate::state::AppState;

const ENDPOINT: &str = "/api/icesheet/{iceSheet}/visualization";

/// Query pairs in request order; repeated keys are kept
type QueryPairs = Vec<(String, String)>;

/// Handle GET /api/icesheet/{iceSheet}/visualization requests
pub async fn visualization_handler(
    State(state): State<Arc<AppState>>,
    path: std::result::Result<Path<String>, PathRejection>,
    query: std::result::Result<Query<QueryPairs>, QueryRejection>,
    uri: Uri,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    let ice_sheet = ice_sheet_segment(path, &uri);
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            let error = IceSheetError::InvalidParameter {
                param: "query".to_string(),
                message: format!("Invalid query string: {}", rejection.body_text()),
            };
            log_request_error(&error, ENDPOINT, &request_id, uri.query());
            return ApiError::new(error, uri.path()).into_response();
        }
    };
    let period = first_value(&pairs, "period");

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        ice_sheet = %ice_sheet,
        period = ?period,
        "Processing visualization statistics request"
    );

    match process_visualization(&state, &ice_sheet, period) {
        Ok(response) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                ice_sheet = %ice_sheet,
                period = ?period,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Visualization statistics request successful"
            );
            response
        }
        Err(error) => {
            log_request_error(
                &error,
                ENDPOINT,
                &request_id,
                Some(&format!("iceSheet={}, period={:?}", ice_sheet, period)),
            );
            ApiError::new(error, uri.path()).into_response()
        }
    }
}

/// First value of `key`; later repeats are ignored
fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn process_visualization(
    state: &AppState,
    raw_ice_sheet: &str,
    raw_period: Option<&str>,
) -> Result<Response> {
    let raw_ice_sheet = require_param(
        Some(raw_ice_sheet),
        &format!(
            "Ice sheet parameter cannot be null or empty. Valid values: {}",
            VALID_ICE_SHEETS
        ),
    )?;
    let raw_period = require_param(
        raw_period,
        &format!(
            "Period parameter cannot be null or empty. Valid values: {}",
            VALID_PERIODS
        ),
    )?;

    // This endpoint reports every bad value as INVALID_PARAMETER
    let ice_sheet: IceSheetType = raw_ice_sheet
        .parse()
        .map_err(|e: IceSheetError| IceSheetError::InvalidParameter {
            param: "iceSheet".to_string(),
            message: e.to_string(),
        })?;
    let period: TimePeriod = raw_period.parse()?;

    let statistics = calculate_mass_loss(&state.metrics, ice_sheet, period)?;
    json_response(&statistics)
}
