//! Detail statistics endpoint handler.
//!
//! Returns the current size, ambient temperature and melting rate of one ice sheet.

use axum::{
    extract::{rejection::PathRejection, Path},
    http::Uri,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{debug, info};

use super::{ice_sheet_segment, json_response, require_param, ApiError};
use crate::calculator::detail_statistics;
use crate::error::{Result, VALID_ICE_SHEETS};
use crate::logging::{generate_request_id, log_request_error};
use crate::model::IceSheetType;

const ENDPOINT: &str = "/api/icesheet/{iceSheet}/details";

/// Handle GET /api/icesheet/{iceSheet}/details requests
pub async fn details_handler(
    path: std::result::Result<Path<String>, PathRejection>,
    uri: Uri,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let ice_sheet = ice_sheet_segment(path, &uri);

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        ice_sheet = %ice_sheet,
        "Processing detail statistics request"
    );

    match process_details(&ice_sheet) {
        Ok(response) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                ice_sheet = %ice_sheet,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Detail statistics request successful"
            );
            response
        }
        Err(error) => {
            log_request_error(
                &error,
                ENDPOINT,
                &request_id,
                Some(&format!("iceSheet={}", ice_sheet)),
            );
            ApiError::new(error, uri.path()).into_response()
        }
    }
}

fn process_details(raw_ice_sheet: &str) -> Result<Response> {
    let raw_ice_sheet = require_param(
        Some(raw_ice_sheet),
        &format!(
            "Ice sheet parameter cannot be null or empty. Valid values: {}",
            VALID_ICE_SHEETS
        ),
    )?;
    let ice_sheet: IceSheetType = raw_ice_sheet.parse()?;

    let statistics = detail_statistics(ice_sheet)?;
    json_response(&statistics)
}
