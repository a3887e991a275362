//! HTTP request handlers for the icesheet API.
//!
//! This module contains all the endpoint handlers for the web server, plus the
//! shared error envelope and the parameter checks every handler runs first.

pub mod details;
pub mod health;
pub mod root;
pub mod visualization;

pub use details::details_handler;
pub use health::health_handler;
pub use root::root_handler;
pub use visualization::visualization_handler;

use axum::{
    extract::{rejection::PathRejection, Path},
    http::{header, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::{IceSheetError, Result};

/// Message returned for every internal failure; details stay in the server log
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An unexpected error occurred while processing the request. Please try again later.";

/// Uniform error body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    /// Error kind, e.g. `INVALID_INPUT`
    pub error: String,
    pub message: String,
    /// Request path that caused the error
    pub path: String,
    /// Seconds since the Unix epoch
    pub timestamp: f64,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>, path: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            path: path.to_string(),
            timestamp: unix_timestamp(),
        }
    }
}

/// An error bound to the request path it occurred on
#[derive(Debug)]
pub struct ApiError {
    pub error: IceSheetError,
    pub path: String,
}

impl ApiError {
    pub fn new(error: IceSheetError, path: &str) -> Self {
        Self {
            error,
            path: path.to_string(),
        }
    }

    /// The envelope sent to the client. Internal errors get the generic message.
    pub fn body(&self) -> ErrorResponse {
        let message = if self.error.is_client_error() {
            self.error.to_string()
        } else {
            INTERNAL_ERROR_MESSAGE.to_string()
        };
        ErrorResponse::new(self.error.kind(), message, &self.path)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.error.status_code(), Json(self.body())).into_response()
    }
}

/// Reject missing, empty or whitespace-only parameters
pub(crate) fn require_param<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(IceSheetError::InvalidInput {
            message: message.to_string(),
        }),
    }
}

/// The `{iceSheet}` path segment. A segment that does not decode to UTF-8 is
/// kept in its raw percent-encoded form, so it fails parsing like any other
/// unknown ice sheet.
pub(crate) fn ice_sheet_segment(
    path: std::result::Result<Path<String>, PathRejection>,
    uri: &Uri,
) -> String {
    match path {
        Ok(Path(ice_sheet)) => ice_sheet,
        Err(_) => uri.path().split('/').nth(3).unwrap_or_default().to_string(),
    }
}

/// Serialize `value` up front so a serialization failure surfaces as an error
/// instead of axum's plain-text 500.
pub(crate) fn json_response<T: Serialize>(value: &T) -> Result<Response> {
    let body = serde_json::to_vec(value)?;
    Ok((
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}

fn unix_timestamp() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_param() {
        assert_eq!(require_param(Some("greenland"), "msg").unwrap(), "greenland");

        for blank in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = require_param(blank, "msg").unwrap_err();
            assert_eq!(err.kind(), "INVALID_INPUT");
            assert_eq!(err.to_string(), "msg");
        }
    }

    #[test]
    fn test_internal_errors_are_generic() {
        let api_error = ApiError::new(
            IceSheetError::UnknownIceSheetType("GREENLAND".to_string()),
            "/api/icesheet/greenland/details",
        );
        let body = api_error.body();

        assert_eq!(body.error, "INTERNAL_ERROR");
        assert_eq!(body.message, INTERNAL_ERROR_MESSAGE);
        assert!(!body.message.contains("GREENLAND"));
        assert_eq!(body.path, "/api/icesheet/greenland/details");
        assert!(body.timestamp > 0.0);
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let api_error = ApiError::new(
            IceSheetError::InvalidIceSheet {
                value: "mars".to_string(),
            },
            "/api/icesheet/mars/details",
        );
        let response = api_error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_response_serialization() {
        let body = ErrorResponse::new("INVALID_INPUT", "empty", "/x");
        let json = serde_json::to_value(&body).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(json["error"], "INVALID_INPUT");
        assert_eq!(json["message"], "empty");
        assert_eq!(json["path"], "/x");
        assert!(json["timestamp"].is_f64());
    }
}
