//! Error types for the icesheet application.
//!
//! This module defines a single error enum covering configuration, startup and
//! request-validation failures, plus the mapping from each variant onto the
//! error kind and HTTP status reported to API clients.

use axum::http::StatusCode;
use thiserror::Error;

/// Valid ice sheet values, as listed in error messages
pub const VALID_ICE_SHEETS: &str = "GREENLAND, ANTARCTICA";

/// Valid time period values, as listed in error messages
pub const VALID_PERIODS: &str = "CENTURY, DECADE, ANNUAL";

/// The main error type for icesheet operations.
#[derive(Error, Debug)]
pub enum IceSheetError {
    /// Lookup of an ice sheet that has no constant record
    #[error("Unknown ice sheet type: {0}")]
    UnknownIceSheetType(String),

    /// Missing, empty or whitespace-only request parameter
    #[error("{message}")]
    InvalidInput { message: String },

    /// Ice sheet value present but not a known ice sheet
    #[error("Invalid ice sheet type: '{value}'. Valid values: {valid}", valid = VALID_ICE_SHEETS)]
    InvalidIceSheet { value: String },

    /// Parameter value present but not in its enumerator
    #[error("{message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl IceSheetError {
    /// Error kind reported in the `error` field of the response envelope
    pub fn kind(&self) -> &'static str {
        match self {
            IceSheetError::InvalidInput { .. } => "INVALID_INPUT",
            IceSheetError::InvalidIceSheet { .. } => "INVALID_ICE_SHEET",
            IceSheetError::InvalidParameter { .. } => "INVALID_PARAMETER",
            _ => "INTERNAL_ERROR",
        }
    }

    /// HTTP status used when this error reaches a handler boundary
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Whether the caller can fix this by changing the request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            IceSheetError::InvalidInput { .. }
                | IceSheetError::InvalidIceSheet { .. }
                | IceSheetError::InvalidParameter { .. }
        )
    }
}

/// Convenience type alias for Results with IceSheetError
pub type Result<T> = std::result::Result<T, IceSheetError>;
