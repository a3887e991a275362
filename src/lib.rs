//! # icesheet
//!
//! A small, in-memory HTTP API projecting ice-sheet mass loss.
//!
//! The service holds fixed physical constants for the Greenland and Antarctic
//! ice sheets and answers two questions about them: what the sheet looks like
//! now, and how much mass it loses over a year, a decade or a century at its
//! current melting rate.
//!
//! ## Architecture
//!
//! - **Model**: immutable constant tables and the closed `IceSheetType`/`TimePeriod` sets
//! - **Calculator**: the linear mass-loss projection
//! - **Metrics**: a mutex-guarded counter pair reported by the health endpoint
//! - **API Layer**: axum handlers with a uniform JSON error envelope

pub mod calculator;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod router;
pub mod state;

pub use calculator::{calculate_mass_loss, detail_statistics, DetailStatistics, MassLossResult};
pub use config::Config;
pub use error::{IceSheetError, Result};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_operation_end,
    log_operation_start, log_request_error,
};
pub use metrics::{InFlightGuard, MetricsSnapshot, RequestMetrics};
pub use model::{get_base_data, period_to_seconds, IceSheetConstants, IceSheetType, TimePeriod};
pub use router::build_router;
pub use state::AppState;
