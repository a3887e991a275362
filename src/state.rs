//! Application state management for icesheet.
//!
//! This module defines the shared state that is passed to all handlers. The
//! ice sheet constants are static; the only mutable piece is the request
//! metrics holder, created once here and injected everywhere through axum's
//! `State` extractor.

use std::sync::Arc;

use crate::config::Config;
use crate::metrics::RequestMetrics;

/// The main application state shared across all handlers
#[derive(Debug)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Request counters reported by the health endpoint
    pub metrics: RequestMetrics,
}

impl AppState {
    /// Create a new AppState with zeroed counters
    pub fn new(config: Config) -> Self {
        Self {
            config,
            metrics: RequestMetrics::new(),
        }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config) -> Arc<Self> {
        Arc::new(Self::new(config))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
