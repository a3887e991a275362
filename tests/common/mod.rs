//! Common test utilities for icesheet.
//!
//! This module provides shared utilities for testing the icesheet server.

#![allow(dead_code)]

pub mod assertions;
pub mod http_client;
pub mod server;
