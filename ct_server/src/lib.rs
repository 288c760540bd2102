//! HTTP server for chess tournament management.
//!
//! Exposes the [`chess_tournament`] use cases as a REST API with structured
//! logging, request correlation and Prometheus metrics.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
