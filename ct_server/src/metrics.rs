//! Prometheus metrics for monitoring tournament server activity.
//!
//! Counters are recorded through the `metrics` facade and rendered in
//! Prometheus text format by the `/metrics` endpoint.
//!
//! # Metrics Categories
//!
//! - **HTTP Metrics**: Request counts by method and status
//! - **Tournament Metrics**: Creations, registrations, starts, pairings
//! - **Error Metrics**: Rejected operations by error code
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use ct_server::metrics;
//!
//! let handle = metrics::install_recorder().unwrap();
//! metrics::tournaments_created_total();
//! println!("{}", handle.render());
//! ```

use chess_tournament::TournamentType;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder.
///
/// # Returns
///
/// Handle used to render the scrape output, or an error message if a
/// recorder is already installed
pub fn install_recorder() -> Result<PrometheusHandle, String> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
pub fn http_requests_total(method: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

// ============================================================================
// Tournament Metrics
// ============================================================================

/// Increment created tournaments counter.
pub fn tournaments_created_total() {
    metrics::counter!("tournaments_created_total").increment(1);
}

/// Increment registered players counter.
pub fn players_registered_total() {
    metrics::counter!("players_registered_total").increment(1);
}

/// Increment started tournaments counter.
pub fn tournaments_started_total() {
    metrics::counter!("tournaments_started_total").increment(1);
}

/// Increment generated pairing sets counter, labelled by format.
pub fn pairings_generated_total(tournament_type: TournamentType) {
    let label = match tournament_type {
        TournamentType::RoundRobin => "ROUND_ROBIN",
        TournamentType::SingleElimination => "SINGLE_ELIMINATION",
    };
    metrics::counter!("pairings_generated_total", "type" => label).increment(1);
}

// ============================================================================
// Error Metrics
// ============================================================================

/// Increment rejected operations counter.
pub fn tournament_errors_total(code: &'static str) {
    metrics::counter!("tournament_errors_total", "code" => code).increment(1);
}
