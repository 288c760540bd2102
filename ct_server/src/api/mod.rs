//! HTTP API for the tournament server.
//!
//! # Modules
//!
//! - [`tournaments`]: tournament use cases (create, register, start, pairings)
//! - [`request_id`]: request correlation and access logging
//!
//! # Endpoints Overview
//!
//! ```text
//! POST /api/tournaments                          - Create tournament, returns id
//! GET  /api/tournaments/{id}                     - Tournament details
//! POST /api/tournaments/{id}/players             - Register player
//! GET  /api/tournaments/{id}/players             - List players
//! POST /api/tournaments/{id}/start               - Start tournament
//! GET  /api/tournaments/{id}/pairings?round=N    - Round pairings
//! GET  /health                                   - Health status
//! GET  /metrics                                  - Prometheus scrape
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use ct_server::api::{AppState, create_router};
//! use ct_server::config::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::default();
//! let app = create_router(AppState::in_memory(None), config.cors_layer());
//!
//! let listener = tokio::net::TcpListener::bind(config.bind).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod request_id;
pub mod tournaments;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use chess_tournament::{TournamentManager, db::InMemoryTournamentRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// # Fields
///
/// - `tournament_manager`: runs the tournament use cases
/// - `repository`: the store behind the manager, read for health reporting
/// - `metrics`: Prometheus handle, absent when metrics are disabled
#[derive(Clone)]
pub struct AppState {
    pub tournament_manager: Arc<TournamentManager>,
    pub repository: Arc<InMemoryTournamentRepository>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// State backed by a fresh in-memory repository
    pub fn in_memory(metrics: Option<PrometheusHandle>) -> Self {
        let repository = Arc::new(InMemoryTournamentRepository::new());
        let tournament_manager = Arc::new(TournamentManager::new(repository.clone()));
        Self {
            tournament_manager,
            repository,
            metrics,
        }
    }
}

/// Create the complete API router with all endpoints and middleware.
///
/// # Arguments
///
/// - `state`: Application state with the tournament manager
/// - `cors`: CORS policy, see [`crate::config::ServerConfig::cors_layer`]
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/tournaments", post(tournaments::create_tournament))
        .route(
            "/api/tournaments/{tournament_id}",
            get(tournaments::get_tournament),
        )
        .route(
            "/api/tournaments/{tournament_id}/players",
            post(tournaments::register_player).get(tournaments::get_players),
        )
        .route(
            "/api/tournaments/{tournament_id}/start",
            post(tournaments::start_tournament),
        )
        .route(
            "/api/tournaments/{tournament_id}/pairings",
            get(tournaments::get_pairings),
        )
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/health
/// # {"status":"healthy","version":"0.1.0","tournaments":3,"timestamp":"2026-03-02T10:30:00Z"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let tournaments = state.repository.len().await;

    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "tournaments": tournaments,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}

/// Prometheus scrape endpoint.
///
/// Returns `404 Not Found` when metrics are disabled.
async fn metrics_endpoint(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics are disabled").into_response(),
    }
}
