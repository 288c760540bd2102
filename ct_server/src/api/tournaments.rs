//! Tournament API handlers.
//!
//! This module provides HTTP REST endpoints for the tournament use cases:
//! - Creating a tournament and getting its details
//! - Registering players and listing them in seeding order
//! - Starting a tournament
//! - Generating round pairings
//!
//! Failures are returned as `{"error", "message", "status"}` JSON bodies.
//!
//! # Examples
//!
//! Create a tournament:
//! ```bash
//! curl -X POST http://localhost:8080/api/tournaments \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Spring Open", "startDate": "2030-04-01", "type": "ROUND_ROBIN"}'
//! ```
//!
//! Register a player:
//! ```bash
//! curl -X POST http://localhost:8080/api/tournaments/ID/players \
//!   -H "Content-Type: application/json" \
//!   -d '{"playerName": "Alice", "rating": 1850}'
//! ```

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chess_tournament::{
    Pairing, TournamentError, TournamentPlayer,
    tournament::{CreateTournamentCommand, DEFAULT_ROUND, RegisterPlayerCommand, TournamentDetails},
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::{logging, metrics};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPlayerRequest {
    pub player_name: String,
    pub rating: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct PairingsQuery {
    pub round: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status: u16,
}

/// Tournament failure rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub TournamentError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            TournamentError::Validation(_)
            | TournamentError::InvalidId(_)
            | TournamentError::InsufficientPlayers { .. } => StatusCode::BAD_REQUEST,
            TournamentError::DuplicateRegistration { .. }
            | TournamentError::InvalidStateTransition { .. } => StatusCode::CONFLICT,
            TournamentError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(TournamentError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(TournamentError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.0.error_code();
        let message = self.0.to_string();

        logging::log_tournament_error(code, &message);
        metrics::tournament_errors_total(code);

        let body = ErrorResponse {
            error: code.to_string(),
            message,
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// Create a tournament.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Spring Open",
///   "description": "Club championship",
///   "startDate": "2030-04-01",
///   "type": "SINGLE_ELIMINATION"
/// }
/// ```
///
/// # Response
///
/// Returns `200 OK` with the new tournament id as a plain text body.
///
/// # Errors
///
/// - `400 Bad Request`: Blank name, start date not in the future, missing type
///   or a malformed body
pub async fn create_tournament(
    State(state): State<AppState>,
    payload: Result<Json<CreateTournamentCommand>, JsonRejection>,
) -> ApiResult<String> {
    let Json(command) = payload?;
    let tournament_id = state.tournament_manager.create_tournament(command).await?;
    metrics::tournaments_created_total();
    Ok(tournament_id)
}

/// Get tournament details.
///
/// # Response
///
/// Returns `200 OK` with:
/// ```json
/// {
///   "id": "0b5c...",
///   "name": "Spring Open",
///   "description": "",
///   "startDate": "2030-04-01",
///   "type": "ROUND_ROBIN",
///   "status": "PLANNED",
///   "currentRound": 0,
///   "playerCount": 4
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed id
/// - `404 Not Found`: Tournament doesn't exist
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
) -> ApiResult<Json<TournamentDetails>> {
    let details = state
        .tournament_manager
        .get_tournament(&tournament_id)
        .await?;
    Ok(Json(details))
}

/// Register a player.
///
/// # Errors
///
/// - `400 Bad Request`: Blank name or negative rating
/// - `404 Not Found`: Tournament doesn't exist
/// - `409 Conflict`: Name already registered
pub async fn register_player(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
    payload: Result<Json<RegisterPlayerRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(request) = payload?;
    state
        .tournament_manager
        .register_player(RegisterPlayerCommand {
            tournament_id,
            player_name: request.player_name,
            rating: request.rating,
        })
        .await?;
    metrics::players_registered_total();
    Ok(StatusCode::OK)
}

/// List registered players in seeding order.
pub async fn get_players(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
) -> ApiResult<Json<Vec<TournamentPlayer>>> {
    let players = state.tournament_manager.get_players(&tournament_id).await?;
    Ok(Json(players))
}

/// Start a tournament.
///
/// # Errors
///
/// - `400 Bad Request`: Fewer than two players
/// - `404 Not Found`: Tournament doesn't exist
/// - `409 Conflict`: Tournament is not in the planned state
pub async fn start_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .tournament_manager
        .start_tournament(&tournament_id)
        .await?;
    metrics::tournaments_started_total();
    Ok(StatusCode::OK)
}

/// Generate pairings for a round.
///
/// # Query Parameters
///
/// - `round`: Round number, defaults to 1
///
/// # Response
///
/// Returns `200 OK` with the pairings; a bye has `null` black fields:
/// ```json
/// [
///   {"whitePlayer": "...", "blackPlayer": null, "whitePlayerName": "Alice", "blackPlayerName": null},
///   {"whitePlayer": "...", "blackPlayer": "...", "whitePlayerName": "Bob", "blackPlayerName": "Carol"}
/// ]
/// ```
pub async fn get_pairings(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
    query: Result<Query<PairingsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Pairing>>> {
    let Query(query) = query?;
    let round = query.round.unwrap_or(DEFAULT_ROUND);

    let (tournament_type, pairings) = state
        .tournament_manager
        .generate_typed_pairings(&tournament_id, round)
        .await?;
    metrics::pairings_generated_total(tournament_type);

    Ok(Json(pairings))
}
