//! Tournament error types.

use thiserror::Error;

use super::models::TournamentStatus;

/// Tournament errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    /// Malformed input rejected at construction time
    #[error("{0}")]
    Validation(String),

    /// Player id or name already taken in this tournament
    #[error("Player with name '{name}' is already registered for this tournament")]
    DuplicateRegistration { name: String },

    /// No tournament stored under the given id
    #[error("Tournament with id '{0}' not found")]
    NotFound(String),

    /// Identifier string is not a valid UUID
    #[error("Invalid identifier: '{0}'")]
    InvalidId(String),

    /// `start()` called outside the planned state
    #[error("Tournament cannot be started in current status: {from}")]
    InvalidStateTransition { from: TournamentStatus },

    /// Not enough players to start
    #[error("Cannot start tournament with less than {needed} players (have {current})")]
    InsufficientPlayers { needed: usize, current: usize },
}

impl TournamentError {
    /// Stable machine-readable code for presentation layers
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "BAD_REQUEST",
            Self::DuplicateRegistration { .. } => "PLAYER_ALREADY_REGISTERED",
            Self::NotFound(_) => "TOURNAMENT_NOT_FOUND",
            Self::InvalidId(_) => "INVALID_TOURNAMENT_ID",
            Self::InvalidStateTransition { .. } => "INVALID_STATE_TRANSITION",
            Self::InsufficientPlayers { .. } => "INSUFFICIENT_PLAYERS",
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
