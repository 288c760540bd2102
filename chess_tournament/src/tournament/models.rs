//! Tournament data models: identifiers, players, enums and pairings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use super::errors::{TournamentError, TournamentResult};

/// Tournament ID type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TournamentId(Uuid);

impl TournamentId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TournamentId {
    type Err = TournamentError;

    fn from_str(s: &str) -> TournamentResult<Self> {
        parse_canonical(s).map(Self)
    }
}

/// Parse the hyphenated form only; simple, braced and URN forms are rejected.
fn parse_canonical(s: &str) -> TournamentResult<Uuid> {
    Uuid::parse_str(s)
        .ok()
        .filter(|uuid| uuid.hyphenated().to_string() == s.to_ascii_lowercase())
        .ok_or_else(|| TournamentError::InvalidId(s.to_string()))
}

/// Player ID type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for PlayerId {
    type Err = TournamentError;

    fn from_str(s: &str) -> TournamentResult<Self> {
        parse_canonical(s).map(Self)
    }
}

/// Tournament format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentType {
    /// Everyone plays everyone
    RoundRobin,
    /// Knockout bracket, losers are eliminated
    SingleElimination,
}

impl TournamentType {
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::RoundRobin => "Round Robin",
            Self::SingleElimination => "Single Elimination",
        }
    }
}

impl fmt::Display for TournamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Tournament status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentStatus {
    /// Accepting registrations
    Planned,
    /// Tournament running
    InProgress,
    /// Tournament finished
    Completed,
    /// Tournament cancelled
    Cancelled,
}

impl TournamentStatus {
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Planned => "Tournament is planned and accepting registrations",
            Self::InProgress => "Tournament is currently running",
            Self::Completed => "Tournament has been completed",
            Self::Cancelled => "Tournament has been cancelled",
        }
    }

    /// Only a planned tournament may be started.
    #[must_use]
    pub const fn can_start(&self) -> bool {
        matches!(self, Self::Planned)
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Planned => "PLANNED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        };
        f.write_str(repr)
    }
}

/// A player registered for a tournament.
///
/// Immutable once constructed; the name is guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentPlayer {
    id: PlayerId,
    name: String,
    rating: u32,
}

impl TournamentPlayer {
    /// Build a registration record.
    ///
    /// # Errors
    ///
    /// Returns [`TournamentError::Validation`] if `name` is blank or `rating`
    /// is negative.
    pub fn new(id: PlayerId, name: impl Into<String>, rating: i32) -> TournamentResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TournamentError::Validation(
                "Player name cannot be null or empty".to_string(),
            ));
        }
        let rating = u32::try_from(rating).map_err(|_| {
            TournamentError::Validation("Player rating cannot be negative".to_string())
        })?;

        Ok(Self { id, name, rating })
    }

    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn rating(&self) -> u32 {
        self.rating
    }
}

/// One board of a round. A missing black side is a bye.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pairing {
    pub white_player: Option<PlayerId>,
    pub black_player: Option<PlayerId>,
    pub white_player_name: Option<String>,
    pub black_player_name: Option<String>,
}

impl Pairing {
    /// White plays black
    #[must_use]
    pub fn game(white: &TournamentPlayer, black: &TournamentPlayer) -> Self {
        Self {
            white_player: Some(white.id()),
            black_player: Some(black.id()),
            white_player_name: Some(white.name().to_string()),
            black_player_name: Some(black.name().to_string()),
        }
    }

    /// Player advances without an opponent
    #[must_use]
    pub fn bye(player: &TournamentPlayer) -> Self {
        Self {
            white_player: Some(player.id()),
            black_player: None,
            white_player_name: Some(player.name().to_string()),
            black_player_name: None,
        }
    }

    #[must_use]
    pub const fn is_bye(&self) -> bool {
        self.black_player.is_none()
    }
}

/// Read-only summary of a tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    #[serde(rename = "type")]
    pub tournament_type: TournamentType,
    pub status: TournamentStatus,
    pub current_round: u32,
    pub player_count: usize,
}

/// Input for creating a tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentCommand {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    /// Checked by the aggregate, so a missing type is a validation error
    #[serde(rename = "type", default)]
    pub tournament_type: Option<TournamentType>,
}

/// Input for registering a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPlayerCommand {
    pub tournament_id: String,
    pub player_name: String,
    pub rating: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_id_round_trips_through_string() {
        let id = TournamentId::generate();
        let parsed: TournamentId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_malformed_id_is_invalid_id_error() {
        let err = "not-a-uuid".parse::<TournamentId>().unwrap_err();
        assert!(matches!(err, TournamentError::InvalidId(ref s) if s == "not-a-uuid"));

        let err = "".parse::<PlayerId>().unwrap_err();
        assert!(matches!(err, TournamentError::InvalidId(_)));
    }

    #[test]
    fn test_only_hyphenated_ids_are_accepted() {
        let id = TournamentId::generate();
        let uuid = id.value();

        let upper: TournamentId = id.to_string().to_uppercase().parse().unwrap();
        assert_eq!(upper, id);

        for other_form in [
            uuid.simple().to_string(),
            uuid.braced().to_string(),
            uuid.urn().to_string(),
            format!(" {id} "),
        ] {
            let err = other_form.parse::<TournamentId>().unwrap_err();
            assert_eq!(err, TournamentError::InvalidId(other_form.clone()));
            assert!(other_form.parse::<PlayerId>().is_err());
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(TournamentId::generate(), TournamentId::generate());
        assert_ne!(PlayerId::generate(), PlayerId::generate());
    }

    #[test]
    fn test_player_rejects_blank_name() {
        let err = TournamentPlayer::new(PlayerId::generate(), "   ", 1500).unwrap_err();
        assert!(matches!(err, TournamentError::Validation(_)));
    }

    #[test]
    fn test_player_rejects_negative_rating() {
        let err = TournamentPlayer::new(PlayerId::generate(), "Judit Polgar", -1).unwrap_err();
        assert!(matches!(err, TournamentError::Validation(_)));
    }

    #[test]
    fn test_player_accepts_zero_rating() {
        let player = TournamentPlayer::new(PlayerId::generate(), "Newcomer", 0).unwrap();
        assert_eq!(player.rating(), 0);
        assert_eq!(player.name(), "Newcomer");
    }

    #[test]
    fn test_status_can_start() {
        assert!(TournamentStatus::Planned.can_start());
        assert!(!TournamentStatus::InProgress.can_start());
        assert!(!TournamentStatus::Completed.can_start());
        assert!(!TournamentStatus::Cancelled.can_start());
    }

    #[test]
    fn test_enum_wire_format() {
        assert_eq!(
            serde_json::to_string(&TournamentType::SingleElimination).unwrap(),
            "\"SINGLE_ELIMINATION\""
        );
        assert_eq!(
            serde_json::to_string(&TournamentStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        let parsed: TournamentType = serde_json::from_str("\"ROUND_ROBIN\"").unwrap();
        assert_eq!(parsed, TournamentType::RoundRobin);
    }

    #[test]
    fn test_bye_serializes_black_side_as_null() {
        let player = TournamentPlayer::new(PlayerId::generate(), "Anand", 2750).unwrap();
        let json = serde_json::to_value(Pairing::bye(&player)).unwrap();

        assert_eq!(json["whitePlayerName"], "Anand");
        assert_eq!(json["whitePlayer"], player.id().to_string());
        assert!(json["blackPlayer"].is_null());
        assert!(json["blackPlayerName"].is_null());
    }
}
