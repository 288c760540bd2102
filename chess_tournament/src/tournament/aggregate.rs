//! The tournament aggregate: registration state, status and validation rules.

use chrono::{NaiveDate, Utc};
use log::debug;
use std::collections::HashSet;

use super::errors::{TournamentError, TournamentResult};
use super::models::{
    PlayerId, TournamentDetails, TournamentId, TournamentPlayer, TournamentStatus, TournamentType,
};

/// Fewest registered players a tournament can start with.
pub const MIN_PLAYERS_TO_START: usize = 2;

/// A chess tournament.
///
/// Constructed only through [`Tournament::create`], which validates name,
/// start date and type once. Afterwards the aggregate is mutated in place
/// through `&mut self`; it never performs I/O.
#[derive(Debug, Clone)]
pub struct Tournament {
    id: TournamentId,
    name: String,
    description: String,
    start_date: NaiveDate,
    tournament_type: TournamentType,
    status: TournamentStatus,
    /// Registration order is the seeding order used for pairings.
    players: Vec<TournamentPlayer>,
    player_ids: HashSet<PlayerId>,
    current_round: u32,
}

impl Tournament {
    /// Create a new planned tournament starting after today (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`TournamentError::Validation`] if the name is blank, the start
    /// date is not strictly in the future, or no type was given.
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        tournament_type: Option<TournamentType>,
    ) -> TournamentResult<Self> {
        Self::create_on(
            Utc::now().date_naive(),
            name,
            description,
            start_date,
            tournament_type,
        )
    }

    /// Same as [`Tournament::create`] with an explicit reference date.
    ///
    /// # Errors
    ///
    /// See [`Tournament::create`].
    pub fn create_on(
        today: NaiveDate,
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        tournament_type: Option<TournamentType>,
    ) -> TournamentResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TournamentError::Validation(
                "Tournament name cannot be empty".to_string(),
            ));
        }
        if start_date <= today {
            return Err(TournamentError::Validation(
                "Tournament start date must be in the future".to_string(),
            ));
        }
        let tournament_type = tournament_type.ok_or_else(|| {
            TournamentError::Validation("Tournament type cannot be empty".to_string())
        })?;

        let tournament = Self {
            id: TournamentId::generate(),
            name,
            description: description.into(),
            start_date,
            tournament_type,
            status: TournamentStatus::Planned,
            players: Vec::new(),
            player_ids: HashSet::new(),
            current_round: 0,
        };
        debug!(
            "Created {} tournament {} ({})",
            tournament.tournament_type, tournament.id, tournament.name
        );

        Ok(tournament)
    }

    /// Register a player, appending to the seeding order.
    ///
    /// Names must be unique within the tournament regardless of rating.
    ///
    /// # Errors
    ///
    /// - [`TournamentError::Validation`] for a blank name or negative rating
    /// - [`TournamentError::DuplicateRegistration`] if the id or name is taken
    pub fn register_player(
        &mut self,
        player_id: PlayerId,
        name: impl Into<String>,
        rating: i32,
    ) -> TournamentResult<()> {
        let player = TournamentPlayer::new(player_id, name, rating)?;

        if self.player_ids.contains(&player_id)
            || self.players.iter().any(|p| p.name() == player.name())
        {
            return Err(TournamentError::DuplicateRegistration {
                name: player.name().to_string(),
            });
        }

        debug!(
            "Registered {} ({}) in tournament {}",
            player.name(),
            player.rating(),
            self.id
        );
        self.player_ids.insert(player_id);
        self.players.push(player);
        Ok(())
    }

    /// Move a planned tournament with enough players into progress.
    ///
    /// # Errors
    ///
    /// - [`TournamentError::InvalidStateTransition`] unless the status is planned
    /// - [`TournamentError::InsufficientPlayers`] with fewer than two players
    pub fn start(&mut self) -> TournamentResult<()> {
        if !self.status.can_start() {
            return Err(TournamentError::InvalidStateTransition { from: self.status });
        }
        if self.players.len() < MIN_PLAYERS_TO_START {
            return Err(TournamentError::InsufficientPlayers {
                needed: MIN_PLAYERS_TO_START,
                current: self.players.len(),
            });
        }

        self.status = TournamentStatus::InProgress;
        debug!(
            "Tournament {} started with {} players",
            self.id,
            self.players.len()
        );
        Ok(())
    }

    /// Registered players in registration order
    #[must_use]
    pub fn registered_players(&self) -> &[TournamentPlayer] {
        &self.players
    }

    #[must_use]
    pub fn is_player_registered(&self, player_id: PlayerId) -> bool {
        self.player_ids.contains(&player_id)
    }

    #[must_use]
    pub const fn id(&self) -> TournamentId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub const fn tournament_type(&self) -> TournamentType {
        self.tournament_type
    }

    #[must_use]
    pub const fn status(&self) -> TournamentStatus {
        self.status
    }

    #[must_use]
    pub const fn current_round(&self) -> u32 {
        self.current_round
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Snapshot for presentation layers
    #[must_use]
    pub fn details(&self) -> TournamentDetails {
        TournamentDetails {
            id: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            start_date: self.start_date,
            tournament_type: self.tournament_type,
            status: self.status,
            current_round: self.current_round,
            player_count: self.players.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn next_week() -> NaiveDate {
        today().checked_add_days(Days::new(7)).unwrap()
    }

    fn planned(tournament_type: TournamentType) -> Tournament {
        Tournament::create_on(
            today(),
            "Spring Chess Championship",
            "Annual chess tournament",
            next_week(),
            Some(tournament_type),
        )
        .unwrap()
    }

    #[test]
    fn test_create_tournament_with_valid_data() {
        let tournament = planned(TournamentType::RoundRobin);

        assert_eq!(tournament.name(), "Spring Chess Championship");
        assert_eq!(tournament.description(), "Annual chess tournament");
        assert_eq!(tournament.start_date(), next_week());
        assert_eq!(tournament.tournament_type(), TournamentType::RoundRobin);
        assert_eq!(tournament.status(), TournamentStatus::Planned);
        assert_eq!(tournament.current_round(), 0);
        assert!(tournament.registered_players().is_empty());
    }

    #[test]
    fn test_create_rejects_blank_name() {
        for name in ["", "   "] {
            let err = Tournament::create_on(
                today(),
                name,
                "Description",
                next_week(),
                Some(TournamentType::RoundRobin),
            )
            .unwrap_err();
            assert_eq!(
                err,
                TournamentError::Validation("Tournament name cannot be empty".to_string())
            );
        }
    }

    #[test]
    fn test_create_rejects_past_and_today_start_dates() {
        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
        for date in [yesterday, today()] {
            let err = Tournament::create_on(
                today(),
                "Valid Name",
                "Description",
                date,
                Some(TournamentType::RoundRobin),
            )
            .unwrap_err();
            assert_eq!(
                err,
                TournamentError::Validation(
                    "Tournament start date must be in the future".to_string()
                )
            );
        }
    }

    #[test]
    fn test_create_rejects_missing_type() {
        let err = Tournament::create_on(today(), "Valid Name", "Description", next_week(), None)
            .unwrap_err();
        assert_eq!(
            err,
            TournamentError::Validation("Tournament type cannot be empty".to_string())
        );
    }

    #[test]
    fn test_create_against_wall_clock() {
        let tomorrow = Utc::now()
            .date_naive()
            .checked_add_days(Days::new(1))
            .unwrap();
        let tournament =
            Tournament::create("Open", "", tomorrow, Some(TournamentType::SingleElimination))
                .unwrap();
        assert_eq!(tournament.status(), TournamentStatus::Planned);
    }

    #[test]
    fn test_each_tournament_gets_fresh_id() {
        let a = planned(TournamentType::RoundRobin);
        let b = planned(TournamentType::RoundRobin);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_register_player() {
        let mut tournament = planned(TournamentType::RoundRobin);
        let player_id = PlayerId::generate();

        tournament
            .register_player(player_id, "Magnus Carlsen", 2800)
            .unwrap();

        assert_eq!(tournament.registered_players().len(), 1);
        assert!(tournament.is_player_registered(player_id));
        assert!(!tournament.is_player_registered(PlayerId::generate()));
    }

    #[test]
    fn test_register_same_id_twice_fails() {
        let mut tournament = planned(TournamentType::RoundRobin);
        let player_id = PlayerId::generate();
        tournament
            .register_player(player_id, "Magnus Carlsen", 2800)
            .unwrap();

        let err = tournament
            .register_player(player_id, "Hikaru Nakamura", 2780)
            .unwrap_err();
        assert!(matches!(err, TournamentError::DuplicateRegistration { .. }));
        assert_eq!(tournament.player_count(), 1);
    }

    #[test]
    fn test_register_same_name_with_different_rating_fails() {
        let mut tournament = planned(TournamentType::RoundRobin);
        tournament
            .register_player(PlayerId::generate(), "Magnus Carlsen", 2800)
            .unwrap();

        let err = tournament
            .register_player(PlayerId::generate(), "Magnus Carlsen", 2100)
            .unwrap_err();
        assert_eq!(
            err,
            TournamentError::DuplicateRegistration {
                name: "Magnus Carlsen".to_string()
            }
        );
    }

    #[test]
    fn test_register_rejects_negative_rating_and_blank_name() {
        let mut tournament = planned(TournamentType::RoundRobin);

        let err = tournament
            .register_player(PlayerId::generate(), "Someone", -5)
            .unwrap_err();
        assert!(matches!(err, TournamentError::Validation(_)));

        let err = tournament
            .register_player(PlayerId::generate(), " ", 1200)
            .unwrap_err();
        assert!(matches!(err, TournamentError::Validation(_)));

        assert!(tournament.registered_players().is_empty());
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let mut tournament = planned(TournamentType::SingleElimination);
        for (name, rating) in [("Carol", 1500), ("Alice", 2400), ("Bob", 1800)] {
            tournament
                .register_player(PlayerId::generate(), name, rating)
                .unwrap();
        }

        let names: Vec<&str> = tournament
            .registered_players()
            .iter()
            .map(TournamentPlayer::name)
            .collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_start_requires_two_players() {
        let mut tournament = planned(TournamentType::RoundRobin);
        assert_eq!(
            tournament.start().unwrap_err(),
            TournamentError::InsufficientPlayers {
                needed: 2,
                current: 0
            }
        );

        tournament
            .register_player(PlayerId::generate(), "Alice", 2000)
            .unwrap();
        assert_eq!(
            tournament.start().unwrap_err(),
            TournamentError::InsufficientPlayers {
                needed: 2,
                current: 1
            }
        );
        assert_eq!(tournament.status(), TournamentStatus::Planned);
    }

    #[test]
    fn test_start_twice_fails() {
        let mut tournament = planned(TournamentType::RoundRobin);
        tournament
            .register_player(PlayerId::generate(), "Alice", 2000)
            .unwrap();
        tournament
            .register_player(PlayerId::generate(), "Bob", 1900)
            .unwrap();

        tournament.start().unwrap();
        assert_eq!(tournament.status(), TournamentStatus::InProgress);
        assert_eq!(tournament.current_round(), 0);

        assert_eq!(
            tournament.start().unwrap_err(),
            TournamentError::InvalidStateTransition {
                from: TournamentStatus::InProgress
            }
        );
    }

    #[test]
    fn test_details_snapshot() {
        let mut tournament = planned(TournamentType::SingleElimination);
        tournament
            .register_player(PlayerId::generate(), "Alice", 2000)
            .unwrap();

        let details = tournament.details();
        assert_eq!(details.id, tournament.id().to_string());
        assert_eq!(details.tournament_type, TournamentType::SingleElimination);
        assert_eq!(details.status, TournamentStatus::Planned);
        assert_eq!(details.player_count, 1);
    }
}
