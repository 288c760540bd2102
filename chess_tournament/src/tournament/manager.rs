//! Tournament manager: the use cases over a tournament repository.

use log::info;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::aggregate::Tournament;
use super::errors::{TournamentError, TournamentResult};
use super::models::{
    CreateTournamentCommand, Pairing, PlayerId, RegisterPlayerCommand, TournamentDetails,
    TournamentId, TournamentPlayer, TournamentType,
};
use crate::db::TournamentRepository;
use crate::pairing::{PairingStrategy, PairingSystem};

/// Round used when a caller does not ask for one
pub const DEFAULT_ROUND: u32 = 1;

/// Tournament manager
///
/// Loads aggregates from the repository, applies one operation and saves
/// them back. Aggregate errors are returned untouched.
#[derive(Clone)]
pub struct TournamentManager {
    repository: Arc<dyn TournamentRepository>,
    /// Serializes load-mutate-save so concurrent updates are not lost
    write_lock: Arc<Mutex<()>>,
}

impl TournamentManager {
    /// Create a new tournament manager
    pub fn new(repository: Arc<dyn TournamentRepository>) -> Self {
        Self {
            repository,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create a new tournament and return its id as a string
    pub async fn create_tournament(
        &self,
        command: CreateTournamentCommand,
    ) -> TournamentResult<String> {
        let tournament = Tournament::create(
            command.name,
            command.description,
            command.start_date,
            command.tournament_type,
        )?;
        let tournament = self.repository.save(tournament).await;

        info!(
            "Created tournament {} '{}' ({}) starting {}",
            tournament.id(),
            tournament.name(),
            tournament.tournament_type(),
            tournament.start_date()
        );
        Ok(tournament.id().to_string())
    }

    /// Register a player under a freshly generated player id
    pub async fn register_player(&self, command: RegisterPlayerCommand) -> TournamentResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut tournament = self.load(&command.tournament_id).await?;

        let player_id = PlayerId::generate();
        tournament.register_player(player_id, command.player_name, command.rating)?;
        let tournament = self.repository.save(tournament).await;

        info!(
            "Player {} registered for tournament {} ({} players)",
            player_id,
            tournament.id(),
            tournament.player_count()
        );
        Ok(())
    }

    /// Start a tournament
    pub async fn start_tournament(&self, tournament_id: &str) -> TournamentResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut tournament = self.load(tournament_id).await?;

        tournament.start()?;
        let tournament = self.repository.save(tournament).await;

        info!(
            "Tournament {} started with {} players",
            tournament.id(),
            tournament.player_count()
        );
        Ok(())
    }

    /// Get registered players in registration order
    pub async fn get_players(&self, tournament_id: &str) -> TournamentResult<Vec<TournamentPlayer>> {
        let tournament = self.load(tournament_id).await?;
        Ok(tournament.registered_players().to_vec())
    }

    /// Generate pairings for `round` using the tournament's format.
    ///
    /// Only round one is seeded; other rounds currently return the same
    /// pairings.
    pub async fn generate_pairings(
        &self,
        tournament_id: &str,
        round: u32,
    ) -> TournamentResult<Vec<Pairing>> {
        let (_, pairings) = self.generate_typed_pairings(tournament_id, round).await?;
        Ok(pairings)
    }

    /// Same as [`TournamentManager::generate_pairings`], also returning the
    /// format that produced the pairings.
    pub async fn generate_typed_pairings(
        &self,
        tournament_id: &str,
        round: u32,
    ) -> TournamentResult<(TournamentType, Vec<Pairing>)> {
        if round == 0 {
            return Err(TournamentError::Validation(
                "Round must be a positive number".to_string(),
            ));
        }
        let tournament = self.load(tournament_id).await?;

        let tournament_type = tournament.tournament_type();
        let pairings = PairingSystem::from(tournament_type)
            .generate_pairings(tournament.registered_players(), round);

        info!(
            "Generated {} pairings for round {} of tournament {}",
            pairings.len(),
            round,
            tournament.id()
        );
        Ok((tournament_type, pairings))
    }

    /// Get tournament information
    pub async fn get_tournament(&self, tournament_id: &str) -> TournamentResult<TournamentDetails> {
        let tournament = self.load(tournament_id).await?;
        Ok(tournament.details())
    }

    async fn load(&self, tournament_id: &str) -> TournamentResult<Tournament> {
        let id: TournamentId = tournament_id.parse()?;
        self.repository
            .find_by_id(id)
            .await
            .ok_or_else(|| TournamentError::NotFound(tournament_id.to_string()))
    }
}
