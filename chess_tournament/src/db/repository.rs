//! Repository trait definitions for testability and dependency injection.
//!
//! The tournament core only needs save/load by id. Storage technology lives
//! behind [`TournamentRepository`]; [`InMemoryTournamentRepository`] is the
//! bundled implementation.

use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::tournament::{Tournament, TournamentId};

/// Trait for tournament storage
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Insert or replace the tournament keyed by its id
    async fn save(&self, tournament: Tournament) -> Tournament;

    /// Find tournament by ID
    async fn find_by_id(&self, tournament_id: TournamentId) -> Option<Tournament>;
}

/// Process-local map of tournaments.
///
/// Nothing is evicted and nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTournamentRepository {
    tournaments: Arc<RwLock<HashMap<TournamentId, Tournament>>>,
}

impl InMemoryTournamentRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tournaments
    pub async fn len(&self) -> usize {
        self.tournaments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tournaments.read().await.is_empty()
    }
}

#[async_trait]
impl TournamentRepository for InMemoryTournamentRepository {
    async fn save(&self, tournament: Tournament) -> Tournament {
        self.tournaments
            .write()
            .await
            .insert(tournament.id(), tournament.clone());
        tournament
    }

    async fn find_by_id(&self, tournament_id: TournamentId) -> Option<Tournament> {
        self.tournaments.read().await.get(&tournament_id).cloned()
    }
}
