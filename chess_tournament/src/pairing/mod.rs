//! Round pairing strategies.
//!
//! Each tournament format has its own strategy, selected once per request
//! from the tournament's [`TournamentType`] and dispatched through
//! `enum_dispatch`:
//!
//! - [`RoundRobin`]: mirrored list pairing, first vs last
//! - [`SingleElimination`]: power-of-two bracket seeding with byes
//!
//! Strategies are pure: the same player order always yields the same pairings.
//!
//! ## Known limitation
//!
//! Only the first round is seeded. The `round` argument is accepted by both
//! strategies but does not change their output.
//!
//! ## Example
//!
//! ```
//! use chess_tournament::pairing::{PairingStrategy, PairingSystem};
//! use chess_tournament::tournament::{PlayerId, TournamentPlayer, TournamentType};
//!
//! let players: Vec<TournamentPlayer> = ["A", "B", "C"]
//!     .into_iter()
//!     .map(|name| TournamentPlayer::new(PlayerId::generate(), name, 1500).unwrap())
//!     .collect();
//!
//! let system = PairingSystem::from(TournamentType::RoundRobin);
//! let pairings = system.generate_pairings(&players, 1);
//!
//! assert_eq!(pairings.len(), 2);
//! assert!(pairings[0].is_bye());
//! ```

use enum_dispatch::enum_dispatch;

use crate::tournament::{Pairing, TournamentPlayer, TournamentType};

pub mod round_robin;
pub mod single_elimination;

pub use round_robin::RoundRobin;
pub use single_elimination::{SingleElimination, bracket_size};

/// Produces the pairings of a round from players in seeding order.
#[enum_dispatch]
pub trait PairingStrategy {
    /// Pair `players` (registration order) for `round`.
    ///
    /// Returns an empty list for fewer than two players.
    #[must_use]
    fn generate_pairings(&self, players: &[TournamentPlayer], round: u32) -> Vec<Pairing>;
}

/// Pairing strategy matching a tournament format
#[enum_dispatch(PairingStrategy)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingSystem {
    RoundRobin,
    SingleElimination,
}

impl From<TournamentType> for PairingSystem {
    fn from(value: TournamentType) -> Self {
        match value {
            TournamentType::RoundRobin => RoundRobin.into(),
            TournamentType::SingleElimination => SingleElimination.into(),
        }
    }
}
