//! # Chess Tournament
//!
//! Registration, start and round pairing for chess tournaments.
//!
//! The library is split into a pure core and a thin storage port:
//!
//! - **Tournament aggregate**: owns the player list and status, and enforces
//!   every registration and start rule
//! - **Pairing strategies**: pure functions from seeding order to pairings,
//!   one per tournament format, dispatched with `enum_dispatch`
//! - **Repository**: save / find-by-id contract with an in-memory adapter
//! - **Manager**: the use cases, one load, one mutation and one save each
//!
//! ## Core Modules
//!
//! - [`tournament`]: aggregate, models, errors and the use-case manager
//! - [`pairing`]: round robin and single elimination seeding
//! - [`db`]: storage port
//!
//! ## Example
//!
//! ```
//! use chess_tournament::tournament::{PlayerId, Tournament, TournamentStatus, TournamentType};
//! use chrono::{Days, Utc};
//!
//! let start = Utc::now().date_naive().checked_add_days(Days::new(14)).unwrap();
//! let mut tournament =
//!     Tournament::create("City Open", "", start, Some(TournamentType::SingleElimination))?;
//!
//! tournament.register_player(PlayerId::generate(), "Alice", 2200)?;
//! tournament.register_player(PlayerId::generate(), "Bob", 2050)?;
//! tournament.start()?;
//!
//! assert_eq!(tournament.status(), TournamentStatus::InProgress);
//! # Ok::<(), chess_tournament::TournamentError>(())
//! ```

/// Storage port and in-memory adapter.
pub mod db;

/// Round pairing strategies.
pub mod pairing;

/// Tournament aggregate, models and use cases.
pub mod tournament;

pub use pairing::{PairingStrategy, PairingSystem};
pub use tournament::{
    Pairing, PlayerId, Tournament, TournamentError, TournamentId, TournamentManager,
    TournamentPlayer, TournamentResult, TournamentStatus, TournamentType,
};
