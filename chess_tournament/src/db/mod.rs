//! Storage port for tournaments.
//!
//! The core talks to storage only through [`TournamentRepository`]
//! (save / find by id). The in-memory adapter is enough for a single
//! process; durable backends implement the same trait.

pub mod repository;

pub use repository::{InMemoryTournamentRepository, TournamentRepository};
