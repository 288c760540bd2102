//! Tournament module: the aggregate, its models and the use-case manager.
//!
//! This module provides:
//! - Tournament creation with one-time validation of name, date and type
//! - Player registration with id and name uniqueness
//! - The PLANNED → IN_PROGRESS start transition
//! - Round pairing requests dispatched to [`crate::pairing`]
//!
//! ## Example
//!
//! ```
//! use chess_tournament::db::InMemoryTournamentRepository;
//! use chess_tournament::tournament::{
//!     CreateTournamentCommand, RegisterPlayerCommand, TournamentManager, TournamentType,
//! };
//! use chrono::{Days, Utc};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = TournamentManager::new(Arc::new(InMemoryTournamentRepository::new()));
//!
//!     let id = manager
//!         .create_tournament(CreateTournamentCommand {
//!             name: "Friday Rapid".to_string(),
//!             description: String::new(),
//!             start_date: Utc::now().date_naive().checked_add_days(Days::new(7)).unwrap(),
//!             tournament_type: Some(TournamentType::RoundRobin),
//!         })
//!         .await?;
//!
//!     for (name, rating) in [("Alice", 2100), ("Bob", 1950)] {
//!         manager
//!             .register_player(RegisterPlayerCommand {
//!                 tournament_id: id.clone(),
//!                 player_name: name.to_string(),
//!                 rating,
//!             })
//!             .await?;
//!     }
//!     manager.start_tournament(&id).await?;
//!
//!     let pairings = manager.generate_pairings(&id, 1).await?;
//!     assert_eq!(pairings.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod errors;
pub mod manager;
pub mod models;

pub use aggregate::{MIN_PLAYERS_TO_START, Tournament};
pub use errors::{TournamentError, TournamentResult};
pub use manager::{DEFAULT_ROUND, TournamentManager};
pub use models::{
    CreateTournamentCommand, Pairing, PlayerId, RegisterPlayerCommand, TournamentDetails,
    TournamentId, TournamentPlayer, TournamentStatus, TournamentType,
};
