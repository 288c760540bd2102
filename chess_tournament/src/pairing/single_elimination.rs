//! Single elimination bracket seeding.

use super::PairingStrategy;
use crate::tournament::{Pairing, TournamentPlayer};

/// Smallest power of two that fits `players` entrants.
///
/// `bracket_size(5) == 8`, `bracket_size(8) == 8`. Zero players need a
/// bracket of one.
#[must_use]
pub const fn bracket_size(players: usize) -> usize {
    players.next_power_of_two()
}

/// Seeds a knockout bracket in registration order.
///
/// The bracket is padded to a power of two. The first `bracket - n` players
/// receive byes; everyone else is paired by mirrored bracket position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleElimination;

impl PairingStrategy for SingleElimination {
    fn generate_pairings(&self, players: &[TournamentPlayer], _round: u32) -> Vec<Pairing> {
        let n = players.len();
        if n <= 1 {
            return Vec::new();
        }

        let bracket = bracket_size(n);
        let byes = bracket - n;

        (0..bracket / 2)
            .map(|i| {
                if i < byes {
                    Pairing::bye(&players[i])
                } else {
                    Pairing::game(&players[i], &players[bracket - 1 - i])
                }
            })
            .collect()
    }
}
