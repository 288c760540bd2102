//! Round robin first-round pairing.

use super::PairingStrategy;
use crate::tournament::{Pairing, TournamentPlayer};

/// Pairs the first registered player against the last, the second against
/// the second-to-last, and so on. With an odd field the first player gets
/// the bye and the remaining players are mirrored among themselves, so
/// nobody is paired against themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundRobin;

impl PairingStrategy for RoundRobin {
    fn generate_pairings(&self, players: &[TournamentPlayer], _round: u32) -> Vec<Pairing> {
        let n = players.len();
        if n <= 1 {
            return Vec::new();
        }

        let odd = n % 2 == 1;
        let pair_count = n.div_ceil(2);
        // with a bye, players[1..] form the mirrored list
        let last = if odd { n } else { n - 1 };

        (0..pair_count)
            .map(|i| {
                if odd && i == 0 {
                    Pairing::bye(&players[0])
                } else {
                    Pairing::game(&players[i], &players[last - i])
                }
            })
            .collect()
    }
}
