use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use chess_tournament::{
    PairingStrategy, PairingSystem,
    tournament::{PlayerId, Tournament, TournamentPlayer, TournamentType},
};
use chrono::{Days, Utc};
use std::hint::black_box;

/// Helper to build a field of N players in seeding order
fn field(n_players: usize) -> Vec<TournamentPlayer> {
    (0..n_players)
        .map(|i| TournamentPlayer::new(PlayerId::generate(), format!("player{i}"), 1500).unwrap())
        .collect()
}

/// Benchmark both strategies across field sizes
fn bench_pairing_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_one_pairings");

    for n_players in [8, 33, 128, 1000] {
        let players = field(n_players);
        for tournament_type in [TournamentType::RoundRobin, TournamentType::SingleElimination] {
            let system = PairingSystem::from(tournament_type);
            group.bench_with_input(
                BenchmarkId::new(format!("{tournament_type:?}"), n_players),
                &players,
                |b, players| b.iter(|| system.generate_pairings(black_box(players), 1)),
            );
        }
    }

    group.finish();
}

/// Benchmark registration, which checks name uniqueness on every insert
fn bench_registration(c: &mut Criterion) {
    let start = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(7))
        .unwrap();

    c.bench_function("register_256_players", |b| {
        b.iter(|| {
            let mut tournament =
                Tournament::create("Bench", "", start, Some(TournamentType::RoundRobin)).unwrap();
            for i in 0..256 {
                tournament
                    .register_player(PlayerId::generate(), format!("player{i}"), 1500)
                    .unwrap();
            }
            tournament
        });
    });
}

criterion_group!(benches, bench_pairing_strategies, bench_registration);
criterion_main!(benches);
