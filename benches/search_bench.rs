use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mailbox_chess::agent::ai::search;
use mailbox_chess::game_repr::{Color, Position};
use mailbox_chess::session::GameSession;

/// Position after 1.e4 e5 2.Nf3 Nc6 3.Bc4, Black to move.
fn italian() -> Position {
    let mut session = GameSession::new(mailbox_chess::GameConfig::pvp());
    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4")] {
        session
            .perform_move_named(from, to)
            .expect("opening moves are legal");
    }
    *session.position()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let start = Position::default();
    let middlegame = italian();

    for depth in 1..=3u8 {
        group.bench_with_input(BenchmarkId::new("start", depth), &depth, |b, &depth| {
            b.iter(|| black_box(search(black_box(&start), depth, Color::White)))
        });
        group.bench_with_input(BenchmarkId::new("italian", depth), &depth, |b, &depth| {
            b.iter(|| black_box(search(black_box(&middlegame), depth, Color::Black)))
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
