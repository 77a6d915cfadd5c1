use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use arcade_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use arcade_chess::game_state::game_state::GameState;
use arcade_chess::move_generation::perft::perft;

/// A position with its published leaf counts, index 0 being depth 1.
struct KnownPosition {
    name: &'static str,
    fen: &'static str,
    nodes_by_depth: &'static [u64],
}

// Pawns always promote to a queen, so counts stop before the first depth
// whose tree contains a promotion.
const POSITIONS: &[KnownPosition] = &[
    KnownPosition {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        nodes_by_depth: &[20, 400, 8902, 197_281],
    },
    KnownPosition {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0",
        nodes_by_depth: &[48, 2039, 97_862],
    },
    KnownPosition {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        nodes_by_depth: &[14, 191, 2812, 43_238, 674_624],
    },
];

/// Benchmarks every depth whose tree fits in `max_nodes`.
struct Suite {
    name: &'static str,
    max_nodes: u64,
}

/// `ARCADE_BENCH_SUITE=standard` opts into the deep trees.
fn selected_suite() -> Suite {
    match std::env::var("ARCADE_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => Suite {
            name: "standard",
            max_nodes: 1_000_000,
        },
        _ => Suite {
            name: "quick",
            max_nodes: 10_000,
        },
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite = selected_suite();

    let mut group = c.benchmark_group(format!("perft_{}", suite.name));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for position in POSITIONS {
        let game = GameState::from_fen(position.fen).expect("benchmark FEN should parse");
        let depths = position
            .nodes_by_depth
            .iter()
            .zip(1u8..)
            .take_while(|(nodes, _)| **nodes <= suite.max_nodes);

        for (&expected, depth) in depths {
            let mut board = game.clone();
            assert_eq!(
                perft(&mut board, depth).nodes as u64,
                expected,
                "{} depth {depth} miscounted before timing",
                position.name
            );

            group.throughput(Throughput::Elements(expected));
            group.bench_with_input(
                BenchmarkId::new(position.name, depth),
                &depth,
                |b, &depth| b.iter(|| black_box(perft(black_box(&mut board), depth).nodes)),
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
