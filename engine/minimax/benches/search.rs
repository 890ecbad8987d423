//! Search benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p minimax`
//!
//! These benchmarks measure:
//! - Position encoding (tensor construction and ONNX input layout)
//! - Full move selection at varying depths
//! - Selection from different game phases (opening, midgame, endgame)
//!
//! The material evaluator stands in for the network so the numbers
//! reflect search and encoding cost, not inference latency.

use std::str::FromStr;

use chess::Board;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minimax::{encode, MaterialEvaluator, MoveSelector};

fn board(fen: &str) -> Board {
    Board::from_str(fen).expect("valid FEN")
}

fn midgame() -> Board {
    board("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQ1RK1 b kq - 5 4")
}

fn endgame() -> Board {
    board("8/2k5/8/3p4/3P4/3K4/8/8 w - - 0 1")
}

// =============================================================================
// Encoding Benchmarks
// =============================================================================

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (name, b) in [
        ("opening", Board::default()),
        ("midgame", midgame()),
        ("endgame", endgame()),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &b, |bench, b| {
            bench.iter(|| black_box(encode(black_box(b))));
        });
    }

    group.finish();
}

fn bench_to_input(c: &mut Criterion) {
    let tensor = encode(&Board::default());
    c.bench_function("to_input", |b| {
        b.iter(|| black_box(tensor.to_input()));
    });
}

// =============================================================================
// Move Selection Benchmarks
// =============================================================================

fn bench_select_move_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_move_depth");
    group.sample_size(10);

    let selector = MoveSelector::new(MaterialEvaluator::new());
    let b = midgame();

    for depth in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bench, &depth| {
            bench.iter(|| black_box(selector.select_move(black_box(&b), depth).unwrap()));
        });
    }

    group.finish();
}

fn bench_select_move_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_move_phases");
    group.sample_size(10);

    let selector = MoveSelector::new(MaterialEvaluator::new());

    for (name, b) in [
        ("opening", Board::default()),
        ("midgame", midgame()),
        ("endgame", endgame()),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &b, |bench, b| {
            bench.iter(|| black_box(selector.select_move(black_box(b), 2).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_to_input,
    bench_select_move_depth,
    bench_select_move_phases
);
criterion_main!(benches);
