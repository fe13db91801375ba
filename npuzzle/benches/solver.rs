use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use npuzzle::puzzle_nxn::board::Board;
use npuzzle::puzzle_nxn::heuristic::Heuristic;
use npuzzle::solver::Solver;

const EASY: &str = "3\n 0 1 3\n 4 2 5\n 7 8 6";
const MEDIUM: &str = "3\n 8 1 3\n 4 0 2\n 7 6 5";
const UNSOLVABLE: &str = "3\n 1 2 3\n 4 5 6\n 8 7 0";

fn criterion_bench(c: &mut Criterion) {
    let easy: Board = EASY.parse().unwrap();
    let medium: Board = MEDIUM.parse().unwrap();
    let unsolvable: Board = UNSOLVABLE.parse().unwrap();

    c.bench_function("easy_manhattan", |b| {
        b.iter(|| Solver::new(black_box(&easy)))
    });

    c.bench_function("easy_hamming", |b| {
        b.iter(|| Solver::with_heuristic(black_box(&easy), Heuristic::Hamming))
    });

    c.bench_function("medium_manhattan", |b| {
        b.iter(|| Solver::new(black_box(&medium)))
    });

    c.bench_function("unsolvable_manhattan", |b| {
        b.iter(|| Solver::new(black_box(&unsolvable)))
    });
}

criterion_group!(benches, criterion_bench);
criterion_main!(benches);
