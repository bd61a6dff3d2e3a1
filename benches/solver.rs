//! Benchmarks for the Lazor puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lazor::enumerator::PlacementEnumerator;
use lazor::parser;
use lazor::puzzle::Budget;
use lazor::simulator::simulate;
use lazor::solver::Solver;

const FOUR_BY_FOUR: &str = "\
GRID START
oooo
oooo
oooo
oooo
GRID STOP
A 2
C 1
L 7 0 -1 1
P 3 4
P 5 6
";

/// Benchmark the complete solve, including enumeration and simulation.
fn bench_solve(c: &mut Criterion) {
    let puzzle = parser::parse_str(FOUR_BY_FOUR).unwrap();
    c.bench_function("solve_puzzle", |b| b.iter(|| Solver::solve(black_box(&puzzle))));
}

/// Benchmark simulating every emitter across a fixed board, in isolation
/// from the placement search that wraps it.
fn bench_simulate(c: &mut Criterion) {
    let puzzle = parser::parse_str(FOUR_BY_FOUR).unwrap();
    c.bench_function("simulate", |b| {
        b.iter(|| simulate(black_box(&puzzle.lattice), black_box(&puzzle.emitters)))
    });
}

/// Benchmark walking the placement space for a mixed-kind budget, where
/// permutations (rather than combinations) drive the candidate count.
fn bench_enumerate_mixed(c: &mut Criterion) {
    let puzzle = parser::parse_str(FOUR_BY_FOUR).unwrap();
    let positions = puzzle.lattice.empty_positions();
    let budget = Budget {
        reflect: 2,
        opaque: 0,
        refract: 1,
    };
    c.bench_function("enumerate_mixed_kinds", |b| {
        b.iter(|| {
            PlacementEnumerator::new(black_box(positions.clone()), black_box(budget)).count()
        })
    });
}

criterion_group!(benches, bench_solve, bench_simulate, bench_enumerate_mixed);
criterion_main!(benches);
