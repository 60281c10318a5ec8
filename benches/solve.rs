//! Strategy comparison on fixed endgame boards.

use criterion::{criterion_group, criterion_main, Criterion};

use cardsolve::freecell::{BuriedPenalty, Card, FreecellGame, GameState, CELLS};
use cardsolve::search::{DuplicatePolicy, Solver, ZeroHeuristic};

fn card(code: &str) -> Card {
    code.parse().unwrap()
}

/// Queens buried under kings; solvable in 4 moves.
fn four_kings() -> GameState {
    GameState::from_parts(
        [11, 11, 11, 11],
        [None; CELLS],
        [
            vec![card("QH"), card("KH")],
            vec![card("QS"), card("KS")],
            vec![card("QD"), card("KD")],
            vec![card("QC"), card("KC")],
            vec![],
            vec![],
            vec![],
            vec![],
        ],
    )
    .unwrap()
}

fn bench_strategies(c: &mut Criterion) {
    let board = four_kings();
    let mut group = c.benchmark_group("four_kings");

    group.bench_function("breadth_first", |b| {
        b.iter(|| {
            let mut solver = Solver::breadth_first(FreecellGame);
            solver.solve(&board)
        })
    });

    group.bench_function("depth_first_pruned", |b| {
        b.iter(|| {
            let mut solver = Solver::depth_first_with_policy(
                FreecellGame,
                8,
                DuplicatePolicy::PruneVisited,
            );
            solver.solve(&board)
        })
    });

    group.bench_function("astar_uniform", |b| {
        b.iter(|| {
            let mut solver = Solver::a_star(FreecellGame, ZeroHeuristic);
            solver.solve(&board)
        })
    });

    group.bench_function("astar_buried_penalty", |b| {
        b.iter(|| {
            let mut solver = Solver::a_star(FreecellGame, BuriedPenalty);
            solver.solve(&board)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
