use criterion::{black_box, criterion_group, criterion_main, Criterion};

use putnam::solver::heuristic::{BranchHeuristic, EliminationStrategy};
use putnam::{dp, dpll, generate, resolution, Formula};

fn bench_simple_sat(c: &mut Criterion) {
    // (x1 v x2) ^ (-x1 v x3) ^ (-x2 v -x3)
    let formula = Formula::new(vec![
        putnam::Clause::new(vec![putnam::Lit::new(1), putnam::Lit::new(2)]).unwrap(),
        putnam::Clause::new(vec![putnam::Lit::new(-1), putnam::Lit::new(3)]).unwrap(),
        putnam::Clause::new(vec![putnam::Lit::new(-2), putnam::Lit::new(-3)]).unwrap(),
    ]);

    let mut group = c.benchmark_group("simple_3var_sat");
    group.bench_function("resolution", |b| {
        b.iter(|| resolution(black_box(formula.clone()), EliminationStrategy::MostFreq))
    });
    group.bench_function("dp", |b| {
        b.iter(|| dp(black_box(formula.clone()), EliminationStrategy::MostFreq))
    });
    group.bench_function("dpll", |b| {
        b.iter(|| dpll(black_box(formula.clone()), BranchHeuristic::Jeroslow))
    });
    group.finish();
}

fn bench_pigeonhole(c: &mut Criterion) {
    let mut group = c.benchmark_group("pigeonhole");

    for holes in [3, 4, 5] {
        let (formula, _) = generate::pigeonhole(holes);

        group.bench_with_input(format!("resolution_php_{}_{}", holes + 1, holes), &holes, |b, _| {
            b.iter(|| resolution(black_box(formula.clone()), EliminationStrategy::MostFreq))
        });
        group.bench_with_input(format!("dp_php_{}_{}", holes + 1, holes), &holes, |b, _| {
            b.iter(|| dp(black_box(formula.clone()), EliminationStrategy::MostFreq))
        });
        group.bench_with_input(format!("dpll_php_{}_{}", holes + 1, holes), &holes, |b, _| {
            b.iter(|| dpll(black_box(formula.clone()), BranchHeuristic::Fixed))
        });
    }

    group.finish();
}

fn bench_chain_sat(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    for n in [10, 20, 30] {
        let (formula, _) = generate::chain(n);

        group.bench_with_input(format!("resolution_chain_{n}"), &n, |b, _| {
            b.iter(|| resolution(black_box(formula.clone()), EliminationStrategy::LeastFreq))
        });
        group.bench_with_input(format!("dpll_chain_{n}"), &n, |b, _| {
            b.iter(|| dpll(black_box(formula.clone()), BranchHeuristic::Fixed))
        });
    }

    group.finish();
}

fn bench_random_3sat(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_3sat");

    for (vars, clauses) in [(20, 80), (30, 120)] {
        let formula = generate::random_3sat(vars, clauses, 42);

        group.bench_with_input(format!("dpll_{vars}v_{clauses}c"), &(vars, clauses), |b, _| {
            b.iter(|| dpll(black_box(formula.clone()), BranchHeuristic::Jeroslow))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_simple_sat,
    bench_pigeonhole,
    bench_chain_sat,
    bench_random_3sat
);
criterion_main!(benches);
