//! Cross-solver invariants and the spec's end-to-end scenario table.

use putnam::solver::heuristic::{BranchHeuristic, EliminationStrategy};
use putnam::{dimacs, dp, dpll, resolution};

fn lit(v: i32) -> putnam::Lit {
    putnam::Lit::new(v)
}

fn parse(src: &str) -> putnam::Formula {
    dimacs::parse(src.as_bytes()).unwrap().0
}

// ---- Universal invariants (spec §8) ----

#[test]
fn empty_formula_is_sat_across_all_solvers() {
    let empty = putnam::Formula::new(vec![]);
    assert!(resolution(empty.clone(), EliminationStrategy::Null).sat);
    assert!(dp(empty.clone(), EliminationStrategy::Null).sat);
    assert!(dpll(empty, BranchHeuristic::Fixed).sat);
}

#[test]
fn empty_clause_is_unsat_across_all_solvers() {
    let unsat = putnam::Formula::new(vec![putnam::Clause::empty()]);
    assert!(!resolution(unsat.clone(), EliminationStrategy::Null).sat);
    assert!(!dp(unsat.clone(), EliminationStrategy::Null).sat);
    assert!(!dpll(unsat, BranchHeuristic::Fixed).sat);
}

#[test]
fn contradiction_is_unsat_across_all_solvers() {
    let formula = putnam::Formula::new(vec![
        putnam::Clause::new(vec![lit(1)]).unwrap(),
        putnam::Clause::new(vec![lit(-1)]).unwrap(),
    ]);
    assert!(!resolution(formula.clone(), EliminationStrategy::Null).sat);
    assert!(!dp(formula.clone(), EliminationStrategy::Null).sat);
    assert!(!dpll(formula, BranchHeuristic::Fixed).sat);
}

#[test]
fn single_unit_clause_is_sat_across_all_solvers() {
    let formula = putnam::Formula::new(vec![putnam::Clause::new(vec![lit(1)]).unwrap()]);
    assert!(resolution(formula.clone(), EliminationStrategy::Null).sat);
    assert!(dp(formula.clone(), EliminationStrategy::Null).sat);
    assert!(dpll(formula, BranchHeuristic::Fixed).sat);
}

#[test]
fn tautological_clause_does_not_change_verdict() {
    let base = putnam::Formula::new(vec![putnam::Clause::new(vec![lit(1), lit(2)]).unwrap()]);
    let mut with_tautology = base.clauses().to_vec();
    // Clause::new drops the tautology itself, so the formula is identical.
    assert!(putnam::Clause::new(vec![lit(3), lit(-3)]).is_none());
    with_tautology.push(putnam::Clause::new(vec![lit(1), lit(2)]).unwrap());
    let with_tautology = putnam::Formula::new(with_tautology);

    assert_eq!(
        dpll(base, BranchHeuristic::Fixed).sat,
        dpll(with_tautology, BranchHeuristic::Fixed).sat
    );
}

#[test]
fn dpll_decisions_are_nonnegative_and_zero_when_unit_propagation_suffices() {
    let formula = parse("p cnf 2 2\n1 0\n-2 0\n");
    let telemetry = dpll(formula, BranchHeuristic::Fixed);
    assert!(telemetry.sat);
    assert_eq!(telemetry.decisions, Some(0));
}

#[test]
fn solvers_agree_on_verdict_for_the_same_formula() {
    let formula = parse("p cnf 3 4\n1 2 0\n1 -2 0\n-1 2 0\n-1 -2 0\n");
    let r = resolution(formula.clone(), EliminationStrategy::MostFreq).sat;
    let d = dp(formula.clone(), EliminationStrategy::MostFreq).sat;
    let p = dpll(formula, BranchHeuristic::MostFreq).sat;
    assert_eq!(r, d);
    assert_eq!(d, p);
}

// ---- Boundary (spec §8) ----

#[test]
fn single_bipolar_variable_resolves_in_one_step() {
    let formula = putnam::Formula::new(vec![
        putnam::Clause::new(vec![lit(1)]).unwrap(),
        putnam::Clause::new(vec![lit(-1)]).unwrap(),
    ]);
    let telemetry = resolution(formula, EliminationStrategy::Null);
    assert_eq!(telemetry.clause_counts.unwrap().len(), 1);
}

#[test]
fn pigeonhole_is_unsat_for_several_hole_counts() {
    for holes in 1..=4 {
        let (formula, _) = putnam::generate::pigeonhole(holes);
        assert!(!resolution(formula.clone(), EliminationStrategy::MostFreq).sat);
        assert!(!dp(formula.clone(), EliminationStrategy::MostFreq).sat);
        assert!(!dpll(formula, BranchHeuristic::Fixed).sat);
    }
}

// ---- End-to-end scenarios (spec §8, literal values) ----

#[test]
fn scenario_trivial_sat() {
    let formula = parse("p cnf 1 1\n1 0\n");
    assert!(resolution(formula.clone(), EliminationStrategy::Null).sat);
    assert!(dp(formula.clone(), EliminationStrategy::Null).sat);
    let dpll_t = dpll(formula.clone(), BranchHeuristic::Fixed);
    assert!(dpll_t.sat);
    assert_eq!(dpll_t.decisions, Some(0));
    assert_eq!(
        resolution(formula, EliminationStrategy::Null).clause_counts,
        Some(vec![])
    );
}

#[test]
fn scenario_trivial_unsat_contradiction() {
    let formula = parse("p cnf 1 2\n1 0\n-1 0\n");
    assert!(!resolution(formula.clone(), EliminationStrategy::Null).sat);
    assert!(!dp(formula.clone(), EliminationStrategy::Null).sat);
    assert!(!dpll(formula, BranchHeuristic::Fixed).sat);
}

#[test]
fn scenario_pure_literal_sat() {
    let formula = parse("p cnf 2 2\n1 2 0\n1 -2 0\n");
    assert!(resolution(formula.clone(), EliminationStrategy::Null).sat);
    assert!(dp(formula.clone(), EliminationStrategy::Null).sat);
    assert!(dpll(formula, BranchHeuristic::Fixed).sat);
}

#[test]
fn scenario_resolution_chain_unsat() {
    let formula = parse("p cnf 2 4\n1 2 0\n1 -2 0\n-1 2 0\n-1 -2 0\n");
    let telemetry = resolution(formula.clone(), EliminationStrategy::Null);
    assert!(!telemetry.sat);
    assert!(!telemetry.clause_counts.unwrap().is_empty());
    assert!(!dp(formula.clone(), EliminationStrategy::Null).sat);
    assert!(!dpll(formula, BranchHeuristic::Fixed).sat);
}

#[test]
fn scenario_php_3_2_is_unsat_with_positive_decisions() {
    let (formula, _vars) = putnam::generate::pigeonhole(2);
    assert!(!resolution(formula.clone(), EliminationStrategy::MostFreq).sat);
    assert!(!dp(formula.clone(), EliminationStrategy::MostFreq).sat);
    let telemetry = dpll(formula, BranchHeuristic::Fixed);
    assert!(!telemetry.sat);
    assert!(telemetry.decisions.unwrap() > 0);
}

#[test]
fn scenario_pigeon_sat_relaxation() {
    // PHP(3->2) with one at-least-one-hole clause removed becomes satisfiable.
    let (formula, _vars) = putnam::generate::pigeonhole(2);
    let mut clauses = formula.clauses().to_vec();
    clauses.remove(0);
    let relaxed = putnam::Formula::new(clauses);

    assert!(resolution(relaxed.clone(), EliminationStrategy::MostFreq).sat);
    assert!(dp(relaxed.clone(), EliminationStrategy::MostFreq).sat);
    assert!(dpll(relaxed, BranchHeuristic::Fixed).sat);
}
