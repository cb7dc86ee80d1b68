//! Resolution refutation: ordered variable elimination by binary resolution,
//! no unit propagation. Ported structurally from
//! `original_source/solvers/resolution_solver.py`, with the frequency-sort
//! strategy dispatch replaced by the shared closed-enum heuristic module.

use crate::solver::heuristic::{select_bipolar_variable, EliminationStrategy};
use crate::solver::resolve::resolve_on_variable;
use crate::solver::simplify::eliminate_pure_literals;
use crate::telemetry::Telemetry;
use crate::types::Formula;

/// Decides satisfiability of `formula` by ordered binary resolution,
/// recording the clause count after every elimination step.
pub fn resolution(mut formula: Formula, strategy: EliminationStrategy) -> Telemetry {
    let mut clause_counts = Vec::new();

    if formula.contains_empty_clause() {
        return Telemetry::with_clause_counts(false, clause_counts);
    }

    loop {
        eliminate_pure_literals(&mut formula);
        if formula.is_empty() {
            return Telemetry::with_clause_counts(true, clause_counts);
        }

        let var = match select_bipolar_variable(&formula, strategy) {
            Some(v) => v,
            None => return Telemetry::with_clause_counts(true, clause_counts),
        };

        formula = resolve_on_variable(&formula, var);
        clause_counts.push(formula.len());

        if formula.contains_empty_clause() {
            return Telemetry::with_clause_counts(false, clause_counts);
        }
    }
}
