//! Davis-Putnam variable elimination: Resolution augmented with unit
//! propagation and pure-literal elimination interleaved between
//! eliminations. Ported structurally from
//! `original_source/solvers/dp_solver.py`'s outer loop, reusing the
//! resolvent machinery `solver::resolution` is built on.

use crate::solver::heuristic::{select_bipolar_variable, EliminationStrategy};
use crate::solver::resolve::resolve_on_variable;
use crate::solver::simplify::{eliminate_pure_literals, unit_propagate};
use crate::telemetry::Telemetry;
use crate::types::Formula;

/// Decides satisfiability of `formula` by Davis-Putnam elimination.
///
/// Preserves the source asymmetry the spec documents as intentional: a unit
/// propagation conflict returns immediately with no new `clause_counts`
/// entry, while an elimination step that produces the empty clause does get
/// one appended before returning.
pub fn dp(mut formula: Formula, strategy: EliminationStrategy) -> Telemetry {
    let mut clause_counts = Vec::new();

    if formula.contains_empty_clause() {
        return Telemetry::with_clause_counts(false, clause_counts);
    }

    loop {
        if unit_propagate(&mut formula).is_err() {
            return Telemetry::with_clause_counts(false, clause_counts);
        }

        if eliminate_pure_literals(&mut formula) {
            continue; // new units may have been exposed; restart the outer loop
        }

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
