//! Simplification primitives shared by every solver: unit propagation and
//! pure-literal elimination. Ported and generalized from the teacher's
//! queue-based `unit_propagate`, reworked to operate directly on `Formula`
//! clause rewriting instead of a separate assignment `Model`, since
//! Resolution and DP have no model to carry and DPLL here returns no model
//! either (model extraction is a non-goal).

use std::collections::VecDeque;

use crate::types::{Clause, Formula, Lit};

/// Unit propagation failed: the literal that was about to be forced
/// conflicted with a clause that collapsed to empty.
pub type Conflict = ();

/// Repeatedly resolves unit clauses to fixpoint, deleting satisfied clauses
/// and stripping falsified literals from the rest.
///
/// # Arguments
///
/// * `formula` - The formula to propagate on, rewritten in place: satisfied
///   clauses are dropped, falsified literals are stripped from the rest.
///
/// # Returns
///
/// * `Ok(())` - Propagation reached a fixpoint (no more unit clauses)
///   without producing the empty clause.
/// * `Err(())` - Some unit clause's forced literal falsified another clause
///   down to empty.
///
/// # Examples
///
/// ```
/// use putnam::solver::simplify::unit_propagate;
/// use putnam::types::{Clause, Formula, Lit};
///
/// // (x1) ^ (-x1 v x2): x1 is forced true, which then forces x2 true too.
/// let mut formula = Formula::new(vec![
///     Clause::new(vec![Lit::new(1)]).unwrap(),
///     Clause::new(vec![Lit::new(-1), Lit::new(2)]).unwrap(),
/// ]);
///
/// assert!(unit_propagate(&mut formula).is_ok());
/// assert!(formula.is_empty()); // every clause was satisfied
/// ```
///
/// # Algorithm
///
/// Queue-based, matching the teacher's `unit_propagate`: every initial unit
/// clause seeds the queue; resolving one clears clauses it satisfies and
/// strips its negation from the rest, re-queuing any clause that collapses
/// to a new unit. Detects the empty clause the instant it appears and
/// reports conflict without further work.
pub fn unit_propagate(formula: &mut Formula) -> Result<(), Conflict> {
    let mut queue: VecDeque<Lit> = formula
        .iter()
        .filter(|c| c.is_unit())
        .map(|c| c.literals()[0])
        .collect();

    while let Some(lit) = queue.pop_front() {
        let neg = lit.negate();
        let mut new_clauses = Vec::with_capacity(formula.len());

        for clause in formula.iter() {
            if clause.contains(lit) {
                continue; // satisfied, drop
            }
            if clause.contains(neg) {
                let stripped = clause.without(neg);
                if stripped.is_empty() {
                    return Err(());
                }
                if stripped.len() == 1 {
                    queue.push_back(stripped[0]);
                }
                new_clauses.push(Clause::from_sorted_unchecked(stripped));
            } else {
                new_clauses.push(clause.clone());
            }
        }

        *formula = Formula::new(new_clauses);
    }

    Ok(())
}

/// One sweep of pure-literal elimination.
///
/// # Arguments
///
/// * `formula` - The formula to purge in place.
///
/// # Returns
///
/// `true` if any clause was removed.
///
/// # Examples
///
/// ```
/// use putnam::solver::simplify::eliminate_pure_literals_once;
/// use putnam::types::{Clause, Formula, Lit};
///
/// // x1 is pure (only ever positive): both clauses it appears in drop out.
/// let mut formula = Formula::new(vec![
///     Clause::new(vec![Lit::new(1), Lit::new(2)]).unwrap(),
///     Clause::new(vec![Lit::new(1), Lit::new(-2)]).unwrap(),
/// ]);
///
/// assert!(eliminate_pure_literals_once(&mut formula));
/// assert!(formula.is_empty());
/// ```
///
/// # Algorithm
///
/// Collects every literal appearing anywhere in the formula, then deletes
/// every clause containing a literal whose negation appears nowhere in the
/// formula — such a literal can always be assigned true without falsifying
/// anything, so the clauses it already satisfies can be dropped outright.
pub fn eliminate_pure_literals_once(formula: &mut Formula) -> bool {
    let lits = formula.literals();
    let pure: Vec<Lit> = lits.iter().copied().filter(|&l| !lits.contains(&l.negate())).collect();
    if pure.is_empty() {
        return false;
    }
    formula.retain(|c| !pure.iter().any(|&p| c.contains(p)));
    true
}

/// Pure-literal elimination run to fixpoint (removing clauses can expose new
/// purity). Used by Resolution and DP, which need the formula fully purged
/// before checking for bipolar variables. DPLL uses the single-pass version
/// instead: its own recursion already reconsiders purity on the next call.
pub fn eliminate_pure_literals(formula: &mut Formula) -> bool {
    let mut changed_any = false;
    while eliminate_pure_literals_once(formula) {
        changed_any = true;
    }
    changed_any
}
