//! Binary-resolution step shared by the Resolution and DP solvers.
//!
//! Both procedures eliminate a chosen bipolar variable by partitioning the
//! formula into clauses containing it positively, negatively, or not at all,
//! then forming every pairwise resolvent, dropping tautologies. The spec
//! frames DP as "Resolution augmented with unit/pure rules", so this is the
//! one piece of §4.2 logic the two procedures genuinely share.

use crate::types::{Clause, Formula, Lit, Var};

/// Eliminates `var` from `formula` by binary resolution, returning the new
/// formula: clauses mentioning neither polarity of `var`, plus every
/// non-tautological resolvent of a positive/negative pair.
pub(crate) fn resolve_on_variable(formula: &Formula, var: Var) -> Formula {
    let pos_lit = Lit::new(var as i32);
    let neg_lit = pos_lit.negate();

    let mut rest = Vec::new();
    let mut pos = Vec::new();
    let mut neg = Vec::new();

    for clause in formula.iter() {
        if clause.contains(pos_lit) {
            pos.push(clause);
        } else if clause.contains(neg_lit) {
            neg.push(clause);
        } else {
            rest.push(clause.clone());
        }
    }

    let mut resolved = rest;
    for c1 in &pos {
        for c2 in &neg {
            let mut lits = c1.without(pos_lit);
            lits.extend(c2.without(neg_lit));
            if let Some(resolvent) = Clause::new(lits) {
                resolved.push(resolvent);
            }
        }
    }

    Formula::new(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(v: i32) -> Lit {
        Lit::new(v)
    }

    #[test]
    fn resolves_and_drops_tautologies() {
        // (x1 v x2) ^ (-x1 v -x2): resolving on 1 gives (x2 v -x2), a tautology.
        let formula = Formula::new(vec![
            Clause::new(vec![lit(1), lit(2)]).unwrap(),
            Clause::new(vec![lit(-1), lit(-2)]).unwrap(),
        ]);
        let resolved = resolve_on_variable(&formula, 1);
        assert!(resolved.is_empty());
    }

    #[test]
    fn resolves_to_empty_clause_on_contradiction() {
        let formula = Formula::new(vec![
            Clause::new(vec![lit(1)]).unwrap(),
            Clause::new(vec![lit(-1)]).unwrap(),
        ]);
        let resolved = resolve_on_variable(&formula, 1);
        assert!(resolved.contains_empty_clause());
    }
}
