//! CNF instance generators.
//!
//! Generation is explicitly out of scope for the solver core (spec §1), but
//! the original tooling ships it alongside the solvers for benchmark and
//! boundary-test construction, so this crate carries a companion module in
//! the same plain-function style as the solvers: no side-effecting global
//! state, every generator returns a formula the caller owns outright.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Clause, Formula, Lit, Var};

/// Builds the pigeonhole instance `PHP(holes+1 -> holes)`: `holes+1` pigeons,
/// `holes` holes, unsatisfiable for every `holes >= 1`.
///
/// Variable numbering: pigeon `p` (1-based) in hole `h` (1-based) is
/// variable `(p-1)*holes + h`.
pub fn pigeonhole(holes: u32) -> (Formula, Var) {
    assert!(holes >= 1, "pigeonhole needs at least one hole");
    let pigeons = holes + 1;
    let num_vars = pigeons * holes;
    let var_of = |pigeon: u32, hole: u32| (pigeon - 1) * holes + hole;

    let mut clauses = Vec::new();

    for pigeon in 1..=pigeons {
        let lits: Vec<Lit> = (1..=holes).map(|hole| Lit::new(var_of(pigeon, hole) as i32)).collect();
        clauses.push(Clause::new(lits).expect("at-least-one-hole clause is never tautological"));
    }

    for hole in 1..=holes {
        for p1 in 1..=pigeons {
            for p2 in (p1 + 1)..=pigeons {
                let lits = vec![
                    Lit::new(-(var_of(p1, hole) as i32)),
                    Lit::new(-(var_of(p2, hole) as i32)),
                ];
                clauses.push(Clause::new(lits).expect("exclusion clause is never tautological"));
            }
        }
    }

    (Formula::new(clauses), num_vars)
}

/// Generates a random 3-SAT instance with a seeded RNG for reproducibility,
/// per the spec's determinism guarantee for anything feeding a solver call.
pub fn random_3sat(vars: Var, clause_count: u32, seed: u64) -> Formula {
    assert!(vars >= 1, "random_3sat needs at least one variable");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut clauses = Vec::with_capacity(clause_count as usize);

    while (clauses.len() as u32) < clause_count {
        let mut chosen: BTreeSet<i32> = BTreeSet::new();
        while chosen.len() < 3 {
            let var = rng.gen_range(1..=vars) as i32;
            let signed = if rng.gen_bool(0.5) { var } else { -var };
            chosen.insert(signed);
        }
        let lits: Vec<Lit> = chosen.into_iter().map(Lit::new).collect();
        if let Some(clause) = Clause::new(lits) {
            clauses.push(clause);
        }
    }

    Formula::new(clauses)
}

/// A chain of implications `(x1 v x2) ^ (!xi v x(i+2)) ^ (!x(i+1) v x(i+2))`
/// for `i` in `1..=n-2`, satisfiable for every `n`. Promoted from the
/// teacher's benchmark-local fixture into a shared generator since both the
/// benches and the harness binary use it.
pub fn chain(n: u32) -> (Formula, Var) {
    assert!(n >= 2, "chain needs at least two variables");
    let mut clauses = vec![Clause::new(vec![Lit::new(1), Lit::new(2)]).unwrap()];

    for i in 1..=(n.saturating_sub(2)) {
        clauses.push(Clause::new(vec![Lit::new(-(i as i32)), Lit::new((i + 2) as i32)]).unwrap());
        clauses
            .push(Clause::new(vec![Lit::new(-((i + 1) as i32)), Lit::new((i + 2) as i32)]).unwrap());
    }

    (Formula::new(clauses), n)
}
