//! Branching/elimination heuristics shared by Resolution, DP, and DPLL.
//!
//! The original tooling selected a heuristic by a free-form string argument
//! and broke ties via whatever order a hash map happened to iterate in. Per
//! the spec's re-architecture advice this crate closes the enumeration and
//! makes every tie-break an explicit smallest-variable-index comparison
//! (positive before negative, for literal-level ties), so results are
//! reproducible across runs and across platforms.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::str::FromStr;

use crate::types::{Formula, Lit, Var};

/// Variable-elimination strategy for Resolution and DP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationStrategy {
    /// First bipolar variable by order of discovery (the `null`/omitted
    /// strategy in the spec's external interface).
    Null,
    MostFreq,
    LeastFreq,
}

impl FromStr for EliminationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" | "" => Ok(EliminationStrategy::Null),
            "mostfreq" => Ok(EliminationStrategy::MostFreq),
            "leastfreq" => Ok(EliminationStrategy::LeastFreq),
            other => Err(format!("unknown elimination strategy '{other}'")),
        }
    }
}

/// Branching heuristic for DPLL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchHeuristic {
    Fixed,
    MostFreq,
    Jeroslow,
}

impl FromStr for BranchHeuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(BranchHeuristic::Fixed),
            "mostfreq" => Ok(BranchHeuristic::MostFreq),
            "jeroslow" => Ok(BranchHeuristic::Jeroslow),
            other => Err(format!("unknown branch heuristic '{other}'")),
        }
    }
}

/// Keeps the first element seen (by iteration order) whose score is a
/// strict improvement, so feeding candidates in ascending tie-break order
/// and never replacing on a tie gives deterministic smallest-index behavior.
fn pick_extreme<T: Copy, I: Iterator<Item = (T, f64)>>(iter: I, want_max: bool) -> Option<T> {
    let mut best: Option<(T, f64)> = None;
    for (candidate, score) in iter {
        best = match best {
            None => Some((candidate, score)),
            Some((_, b)) if (want_max && score > b) || (!want_max && score < b) => Some((candidate, score)),
            Some(existing) => Some(existing),
        };
    }
    best.map(|(candidate, _)| candidate)
}

fn bipolar_variables(formula: &Formula) -> BTreeSet<Var> {
    let mut pos = BTreeSet::new();
    let mut neg = BTreeSet::new();
    for clause in formula.iter() {
        for &lit in clause.literals() {
            if lit.is_positive() {
                pos.insert(lit.var());
            } else {
                neg.insert(lit.var());
            }
        }
    }
    pos.intersection(&neg).copied().collect()
}

/// Counts, for each candidate variable, the number of clauses it appears in
/// (once per clause regardless of polarity, per the spec's per-variable
/// tally for Resolution/DP).
fn variable_frequency(formula: &Formula, candidates: &BTreeSet<Var>) -> BTreeMap<Var, usize> {
    let mut freq: BTreeMap<Var, usize> = candidates.iter().map(|&v| (v, 0)).collect();
    for clause in formula.iter() {
        let vars_in_clause: BTreeSet<Var> = clause.literals().iter().map(|l| l.var()).collect();
        for v in vars_in_clause {
            if let Some(count) = freq.get_mut(&v) {
                *count += 1;
            }
        }
    }
    freq
}

/// Selects the variable Resolution/DP should eliminate next, per `strategy`.
/// Returns `None` if no bipolar variable remains (the formula is satisfiable
/// as-is: every variable has a single polarity).
pub fn select_bipolar_variable(formula: &Formula, strategy: EliminationStrategy) -> Option<Var> {
    let bipolar = bipolar_variables(formula);
    if bipolar.is_empty() {
        return None;
    }

    match strategy {
        EliminationStrategy::Null => {
            let mut seen = BTreeSet::new();
            for clause in formula.iter() {
                for &lit in clause.literals() {
                    let v = lit.var();
                    if bipolar.contains(&v) && seen.insert(v) {
                        return Some(v);
                    }
                }
            }
            None
        }
        EliminationStrategy::MostFreq => {
            let freq = variable_frequency(formula, &bipolar);
            pick_extreme(freq.into_iter().map(|(v, c)| (v, c as f64)), true)
        }
        EliminationStrategy::LeastFreq => {
            let freq = variable_frequency(formula, &bipolar);
            pick_extreme(freq.into_iter().map(|(v, c)| (v, c as f64)), false)
        }
    }
}

/// Literal candidates sorted by (variable ascending, positive before
/// negative) — the exact tie-break order the spec mandates for DPLL's
/// literal-level heuristics.
fn literal_candidates(formula: &Formula) -> Vec<Lit> {
    let mut ordered: BTreeSet<(Var, u8, Lit)> = BTreeSet::new();
    for clause in formula.iter() {
        for &lit in clause.literals() {
            let polarity_rank = if lit.is_positive() { 0 } else { 1 };
            ordered.insert((lit.var(), polarity_rank, lit));
        }
    }
    ordered.into_iter().map(|(_, _, lit)| lit).collect()
}

/// `fixed`: the smallest-indexed variable appearing in the formula,
/// branching positive first.
pub fn fixed_literal(formula: &Formula) -> Option<Lit> {
    let min_var = formula.iter().flat_map(|c| c.literals().iter().map(|l| l.var())).min()?;
    Some(Lit::new(min_var as i32))
}

/// `mostfreq`: the literal with the highest per-literal occurrence count.
pub fn most_frequent_literal(formula: &Formula) -> Option<Lit> {
    let candidates = literal_candidates(formula);
    let mut freq: HashMap<Lit, usize> = HashMap::new();
    for clause in formula.iter() {
        for &lit in clause.literals() {
            *freq.entry(lit).or_insert(0) += 1;
        }
    }
    pick_extreme(candidates.into_iter().map(|l| (l, *freq.get(&l).unwrap_or(&0) as f64)), true)
}

/// `jeroslow`: the literal maximizing `sum over containing clauses of 2^-|C|`.
pub fn jeroslow_wang_literal(formula: &Formula) -> Option<Lit> {
    let candidates = literal_candidates(formula);
    let mut score: HashMap<Lit, f64> = HashMap::new();
    for clause in formula.iter() {
        let weight = 2f64.powi(-(clause.len() as i32));
        for &lit in clause.literals() {
            *score.entry(lit).or_insert(0.0) += weight;
        }
    }
    pick_extreme(candidates.into_iter().map(|l| (l, *score.get(&l).unwrap_or(&0.0))), true)
}

/// Selects the branching literal DPLL should try first, per `heuristic`.
pub fn select_branch_literal(formula: &Formula, heuristic: BranchHeuristic) -> Option<Lit> {
    match heuristic {
        BranchHeuristic::Fixed => fixed_literal(formula),
        BranchHeuristic::MostFreq => most_frequent_literal(formula),
        BranchHeuristic::Jeroslow => jeroslow_wang_literal(formula),
    }
}
