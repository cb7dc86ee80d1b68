//! # Putnam
//!
//! A comparative implementation of three classical propositional
//! satisfiability procedures: Resolution refutation, Davis-Putnam (DP)
//! variable elimination, and DPLL backtracking search, each with several
//! branching/elimination heuristics.
//!
//! ## Architecture Overview
//!
//! - **Data Types** ([`types`]): CNF representation — variables, literals,
//!   clauses, formulas.
//! - **DIMACS** ([`dimacs`]): parsing and emission, the external I/O
//!   boundary.
//! - **Solver** ([`solver`]): the three decision procedures, their shared
//!   simplification primitives, and their heuristics.
//! - **Telemetry** ([`telemetry`]): the per-call result record every solver
//!   returns.
//! - **Timeout** ([`timeout`]): external wall-clock supervision for the
//!   harness binary.
//! - **Generate** ([`generate`]): pigeonhole, random 3-SAT, and chain
//!   instance generators for benchmarking.
//! - **CLI** (`bin/putnam`): file-based solving, generation, and
//!   benchmarking.
//!
//! ## Quick Start
//!
//! ```rust
//! use putnam::{dpll, types::{Clause, Formula, Lit}, solver::heuristic::BranchHeuristic};
//!
//! // (x1) ^ (-x2)
//! let formula = Formula::new(vec![
//!     Clause::new(vec![Lit::new(1)]).unwrap(),
//!     Clause::new(vec![Lit::new(-2)]).unwrap(),
//! ]);
//!
//! let telemetry = dpll(formula, BranchHeuristic::Fixed);
//! assert!(telemetry.sat);
//! ```

pub mod dimacs;
pub mod error;
pub mod generate;
pub mod solver;
pub mod telemetry;
pub mod timeout;
pub mod types;

pub use error::PutnamError;
pub use solver::dp::dp;
pub use solver::dpll::dpll;
pub use solver::heuristic::{BranchHeuristic, EliminationStrategy};
pub use solver::resolution::resolution;
pub use telemetry::Telemetry;
pub use types::{Clause, Formula, Lit, Var};
