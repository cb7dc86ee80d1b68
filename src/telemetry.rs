//! Per-call telemetry returned by every solver entry point.
//!
//! A tagged struct replacing the free-form dict result the original tooling
//! produced, per the spec's re-architecture advice, while still serializing
//! to the same stable field names (`sat`, `clause_counts`, `decisions`).
//! Fields absent for a given procedure are skipped, not emitted as `null`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub sat: bool,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub clause_counts: Option<Vec<usize>>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub decisions: Option<u64>,
}

impl Telemetry {
    /// A verdict with no applicable metrics (used by the timeout adapter).
    pub fn sat_only(sat: bool) -> Self {
        Telemetry { sat, clause_counts: None, decisions: None }
    }

    /// Resolution/DP telemetry: a verdict plus the elimination-step trace.
    pub fn with_clause_counts(sat: bool, clause_counts: Vec<usize>) -> Self {
        Telemetry { sat, clause_counts: Some(clause_counts), decisions: None }
    }

    /// DPLL telemetry: a verdict plus the branching-decision count.
    pub fn with_decisions(sat: bool, decisions: u64) -> Self {
        Telemetry { sat, clause_counts: None, decisions: Some(decisions) }
    }
}
