//! External timeout supervision.
//!
//! The solver core exposes no cancellation hook (per the spec's concurrency
//! model): a solve call either returns a verdict or runs forever. This module
//! is the harness-side supervisor that imposes a wall-clock budget from the
//! outside, matching the spec's re-architecture note that a portable port
//! should run each solve in a terminable supervisor task rather than relying
//! on OS signals.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::telemetry::Telemetry;

/// Runs `solve` on a background thread under a wall-clock `budget`.
///
/// On completion within budget, returns the solver's own telemetry and the
/// actual elapsed time. On timeout, per the spec's documented harness
/// convention, returns `sat: false` with no metrics and a runtime equal to
/// the budget; the background thread is left to run to completion and is
/// never joined, since the solver offers no cancellation handle.
pub fn run_with_timeout<F>(budget: Duration, solve: F) -> (Telemetry, Duration, bool)
where
    F: FnOnce() -> Telemetry + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let start = Instant::now();

    std::thread::spawn(move || {
        let result = solve();
        let _ = tx.send(result);
    });

    match rx.recv_timeout(budget) {
        Ok(telemetry) => (telemetry, start.elapsed(), false),
        Err(_) => (Telemetry::sat_only(false), budget, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_solver_result_within_budget() {
        let (telemetry, _elapsed, timed_out) =
            run_with_timeout(Duration::from_secs(5), || Telemetry::sat_only(true));
        assert!(!timed_out);
        assert!(telemetry.sat);
    }

    #[test]
    fn reports_timeout_as_unsat_with_no_metrics() {
        let (telemetry, elapsed, timed_out) = run_with_timeout(Duration::from_millis(20), || {
            std::thread::sleep(Duration::from_secs(5));
            Telemetry::sat_only(true)
        });
        assert!(timed_out);
        assert!(!telemetry.sat);
        assert!(telemetry.clause_counts.is_none());
        assert!(telemetry.decisions.is_none());
        assert_eq!(elapsed, Duration::from_millis(20));
    }
}
