//! Crate-level error type for the CLI/harness boundary.
//!
//! The solver library itself never returns an error: a verdict is always
//! `{sat: true}` or `{sat: false}`, per the spec's propagation policy.
//! Fallible operations live at the I/O and CLI boundary instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PutnamError {
    #[error("failed to read DIMACS input")]
    Dimacs(#[from] crate::dimacs::DimacsError),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("timeout must be a positive number of seconds")]
    InvalidTimeout,

    #[error("failed to serialize telemetry")]
    Serialize(#[from] serde_json::Error),
}
