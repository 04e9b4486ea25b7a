//! Error taxonomy for the simulation.
//!
//! Every variant is unrecoverable for the current run: a corrupted
//! geometric state cannot be meaningfully continued, so errors abort
//! the run rather than being retried or ignored.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Mismatched parallel input lists or an out-of-range step budget.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Attempted to normalize a zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    DivisionByZero,

    /// A structural assumption of the model failed to hold.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// The requested behavior is not implemented in this version.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}
