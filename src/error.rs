//! Crate-wide error taxonomy.
//!
//! Every fallible operation in this crate returns [`Result<T>`], which is
//! shorthand for `std::result::Result<T, PhysicsError>`. The variants
//! mirror the error kinds the original toolkit raises as exceptions: each
//! one is chosen deliberately rather than collapsed into a generic "it
//! failed", so callers can decide whether to retry, fall back to another
//! data source, or propagate.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The single error type returned by fallible operations in this crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
    /// An operation was attempted on an undefined sentinel value
    /// (`Instant::undefined()`, `Duration::undefined()`, `Quantity::undefined()`).
    /// The payload names the type (`"Instant"`, `"Duration"`, `"Quantity"`).
    #[error("operation on an undefined {0}")]
    Undefined(&'static str),

    /// An input value was outside its valid range or otherwise malformed
    /// (month 13, hour 24, zero denominator, degree above a model's max).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An instant fell outside a data source's coverage (leap-second
    /// table, Bulletin A / Finals 2000A observation ∪ prediction span).
    #[error("value out of range: {0}")]
    RangeError(String),

    /// No data source could serve the request (no EOP file loaded in
    /// manual mode, no model attached to a `Celestial`).
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// A repository lock could not be acquired before the configured
    /// timeout elapsed.
    #[error("timed out acquiring lock after {0:?}")]
    Timeout(std::time::Duration),

    /// An operation was attempted in an invalid state (unlocking a lock
    /// that isn't held, loading a file twice, registering a duplicate
    /// frame name, exceeding the maximum frame depth).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The requested conversion path is not wired up.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// A filesystem or network operation failed.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PhysicsError>;

impl From<std::io::Error> for PhysicsError {
    fn from(err: std::io::Error) -> Self {
        PhysicsError::IoError(err.to_string())
    }
}

impl PhysicsError {
    /// Build an [`PhysicsError::EpochOutOfRange`]-style range error carrying
    /// the offending instant for diagnostics, without requiring every
    /// call site to format its own message.
    pub fn epoch_out_of_range(epoch: DateTime<Utc>, context: &str) -> Self {
        PhysicsError::RangeError(format!("{epoch} is outside the valid range for {context}"))
    }
}
