//! Error types for the deadline workspace.
//!
//! Every fallible operation in the workspace reports a variant of the single
//! `thiserror`-derived [`Error`] enum.  Precondition checks use the
//! [`ensure!`](crate::ensure) convenience macro defined here.

use thiserror::Error;

/// The top-level error type used throughout the deadline workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The required working-day count is not in `1..=max`.
    ///
    /// Raised before any day is examined; the count is never clamped.
    #[error("invalid working-day count {count}: must be between 1 and {max}")]
    InvalidCount {
        /// The count that was supplied.
        count: i64,
        /// The largest accepted count.
        max: u32,
    },

    /// A required input was absent or could not be read.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Date-related error (invalid calendar date, arithmetic out of range).
    #[error("date error: {0}")]
    Date(String),

    /// Malformed textual input (e.g. a date not in `YYYY-MM-DD` form).
    #[error("parse error: {0}")]
    Parse(String),

    /// A file could not be read.
    #[error("cannot read {path}: {reason}")]
    Io {
        /// The file that was requested.
        path: String,
        /// The underlying I/O failure.
        reason: String,
    },
}

/// Shorthand `Result` type used throughout the deadline workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function unless `$cond` holds.
///
/// # Example
/// ```
/// use dl_core::{ensure, errors::Error};
/// fn positive(x: i64) -> dl_core::errors::Result<i64> {
///     ensure!(x > 0, Error::InvalidCount { count: x, max: 10 });
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}
