//! Error types for toolrental.
//!
//! The whole workspace shares a single `thiserror`-derived enum. Checkout
//! validation raises `InvalidArgument` through the [`ensure!`](crate::ensure)
//! macro; everything downstream of a validated checkout is total and never
//! fails.

use thiserror::Error;

/// The top-level error type used throughout toolrental.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied argument was rejected by validation.
    ///
    /// The carried string is the exact display text surfaced to the caller.
    #[error("{0}")]
    InvalidArgument(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout toolrental.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tr_core::ensure;
///
/// fn duration(days: i32) -> tr_core::Result<i32> {
///     ensure!(days >= 1, "duration must be at least one day");
///     Ok(days)
/// }
/// assert!(duration(3).is_ok());
/// assert!(duration(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
