//! Core error type.
//!
//! Every parameter problem names the group it belongs to (`"east-west
//! times"`, `"south arrival distribution"`, …) so a bad parameter file can be
//! fixed from the message alone.

use thiserror::Error;

/// Errors raised while reading or validating simulation parameters.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A token was missing or was not an integer.
    #[error("unable to read {field}: {reason}")]
    Parse {
        field:  &'static str,
        reason: String,
    },

    /// A value was read but lies outside its legal range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        field:  &'static str,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `ix-core`.
pub type CoreResult<T> = Result<T, CoreError>;
