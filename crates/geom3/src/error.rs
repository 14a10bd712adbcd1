//! Error type shared by all fallible geometry operations.
//!
//! Failures are immediate and synchronous; nothing is retried internally.
//! Values with NaN/∞ components are not errors (see `is_undefined`).

use std::fmt;

/// Errors surfaced by constructors, normalization, division and accessors.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// Malformed input: wrong sequence length, non-positive tolerance or raster
    /// size, negative target length.
    InvalidArgument {
        name: &'static str,
        reason: String,
    },
    /// Mathematically undefined request on a well-formed value.
    InvalidOperation(&'static str),
    /// Explicit scalar division by exactly zero.
    DivideByZero,
    /// Row/column index outside `1..=3`.
    IndexOutOfRange { index: usize },
}

impl GeometryError {
    /// Length mismatch for a sequence argument.
    pub(crate) fn bad_length(name: &'static str, expected: usize, actual: usize) -> Self {
        GeometryError::InvalidArgument {
            name,
            reason: format!("expected a sequence of length {expected}, but actual length is {actual}"),
        }
    }

    pub(crate) fn not_positive(name: &'static str, value: f64) -> Self {
        GeometryError::InvalidArgument {
            name,
            reason: format!("must be > 0, got {value}"),
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidArgument { name, reason } => {
                write!(f, "invalid argument `{name}`: {reason}")
            }
            GeometryError::InvalidOperation(what) => write!(f, "invalid operation: {what}"),
            GeometryError::DivideByZero => write!(f, "attempt to divide by zero"),
            GeometryError::IndexOutOfRange { index } => {
                write!(f, "index must be in [1,2,3], but got {index}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
