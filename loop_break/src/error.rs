//! Error types for loop outcomes
//!
//! Visitor failures are never wrapped in these errors; they reach the caller
//! of a `try_*` loop unchanged. `LoopError` only describes outcomes a caller
//! asked to be something else (a completed loop, an array value).

use thiserror::Error;

/// Loop outcome error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoopError {
    /// The visitor returned a bare break, so the loop did not complete
    #[error("StoppedError: loop was stopped before visiting every element")]
    Stopped,

    /// The visitor returned an explicit value, so the loop did not complete
    #[error("ReturnedError: loop returned an explicit value before completion")]
    Returned,

    /// A dynamic value had the wrong type
    #[error("TypeError: expected {expected}, got {found}")]
    TypeError {
        /// Expected type name
        expected: String,
        /// Actual type name
        found: String,
    },
}

impl LoopError {
    /// Create a type error
    pub fn type_error<S1: Into<String>, S2: Into<String>>(expected: S1, found: S2) -> Self {
        LoopError::TypeError {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Whether the error describes an early exit rather than a type mismatch
    pub fn is_early_exit(&self) -> bool {
        matches!(self, LoopError::Stopped | LoopError::Returned)
    }
}

/// Result type alias for loop outcome conversions
pub type LoopResult<T> = Result<T, LoopError>;
