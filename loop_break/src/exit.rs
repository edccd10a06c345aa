//! Loop outcomes
//!
//! Every loop returns an [`Exit`] recording how the scan ended.

use crate::error::{LoopError, LoopResult};

/// How a loop invocation ended
///
/// - `A`: result of a normal completion
/// - `V`: value carried by an explicit break (`Flow::Return`)
/// - `S`: scope default yielded by a bare break (`Flow::Break`)
///
/// For `map` and `filter` the default is the accumulator, so `S` is `A`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Exit<A, V, S = A> {
    /// Every element was visited
    Completed(A),
    /// The visitor returned a bare break
    Stopped(S),
    /// The visitor returned an explicit value
    Returned(V),
}

impl<A, V, S> Exit<A, V, S> {
    /// Check if the loop visited every element
    pub fn is_completed(&self) -> bool {
        matches!(self, Exit::Completed(_))
    }

    /// Check if the loop ended on a bare break
    pub fn is_stopped(&self) -> bool {
        matches!(self, Exit::Stopped(_))
    }

    /// Check if the loop ended on an explicit value
    pub fn is_returned(&self) -> bool {
        matches!(self, Exit::Returned(_))
    }

    /// Completion result, if any
    pub fn completed(self) -> Option<A> {
        match self {
            Exit::Completed(a) => Some(a),
            _ => None,
        }
    }

    /// Scope default yielded by a bare break, if any
    pub fn stopped(self) -> Option<S> {
        match self {
            Exit::Stopped(s) => Some(s),
            _ => None,
        }
    }

    /// Explicit break value, if any
    pub fn returned(self) -> Option<V> {
        match self {
            Exit::Returned(v) => Some(v),
            _ => None,
        }
    }

    /// Completion result, or an error naming how the loop ended instead
    pub fn into_completed(self) -> LoopResult<A> {
        match self {
            Exit::Completed(a) => Ok(a),
            Exit::Stopped(_) => Err(LoopError::Stopped),
            Exit::Returned(_) => Err(LoopError::Returned),
        }
    }

    /// Map the completion result
    pub fn map_completed<B, F: FnOnce(A) -> B>(self, f: F) -> Exit<B, V, S> {
        match self {
            Exit::Completed(a) => Exit::Completed(f(a)),
            Exit::Stopped(s) => Exit::Stopped(s),
            Exit::Returned(v) => Exit::Returned(v),
        }
    }
}

impl<A> Exit<A, A, A> {
    /// The call's result regardless of how the loop ended
    pub fn into_value(self) -> A {
        match self {
            Exit::Completed(a) | Exit::Stopped(a) | Exit::Returned(a) => a,
        }
    }
}
