//! Break signal for early loop exit
//!
//! A visitor tells the loop what to do next by returning a [`Flow`]:
//! keep going with a per-element result, stop with the loop's default
//! result, or stop with an explicit value.
//!
//! Every loop invocation owns a [`Scope`] holding its default result.
//! The scope lives on the loop's own stack frame, so a visitor that starts
//! an inner loop gets a separate scope and cannot disturb the outer one.

use std::ops::ControlFlow;

/// Visitor verdict for a single element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flow<R, V> {
    /// Keep visiting; `R` is this element's result
    Continue(R),
    /// Stop; the loop yields its scope default
    Break,
    /// Stop; the loop yields exactly this value
    Return(V),
}

impl<R, V> Flow<R, V> {
    /// Bare break signal
    pub const BREAK: Self = Flow::Break;

    /// Alias of [`Flow::BREAK`]
    pub const RETURN: Self = Flow::Break;

    /// Break with an explicit value
    pub fn returning(value: V) -> Self {
        Flow::Return(value)
    }

    /// Break with the "unset" value of `V`
    ///
    /// This is the signal invoked without an argument: the loop result is
    /// the empty value, not the scope default.
    pub fn returning_default() -> Self
    where
        V: Default,
    {
        Flow::Return(V::default())
    }

    /// Whether this verdict ends the loop
    pub fn is_stop(&self) -> bool {
        !matches!(self, Flow::Continue(_))
    }

    /// Map the continue payload
    pub fn map_continue<U, F: FnOnce(R) -> U>(self, f: F) -> Flow<U, V> {
        match self {
            Flow::Continue(r) => Flow::Continue(f(r)),
            Flow::Break => Flow::Break,
            Flow::Return(v) => Flow::Return(v),
        }
    }

    /// Map the explicit return value
    pub fn map_return<U, F: FnOnce(V) -> U>(self, f: F) -> Flow<R, U> {
        match self {
            Flow::Continue(r) => Flow::Continue(r),
            Flow::Break => Flow::Break,
            Flow::Return(v) => Flow::Return(f(v)),
        }
    }
}

impl<R, V> From<ControlFlow<V, R>> for Flow<R, V> {
    fn from(flow: ControlFlow<V, R>) -> Self {
        match flow {
            ControlFlow::Continue(r) => Flow::Continue(r),
            ControlFlow::Break(v) => Flow::Return(v),
        }
    }
}

/// Default result of one loop invocation
///
/// `begin` installs the default, `end` hands it back. Map and filter use
/// their accumulator as the default, so a bare break yields whatever was
/// collected up to that point.
#[derive(Debug)]
pub struct Scope<S> {
    default: S,
}

impl<S> Scope<S> {
    /// Install `default` as the result of a bare break
    pub fn begin(default: S) -> Self {
        Scope { default }
    }

    /// Current default
    pub fn default(&self) -> &S {
        &self.default
    }

    /// Mutable access to the default (the accumulator for map/filter)
    pub fn default_mut(&mut self) -> &mut S {
        &mut self.default
    }

    /// Close the scope and take the default back
    pub fn end(self) -> S {
        self.default
    }
}
