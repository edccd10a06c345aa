//! Early-exit loops over array-like sequences
//!
//! This crate provides `forEach`, `map` and `filter` loops, each with a
//! right-to-left variant, whose visitor can stop the scan early. It includes:
//!
//! - `Flow` and `Scope` for the break signal
//! - `Exit` for loop outcomes
//! - `Sequence` for array-like receivers
//! - The loop operations, as free functions and as `LoopExt` methods
//! - `Truthy` for filter verdicts
//! - `Value` for dynamically typed data
//! - `LoopError` for outcome conversions

pub mod error;
pub mod exit;
pub mod ext;
pub mod loops;
pub mod sequence;
pub mod signal;
pub mod truthy;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use loop_break::prelude::*;
///
/// let out: Exit<Vec<i32>, ()> = map_right(&[1, 2, 3], &mut (), |_, x, _, _| Flow::Continue(x * 10));
/// assert_eq!(out, Exit::Completed(vec![30, 20, 10]));
/// ```
pub mod prelude {
    pub use super::error::{LoopError, LoopResult};
    pub use super::exit::Exit;
    pub use super::ext::LoopExt;
    pub use super::loops::*;
    pub use super::sequence::{Direction, Sequence};
    pub use super::signal::{Flow, Scope};
    pub use super::truthy::Truthy;
    pub use super::value::Value;
}

pub use prelude::*;
