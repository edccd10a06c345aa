//! forEach, map and filter with early exit
//!
//! Each operation scans an array-like [`Sequence`] forward or in reverse and
//! calls the visitor with `(context, element, index, sequence)`. The visitor
//! answers with a [`Flow`]:
//!
//! - `Flow::Continue(r)`: go on; `map` collects `r`, `filter` keeps the
//!   element when `r` is truthy, `for_each` ignores it
//! - `Flow::Break`: stop; the call yields the scope default
//! - `Flow::Return(x)`: stop; the call yields exactly `x`
//!
//! The `*_right` variants visit from the last index down to 0 and collect in
//! visiting order, so their results come out reversed relative to the input.
//!
//! The `try_*` variants accept visitors returning `Result`. The first error
//! ends the scan and is handed back unchanged.
//!
//! # Example
//! ```
//! use loop_break::prelude::*;
//!
//! let found: Exit<Vec<&str>, &str> = filter(&["a", "b", "c"], &mut (), |_, _, i, _| {
//!     if i == 1 { Flow::Return("found") } else { Flow::Continue(false) }
//! });
//! assert_eq!(found, Exit::Returned("found"));
//! ```

use std::convert::Infallible;

use crate::exit::Exit;
use crate::sequence::{Direction, Sequence};
use crate::signal::{Flow, Scope};
use crate::truthy::Truthy;

/// Outcome of `for_each`: the context on completion, the default result on
/// a bare break
pub type EachExit<C, V> = Exit<C, V, Option<V>>;

/// Outcome of `map` and `filter`: the accumulator on completion or a bare
/// break
pub type CollectExit<T, V> = Exit<Vec<T>, V>;

// ========== Scan driver ==========

/// Visit every index of `seq` in `direction` under a fresh scope
///
/// `absorb` folds each continue result into the scope default. The scope is
/// dropped on every exit path, including an error or a panic in the visitor.
fn scan<Q, C, S, R, V, E, F, G>(
    seq: &Q,
    direction: Direction,
    context: &mut C,
    mut scope: Scope<S>,
    mut visitor: F,
    mut absorb: G,
) -> Result<Exit<S, V>, E>
where
    Q: Sequence + ?Sized,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Result<Flow<R, V>, E>,
    G: FnMut(&mut S, &Q::Item, R),
{
    // Length is read once, before the first visit.
    let len = seq.len();
    for index in direction.indices(len) {
        let element = seq.at(index);
        match visitor(&mut *context, element, index, seq)? {
            Flow::Continue(result) => absorb(scope.default_mut(), element, result),
            Flow::Break => return Ok(Exit::Stopped(scope.end())),
            Flow::Return(value) => return Ok(Exit::Returned(value)),
        }
    }
    Ok(Exit::Completed(scope.end()))
}

fn each_in<Q, C, V, E, F>(
    seq: &Q,
    direction: Direction,
    mut context: C,
    default_result: Option<V>,
    visitor: F,
) -> Result<EachExit<C, V>, E>
where
    Q: Sequence + ?Sized,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Result<Flow<(), V>, E>,
{
    let scope = Scope::begin(default_result);
    let outcome = scan(seq, direction, &mut context, scope, visitor, |_, _, ()| {})?;
    Ok(match outcome {
        Exit::Completed(_) => Exit::Completed(context),
        Exit::Stopped(default) => Exit::Stopped(default),
        Exit::Returned(value) => Exit::Returned(value),
    })
}

fn map_in<Q, C, R, V, E, F>(
    seq: &Q,
    direction: Direction,
    context: &mut C,
    visitor: F,
) -> Result<CollectExit<R, V>, E>
where
    Q: Sequence + ?Sized,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Result<Flow<R, V>, E>,
{
    let scope = Scope::begin(Vec::<R>::with_capacity(seq.len()));
    scan(seq, direction, context, scope, visitor, |acc, _, result| {
        acc.push(result)
    })
}

fn filter_in<Q, C, R, V, E, F>(
    seq: &Q,
    direction: Direction,
    context: &mut C,
    visitor: F,
) -> Result<CollectExit<Q::Item, V>, E>
where
    Q: Sequence + ?Sized,
    Q::Item: Clone,
    R: Truthy,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Result<Flow<R, V>, E>,
{
    let scope = Scope::begin(Vec::<Q::Item>::new());
    scan(seq, direction, context, scope, visitor, |acc, element, verdict| {
        if verdict.is_truthy() {
            acc.push(element.clone());
        }
    })
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

// ========== forEach ==========

/// Visit indices `0..len` in ascending order
///
/// Returns `Exit::Completed(context)` when every element was visited,
/// `Exit::Stopped(default_result)` on a bare break and `Exit::Returned(x)`
/// when the visitor broke with `x`.
pub fn for_each<Q, C, V, F>(
    seq: &Q,
    context: C,
    default_result: Option<V>,
    mut visitor: F,
) -> EachExit<C, V>
where
    Q: Sequence + ?Sized,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Flow<(), V>,
{
    infallible(try_for_each(seq, context, default_result, |c, e, i, q| {
        Ok(visitor(c, e, i, q))
    }))
}

/// [`for_each`] visiting indices from `len - 1` down to 0
pub fn for_each_right<Q, C, V, F>(
    seq: &Q,
    context: C,
    default_result: Option<V>,
    mut visitor: F,
) -> EachExit<C, V>
where
    Q: Sequence + ?Sized,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Flow<(), V>,
{
    infallible(try_for_each_right(seq, context, default_result, |c, e, i, q| {
        Ok(visitor(c, e, i, q))
    }))
}

/// [`for_each`] with a fallible visitor
pub fn try_for_each<Q, C, V, E, F>(
    seq: &Q,
    context: C,
    default_result: Option<V>,
    visitor: F,
) -> Result<EachExit<C, V>, E>
where
    Q: Sequence + ?Sized,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Result<Flow<(), V>, E>,
{
    each_in(seq, Direction::Forward, context, default_result, visitor)
}

/// [`for_each_right`] with a fallible visitor
pub fn try_for_each_right<Q, C, V, E, F>(
    seq: &Q,
    context: C,
    default_result: Option<V>,
    visitor: F,
) -> Result<EachExit<C, V>, E>
where
    Q: Sequence + ?Sized,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Result<Flow<(), V>, E>,
{
    each_in(seq, Direction::Reverse, context, default_result, visitor)
}

// ========== map ==========

/// Collect the visitor's continue results in ascending index order
///
/// A bare break yields the results collected so far.
pub fn map<Q, C, R, V, F>(seq: &Q, context: &mut C, mut visitor: F) -> CollectExit<R, V>
where
    Q: Sequence + ?Sized,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Flow<R, V>,
{
    infallible(try_map(seq, context, |c, e, i, q| Ok(visitor(c, e, i, q))))
}

/// [`map`] visiting indices from `len - 1` down to 0
///
/// Results stay in visiting order: `[1, 2, 3]` mapped by `x * 10` gives
/// `[30, 20, 10]`.
pub fn map_right<Q, C, R, V, F>(seq: &Q, context: &mut C, mut visitor: F) -> CollectExit<R, V>
where
    Q: Sequence + ?Sized,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Flow<R, V>,
{
    infallible(try_map_right(seq, context, |c, e, i, q| {
        Ok(visitor(c, e, i, q))
    }))
}

/// [`map`] with a fallible visitor
pub fn try_map<Q, C, R, V, E, F>(
    seq: &Q,
    context: &mut C,
    visitor: F,
) -> Result<CollectExit<R, V>, E>
where
    Q: Sequence + ?Sized,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Result<Flow<R, V>, E>,
{
    map_in(seq, Direction::Forward, context, visitor)
}

/// [`map_right`] with a fallible visitor
pub fn try_map_right<Q, C, R, V, E, F>(
    seq: &Q,
    context: &mut C,
    visitor: F,
) -> Result<CollectExit<R, V>, E>
where
    Q: Sequence + ?Sized,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Result<Flow<R, V>, E>,
{
    map_in(seq, Direction::Reverse, context, visitor)
}

// ========== filter ==========

/// Keep the elements whose visitor verdict is truthy, in ascending order
///
/// The kept values are clones of the original elements, not the verdicts.
/// A bare break yields the elements kept so far.
pub fn filter<Q, C, R, V, F>(seq: &Q, context: &mut C, mut visitor: F) -> CollectExit<Q::Item, V>
where
    Q: Sequence + ?Sized,
    Q::Item: Clone,
    R: Truthy,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Flow<R, V>,
{
    infallible(try_filter(seq, context, |c, e, i, q| Ok(visitor(c, e, i, q))))
}

/// [`filter`] visiting indices from `len - 1` down to 0
///
/// Kept elements stay in visiting order, reversed relative to the input.
pub fn filter_right<Q, C, R, V, F>(
    seq: &Q,
    context: &mut C,
    mut visitor: F,
) -> CollectExit<Q::Item, V>
where
    Q: Sequence + ?Sized,
    Q::Item: Clone,
    R: Truthy,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Flow<R, V>,
{
    infallible(try_filter_right(seq, context, |c, e, i, q| {
        Ok(visitor(c, e, i, q))
    }))
}

/// [`filter`] with a fallible visitor
pub fn try_filter<Q, C, R, V, E, F>(
    seq: &Q,
    context: &mut C,
    visitor: F,
) -> Result<CollectExit<Q::Item, V>, E>
where
    Q: Sequence + ?Sized,
    Q::Item: Clone,
    R: Truthy,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Result<Flow<R, V>, E>,
{
    filter_in(seq, Direction::Forward, context, visitor)
}

/// [`filter_right`] with a fallible visitor
pub fn try_filter_right<Q, C, R, V, E, F>(
    seq: &Q,
    context: &mut C,
    visitor: F,
) -> Result<CollectExit<Q::Item, V>, E>
where
    Q: Sequence + ?Sized,
    Q::Item: Clone,
    R: Truthy,
    F: FnMut(&mut C, &Q::Item, usize, &Q) -> Result<Flow<R, V>, E>,
{
    filter_in(seq, Direction::Reverse, context, visitor)
}
