//! Method-call surface for the loops
//!
//! `LoopExt` binds the free functions of [`crate::loops`] to their receiver,
//! so a sequence can be looped over as `seq.loop_map(&mut ctx, visitor)`.

use crate::loops::{self, CollectExit, EachExit};
use crate::sequence::Sequence;
use crate::signal::Flow;
use crate::truthy::Truthy;

/// Early-exit loops as methods of any [`Sequence`]
pub trait LoopExt: Sequence {
    /// See [`loops::for_each`]
    fn loop_each<C, V, F>(
        &self,
        context: C,
        default_result: Option<V>,
        visitor: F,
    ) -> EachExit<C, V>
    where
        F: FnMut(&mut C, &Self::Item, usize, &Self) -> Flow<(), V>,
    {
        loops::for_each(self, context, default_result, visitor)
    }

    /// See [`loops::for_each_right`]
    fn loop_each_right<C, V, F>(
        &self,
        context: C,
        default_result: Option<V>,
        visitor: F,
    ) -> EachExit<C, V>
    where
        F: FnMut(&mut C, &Self::Item, usize, &Self) -> Flow<(), V>,
    {
        loops::for_each_right(self, context, default_result, visitor)
    }

    /// See [`loops::map`]
    fn loop_map<C, R, V, F>(&self, context: &mut C, visitor: F) -> CollectExit<R, V>
    where
        F: FnMut(&mut C, &Self::Item, usize, &Self) -> Flow<R, V>,
    {
        loops::map(self, context, visitor)
    }

    /// See [`loops::map_right`]
    fn loop_map_right<C, R, V, F>(&self, context: &mut C, visitor: F) -> CollectExit<R, V>
    where
        F: FnMut(&mut C, &Self::Item, usize, &Self) -> Flow<R, V>,
    {
        loops::map_right(self, context, visitor)
    }

    /// See [`loops::filter`]
    fn loop_filter<C, R, V, F>(&self, context: &mut C, visitor: F) -> CollectExit<Self::Item, V>
    where
        Self::Item: Clone,
        R: Truthy,
        F: FnMut(&mut C, &Self::Item, usize, &Self) -> Flow<R, V>,
    {
        loops::filter(self, context, visitor)
    }

    /// See [`loops::filter_right`]
    fn loop_filter_right<C, R, V, F>(
        &self,
        context: &mut C,
        visitor: F,
    ) -> CollectExit<Self::Item, V>
    where
        Self::Item: Clone,
        R: Truthy,
        F: FnMut(&mut C, &Self::Item, usize, &Self) -> Flow<R, V>,
    {
        loops::filter_right(self, context, visitor)
    }
}

impl<Q: Sequence + ?Sized> LoopExt for Q {}
