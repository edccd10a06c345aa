//! Array-like sequences
//!
//! Loops only need a length and indexed access, so anything ordered and
//! indexable can be visited: slices, arrays, vectors, deques and dynamic
//! array values.

use std::collections::VecDeque;

/// Ordered, finite, indexable collection
pub trait Sequence {
    /// Element type
    type Item;

    /// Number of elements
    fn len(&self) -> usize;

    /// Element at `index`
    ///
    /// Loops only call this with `index < self.len()`. Implementations may
    /// panic for indices outside that range, as slice indexing does.
    fn at(&self, index: usize) -> &Self::Item;

    /// Check if the sequence has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<Q: Sequence + ?Sized> Sequence for &Q {
    type Item = Q::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn at(&self, index: usize) -> &Q::Item {
        (**self).at(index)
    }
}

/// Visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Ascending indices, `0..len`
    Forward,
    /// Descending indices, `len - 1` down to `0`
    Reverse,
}

impl Direction {
    /// Index visited at position `step` of a scan over `len` elements
    ///
    /// Returns `None` when `step` is past the end of the scan.
    pub fn index(self, step: usize, len: usize) -> Option<usize> {
        if step >= len {
            return None;
        }
        Some(match self {
            Direction::Forward => step,
            Direction::Reverse => len - 1 - step,
        })
    }

    /// All indices of a scan over `len` elements, in visiting order
    pub fn indices(self, len: usize) -> impl Iterator<Item = usize> {
        (0..len).filter_map(move |step| self.index(step, len))
    }
}
