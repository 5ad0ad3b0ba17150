//! Cursor traversal
//!
//! A cursor stores a single reference into the chain and advances it on
//! each step. The chain is never written, so cursors over the same
//! sequence are fully independent.

use std::iter::FusedIterator;

use super::LinkedSequence;

/// Result of advancing a cursor
///
/// `Yielded` for each element in order, then `Finished` on every call
/// after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// Next element of the sequence
    Yielded(T),

    /// Sequence exhausted
    Finished,
}

impl<T> Step<T> {
    /// Check for the terminal marker
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, Step::Finished)
    }

    /// Element carried by this step, if any
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Step::Yielded(value) => Some(value),
            Step::Finished => None,
        }
    }

    /// Transform the carried element
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Step<U> {
        match self {
            Step::Yielded(value) => Step::Yielded(f(value)),
            Step::Finished => Step::Finished,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Step::Yielded(value),
            None => Step::Finished,
        }
    }
}

/// Borrowing cursor over a [`LinkedSequence`]
#[derive(Debug)]
pub struct Cursor<'a, T> {
    /// Unvisited remainder of the chain
    remaining: &'a LinkedSequence<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(seq: &'a LinkedSequence<T>) -> Self {
        Self { remaining: seq }
    }

    /// Advance by one element
    ///
    /// Past the end this keeps returning [`Step::Finished`].
    pub fn step(&mut self) -> Step<&'a T> {
        let remaining: &'a LinkedSequence<T> = self.remaining;
        match remaining {
            LinkedSequence::Empty => Step::Finished,
            LinkedSequence::Node(node) => {
                self.remaining = node.rest();
                Step::Yielded(node.value())
            }
        }
    }

    /// Suffix not yet visited
    pub fn remaining(&self) -> &'a LinkedSequence<T> {
        self.remaining
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().value()
    }
}

impl<T> FusedIterator for Cursor<'_, T> {}

/// Owning iterator over a [`LinkedSequence`]
///
/// Holds a handle to the unvisited suffix and clones each element out.
/// Nodes still shared with other handles stay intact.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    remaining: LinkedSequence<T>,
}

impl<T: Clone> IntoIter<T> {
    pub(super) fn new(seq: LinkedSequence<T>) -> Self {
        Self { remaining: seq }
    }

    /// Advance by one element
    pub fn step(&mut self) -> Step<T> {
        let (value, rest) = match &self.remaining {
            LinkedSequence::Empty => return Step::Finished,
            LinkedSequence::Node(node) => (node.value().clone(), node.rest().clone()),
        };
        self.remaining = rest;
        Step::Yielded(value)
    }
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.step().value()
    }
}

impl<T: Clone> FusedIterator for IntoIter<T> {}
