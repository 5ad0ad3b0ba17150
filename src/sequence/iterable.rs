//! Generic iteration capability
//!
//! Consumers written against [`Iterable`] work on any collection that
//! can hand out a fresh cursor, without knowing how it stores elements.

use super::{Cursor, LinkedSequence};

/// A collection that can produce independent cursors over its elements
pub trait Iterable {
    /// Element type
    type Item;

    /// Cursor type borrowed from the collection
    type Cursor<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a,
        Self::Item: 'a;

    /// Fresh cursor positioned before the first element
    fn iterate(&self) -> Self::Cursor<'_>;
}

impl<T> Iterable for LinkedSequence<T> {
    type Item = T;
    type Cursor<'a> = Cursor<'a, T> where Self: 'a, T: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        LinkedSequence::iterate(self)
    }
}

impl<T> Iterable for Vec<T> {
    type Item = T;
    type Cursor<'a> = std::slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        self.iter()
    }
}

/// Copy every element into a new `Vec`, in order
pub fn spread<I>(source: &I) -> Vec<I::Item>
where
    I: Iterable,
    I::Item: Clone,
{
    source.iterate().cloned().collect()
}

/// Visit every element in order
pub fn for_each_element<I, F>(source: &I, mut f: F)
where
    I: Iterable,
    F: FnMut(&I::Item),
{
    for item in source.iterate() {
        f(item);
    }
}

/// Sum of all elements, or `None` on overflow
pub fn sum<I>(source: &I) -> Option<i64>
where
    I: Iterable<Item = i64>,
{
    source
        .iterate()
        .try_fold(0i64, |total, &value| total.checked_add(value))
}
