//! Sequence node representation
//!
//! Node = (value, rest)
//! `rest` is another sequence handle, so tails are shared by reference
//! count and never copied. Fields are private: a node cannot change
//! after construction, which keeps every chain acyclic.

use std::rc::Rc;

use super::LinkedSequence;

/// One link in a chain
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node<T> {
    /// Payload
    value: T,

    /// Remainder of the chain (`Empty` for the final node)
    rest: LinkedSequence<T>,
}

impl<T> Node<T> {
    /// Only `LinkedSequence` builds nodes, always on top of an existing tail.
    pub(super) fn new(value: T, rest: LinkedSequence<T>) -> Self {
        Self { value, rest }
    }

    /// Payload of this node
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Sequence following this node
    #[inline]
    pub fn rest(&self) -> &LinkedSequence<T> {
        &self.rest
    }

    /// Check if this is the final node
    #[inline]
    pub fn is_last(&self) -> bool {
        self.rest.is_empty()
    }

    fn take_rest(&mut self) -> LinkedSequence<T> {
        std::mem::take(&mut self.rest)
    }
}

impl<T> Drop for Node<T> {
    /// Unlink iteratively so long chains cannot exhaust the stack.
    ///
    /// Stops at the first node still referenced from elsewhere; that
    /// suffix stays alive for its other owners.
    fn drop(&mut self) {
        let mut next = self.take_rest();
        while let LinkedSequence::Node(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.take_rest(),
                Err(_) => break,
            }
        }
    }
}
