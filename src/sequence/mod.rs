//! Immutable linked sequence
//!
//! Sequence = Empty | Node(value, rest)
//! Nodes sit behind `Rc` and are never mutated, so any number of
//! sequences may share a suffix. Traversal state lives in cursors,
//! never in the chain itself.

mod cursor;
mod iterable;
mod node;

pub use cursor::{Cursor, IntoIter, Step};
pub use iterable::{for_each_element, spread, sum, Iterable};
pub use node::Node;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::{RenderConfig, RenderStyle, SequenceError};

/// Immutable singly-linked sequence
///
/// Cloning is O(1): the clone shares every node with the original.
pub enum LinkedSequence<T> {
    /// Terminal marker, no nodes
    Empty,

    /// Head node of a non-empty chain
    Node(Rc<Node<T>>),
}

impl<T> LinkedSequence<T> {
    /// The empty sequence
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Alias for [`empty`](Self::empty)
    pub const fn new() -> Self {
        Self::Empty
    }

    /// Build a sequence that yields `items` in order
    ///
    /// Folds from the back so each node is attached to a finished tail.
    pub fn from_vec(items: Vec<T>) -> Self {
        let count = items.len();
        let seq = items
            .into_iter()
            .rev()
            .fold(Self::Empty, |rest, value| Self::cons(value, rest));
        tracing::trace!(len = count, "built linked sequence");
        seq
    }

    /// Build a sequence from a borrowed slice
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        items
            .iter()
            .rev()
            .fold(Self::Empty, |rest, value| Self::cons(value.clone(), rest))
    }

    /// Collect the elements head-to-tail
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// New sequence with `value` in front of `self`
    ///
    /// O(1). `self` becomes the shared tail of the result.
    pub fn prepend(&self, value: T) -> Self {
        Self::cons(value, self.clone())
    }

    fn cons(value: T, rest: Self) -> Self {
        Self::Node(Rc::new(Node::new(value, rest)))
    }

    /// Check for the terminal marker
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Head node, if any
    #[inline]
    pub fn as_node(&self) -> Option<&Node<T>> {
        match self {
            Self::Empty => None,
            Self::Node(node) => Some(&**node),
        }
    }

    /// First element
    pub fn head(&self) -> Option<&T> {
        self.as_node().map(Node::value)
    }

    /// Everything after the first element (`None` when empty)
    pub fn rest(&self) -> Option<&Self> {
        self.as_node().map(Node::rest)
    }

    /// Number of nodes before the terminal marker
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Number of nodes, computed by structural recursion
    ///
    /// `0` for empty, else `1 + rest.len_recursive()`. Stack depth grows
    /// with the length; prefer [`len`](Self::len) for long chains.
    pub fn len_recursive(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(node) => 1 + node.rest().len_recursive(),
        }
    }

    /// Element at zero-based position `n`
    pub fn nth(&self, n: usize) -> Option<&T> {
        self.skip_to(n).head()
    }

    /// Element at zero-based position `n`, by structural recursion
    ///
    /// Agrees with [`nth`](Self::nth) for every input.
    pub fn nth_recursive(&self, n: usize) -> Option<&T> {
        match (self, n) {
            (Self::Empty, _) => None,
            (Self::Node(node), 0) => Some(node.value()),
            (Self::Node(node), n) => node.rest().nth_recursive(n - 1),
        }
    }

    /// Element at position `n`, reporting absence as an error
    pub fn try_nth(&self, n: usize) -> Result<&T, SequenceError> {
        self.nth(n).ok_or_else(|| SequenceError::IndexOutOfRange {
            index: n,
            len: self.len(),
        })
    }

    /// Shared suffix starting at position `n`
    ///
    /// Returns the empty sequence once `n` reaches the length.
    pub fn skip_to(&self, n: usize) -> &Self {
        let mut current = self;
        for _ in 0..n {
            match current {
                Self::Empty => break,
                Self::Node(node) => current = node.rest(),
            }
        }
        current
    }

    /// New sequence with the elements in reverse order
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        self.iter()
            .fold(Self::Empty, |acc, value| Self::cons(value.clone(), acc))
    }

    /// Fresh cursor positioned before the head
    ///
    /// Every call returns an independent cursor.
    pub fn iterate(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Alias for [`iterate`](Self::iterate)
    pub fn iter(&self) -> Cursor<'_, T> {
        self.iterate()
    }

    /// Render as text using `config`
    pub fn render(&self, config: &RenderConfig) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_rendered(&mut out, config);
        out
    }

    fn write_rendered<W: fmt::Write>(&self, out: &mut W, config: &RenderConfig) -> fmt::Result
    where
        T: fmt::Display,
    {
        match config.style {
            RenderStyle::Flat => self.write_flat(out, &config.separator, config.max_elements),
            RenderStyle::Nested => self.write_nested(out, config.max_elements),
        }
    }

    fn write_flat<W: fmt::Write>(
        &self,
        out: &mut W,
        separator: &str,
        max: Option<usize>,
    ) -> fmt::Result
    where
        T: fmt::Display,
    {
        out.write_char('[')?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                out.write_str(separator)?;
            }
            if max.is_some_and(|max| i >= max) {
                out.write_str("...")?;
                break;
            }
            write!(out, "{}", value)?;
        }
        out.write_char(']')
    }

    fn write_nested<W: fmt::Write>(&self, out: &mut W, max: Option<usize>) -> fmt::Result
    where
        T: fmt::Display,
    {
        let mut open = 0;
        let mut truncated = false;
        for (i, value) in self.iter().enumerate() {
            if max.is_some_and(|max| i >= max) {
                truncated = true;
                break;
            }
            write!(out, "{{ value: {}, rest: ", value)?;
            open += 1;
        }
        out.write_str(if truncated { "..." } else { "null" })?;
        for _ in 0..open {
            out.write_str(" }")?;
        }
        Ok(())
    }
}

/// Free-standing form of [`LinkedSequence::prepend`]
pub fn prepend<T>(value: T, seq: &LinkedSequence<T>) -> LinkedSequence<T> {
    seq.prepend(value)
}

impl<T> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(node) => Self::Node(Rc::clone(node)),
        }
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self;
        let mut right = other;
        loop {
            match (left, right) {
                (Self::Empty, Self::Empty) => return true,
                (Self::Node(a), Self::Node(b)) => {
                    // No pointer shortcut: `T: PartialEq` may be irreflexive (NaN).
                    if a.value() != b.value() {
                        return false;
                    }
                    left = a.rest();
                    right = b.rest();
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: Hash> Hash for LinkedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count = 0usize;
        for value in self.iter() {
            value.hash(state);
            count += 1;
        }
        count.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nested(f, None)
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for LinkedSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterate()
    }
}

impl<T: Clone> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

/// Longest chain the `visualize` serializer will write.
///
/// The nested form adds one level of nesting per node, and common
/// deserializers refuse deep input (serde_json stops at 128 levels).
/// Longer chains fail to serialize with an error instead.
#[cfg(feature = "visualize")]
pub const VISUALIZE_MAX_DEPTH: usize = 100;

#[cfg(feature = "visualize")]
mod visualize {
    //! Nested `{"value": .., "rest": ..}` form, `null` as the terminal marker

    use super::{LinkedSequence, VISUALIZE_MAX_DEPTH};
    use serde::de::Deserializer;
    use serde::ser::{Error, SerializeStruct, Serializer};
    use serde::{Deserialize, Serialize};

    impl<T: Serialize> Serialize for LinkedSequence<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            // Checked up front so nothing is written and recursion stays bounded.
            if self.skip_to(VISUALIZE_MAX_DEPTH).head().is_some() {
                return Err(S::Error::custom(format!(
                    "sequence longer than {} nodes cannot be serialized in nested form",
                    VISUALIZE_MAX_DEPTH
                )));
            }
            Chain(self).serialize(serializer)
        }
    }

    /// Length already validated by the caller.
    struct Chain<'a, T>(&'a LinkedSequence<T>);

    impl<T: Serialize> Serialize for Chain<'_, T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self.0 {
                LinkedSequence::Empty => serializer.serialize_none(),
                LinkedSequence::Node(node) => {
                    let mut state = serializer.serialize_struct("Node", 2)?;
                    state.serialize_field("value", node.value())?;
                    state.serialize_field("rest", &Chain(node.rest()))?;
                    state.end()
                }
            }
        }
    }

    #[derive(Deserialize)]
    struct NodeRepr<T> {
        value: T,
        rest: Option<Box<NodeRepr<T>>>,
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedSequence<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let mut items = Vec::new();
            let mut next = Option::<NodeRepr<T>>::deserialize(deserializer)?.map(Box::new);
            while let Some(node) = next {
                let NodeRepr { value, rest } = *node;
                items.push(value);
                next = rest;
            }
            Ok(LinkedSequence::from_vec(items))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_structure() {
        // {value: 1, rest: {value: 2, rest: {value: 3, rest: empty}}}
        let seq = LinkedSequence::from_slice(&[1, 2, 3]);
        let first = seq.as_node().expect("first node");
        let second = first.rest().as_node().expect("second node");
        let third = second.rest().as_node().expect("third node");

        assert_eq!(
            (*first.value(), *second.value(), *third.value()),
            (1, 2, 3)
        );
        assert!(third.rest().is_empty());
    }

    #[test]
    fn test_empty_sequence() {
        let seq: LinkedSequence<i32> = LinkedSequence::from_vec(Vec::new());
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.len_recursive(), 0);
        assert_eq!(seq.to_vec(), Vec::<i32>::new());
        assert_eq!(seq.nth(0), None);
        assert_eq!(seq.head(), None);
        assert!(seq.rest().is_none());
    }

    #[test]
    fn test_prepend_shares_tail() {
        let tail = LinkedSequence::from_slice(&[1, 2, 3]);
        let a = tail.prepend(0);
        let b = prepend(9, &tail);

        let (
            LinkedSequence::Node(shared),
            Some(LinkedSequence::Node(from_a)),
            Some(LinkedSequence::Node(from_b)),
        ) = (&tail, a.rest(), b.rest())
        else {
            panic!("expected non-empty sequences");
        };
        assert!(Rc::ptr_eq(shared, from_a));
        assert!(Rc::ptr_eq(shared, from_b));

        // Original untouched.
        assert_eq!(tail.to_vec(), vec![1, 2, 3]);
        assert_eq!(a.to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(b.to_vec(), vec![9, 1, 2, 3]);
    }

    #[test]
    fn test_nth_absent_is_distinct_from_stored_none() {
        let seq = LinkedSequence::from_slice(&[None, Some(1)]);
        assert_eq!(seq.nth(0), Some(&None));
        assert_eq!(seq.nth(2), None);
        assert_eq!(seq.nth_recursive(0), Some(&None));
        assert_eq!(seq.nth_recursive(2), None);
    }

    #[test]
    fn test_try_nth_reports_length() {
        let seq = LinkedSequence::from_slice(&['a', 'b']);
        assert_eq!(seq.try_nth(1), Ok(&'b'));
        assert_eq!(
            seq.try_nth(5),
            Err(SequenceError::IndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_skip_to_returns_shared_suffix() {
        let seq = LinkedSequence::from_slice(&[1, 2, 3, 4]);
        assert_eq!(seq.skip_to(0).to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(seq.skip_to(2).to_vec(), vec![3, 4]);
        assert!(seq.skip_to(4).is_empty());
        assert!(seq.skip_to(40).is_empty());
    }

    #[test]
    fn test_reverse() {
        let seq = LinkedSequence::from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(seq.reverse().to_vec(), vec![5, 4, 3, 2, 1]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
        assert!(LinkedSequence::<u8>::empty().reverse().is_empty());
    }

    #[test]
    fn test_structural_equality() {
        let a = LinkedSequence::from_slice(&[1, 2, 3]);
        let b: LinkedSequence<_> = vec![1, 2, 3].into();
        let c = LinkedSequence::from_slice(&[1, 2]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, a.clone());
        assert_ne!(a, LinkedSequence::empty());
    }

    #[test]
    fn test_equality_with_irreflexive_elements() {
        let a = LinkedSequence::from_slice(&[f64::NAN]);
        let b = LinkedSequence::from_slice(&[f64::NAN]);

        // Same answer whether or not the nodes are shared.
        assert_ne!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(a == a.clone(), a.to_vec() == a.clone().to_vec());
    }

    #[test]
    fn test_display_nested() {
        let seq = LinkedSequence::from_slice(&[1, 2, 3]);
        assert_eq!(
            seq.to_string(),
            "{ value: 1, rest: { value: 2, rest: { value: 3, rest: null } } }"
        );
        assert_eq!(LinkedSequence::<i32>::empty().to_string(), "null");
    }

    #[test]
    fn test_render_flat_and_truncated() {
        let seq = LinkedSequence::from_slice(&[1, 2, 3, 4]);
        assert_eq!(seq.render(&RenderConfig::flat()), "[1, 2, 3, 4]");
        assert_eq!(
            seq.render(&RenderConfig::flat().with_separator(" ").with_max_elements(2)),
            "[1 2 ...]"
        );
        assert_eq!(
            seq.render(&RenderConfig::nested().with_max_elements(1)),
            "{ value: 1, rest: ... }"
        );
        assert_eq!(LinkedSequence::<i32>::empty().render(&RenderConfig::flat()), "[]");
    }

    #[test]
    fn test_debug_is_flat() {
        let seq = LinkedSequence::from_slice(&["x", "y"]);
        assert_eq!(format!("{:?}", seq), r#"["x", "y"]"#);
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let seq: LinkedSequence<u32> = (0..1_000_000).collect();
        assert_eq!(seq.len(), 1_000_000);
        assert_eq!(seq.nth(999_999), Some(&999_999));
        drop(seq);
    }

    #[test]
    fn test_drop_stops_at_shared_suffix() {
        let tail: LinkedSequence<u32> = (0..10).collect();
        let longer = tail.prepend(100).prepend(200);
        drop(longer);
        assert_eq!(tail.to_vec(), (0..10).collect::<Vec<_>>());
    }
}
