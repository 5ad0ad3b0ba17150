//! # Immutable Linked Sequences
//!
//! This library implements a persistent singly-linked sequence whose
//! nodes are shared between every handle derived from a common tail.
//!
//! ## Core Model
//!
//! 1. **Tagged chain**: a sequence is `Empty` or a `Node(value, rest)`
//! 2. **Shared tails**: `prepend` is O(1) and never copies `rest`
//! 3. **Private cursors**: each traversal owns its own position, so any
//!    number of cursors may walk the same chain independently
//! 4. **Explicit absence**: lookups return `Option`, never a sentinel
//!
//! With the `visualize` feature, sequences serialize in the nested
//! `{"value": .., "rest": ..}` form. Chains longer than
//! `VISUALIZE_MAX_DEPTH` nodes are rejected with a
//! serializer error rather than nesting without bound.
//!
//! Acyclicity holds by construction: nodes are immutable and can only be
//! placed in front of an already-built chain.
//!
//! ## Usage Example
//!
//! ```
//! use linkseq::LinkedSequence;
//!
//! let seq = LinkedSequence::from_slice(&[1, 2, 3]);
//! assert_eq!(seq.to_vec(), vec![1, 2, 3]);
//! assert_eq!(seq.nth(1), Some(&2));
//! assert_eq!(seq.nth(5), None);
//! assert_eq!(seq.prepend(0).to_vec(), vec![0, 1, 2, 3]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod lazy;     // Generator-style lazy iterators
pub mod sequence; // Linked sequence, nodes and cursors

// Re-exports for convenience
pub use lazy::{fibonacci, powers, range, Fibonacci, IdGenerator, Powers, StepRange};
pub use sequence::{
    for_each_element, prepend, spread, sum, Cursor, IntoIter, Iterable, LinkedSequence, Node,
    Step,
};

#[cfg(feature = "visualize")]
pub use sequence::VISUALIZE_MAX_DEPTH;

use thiserror::Error;

/// Errors surfaced by fallible sequence operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Positional lookup past the end of the chain
    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Requested zero-based position
        index: usize,
        /// Length of the sequence that was searched
        len: usize,
    },

    /// A stepped range cannot advance with a zero step
    #[error("Range step must be non-zero")]
    ZeroStep,

    /// Text that could not be turned into an element
    #[error("Invalid element '{input}': {reason}")]
    InvalidElement {
        /// Offending input
        input: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Layout used when rendering a sequence as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// `{ value: 1, rest: { value: 2, rest: null } }`
    #[default]
    Nested,

    /// `[1, 2]`
    Flat,
}

/// Configuration parameters for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Nested node form or flat list form
    pub style: RenderStyle,

    /// Separator between elements (flat style only)
    pub separator: String,

    /// Stop after this many elements and print `...` for the remainder
    pub max_elements: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::nested()
    }
}

impl RenderConfig {
    /// Node-by-node form, mirroring the chain structure
    pub fn nested() -> Self {
        Self {
            style: RenderStyle::Nested,
            separator: ", ".to_string(),
            max_elements: None,
        }
    }

    /// Bracketed list form
    pub fn flat() -> Self {
        Self {
            style: RenderStyle::Flat,
            ..Self::nested()
        }
    }

    /// Override the element separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Truncate output after `max` elements
    pub fn with_max_elements(mut self, max: usize) -> Self {
        self.max_elements = Some(max);
        self
    }

    /// Whether the element at `index` falls past the truncation point
    #[inline]
    pub fn truncates_at(&self, index: usize) -> bool {
        self.max_elements.is_some_and(|max| index >= max)
    }
}

/// Parse a whitespace-free token into an `i64` element
///
/// Used by the command-line front end; exposed so callers can reuse the
/// same boundary validation.
pub fn parse_element(input: &str) -> Result<i64, SequenceError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|e| SequenceError::InvalidElement {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_preset_keeps_separator() {
        let config = RenderConfig::flat();
        assert_eq!(config.style, RenderStyle::Flat);
        assert_eq!(config.separator, ", ");
        assert_eq!(config.max_elements, None);
    }

    #[test]
    fn test_truncation_point() {
        let config = RenderConfig::flat().with_max_elements(2);
        assert!(!config.truncates_at(1));
        assert!(config.truncates_at(2));
        assert!(!RenderConfig::default().truncates_at(1_000));
    }

    #[test]
    fn test_parse_element() {
        assert_eq!(parse_element(" 42 "), Ok(42));
        assert_eq!(parse_element("-7"), Ok(-7));

        let err = parse_element("seven").unwrap_err();
        assert!(matches!(err, SequenceError::InvalidElement { ref input, .. } if input == "seven"));
        assert!(err.to_string().starts_with("Invalid element 'seven'"));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = SequenceError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "Index 5 out of range for sequence of length 3"
        );
    }
}
