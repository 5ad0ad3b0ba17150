//! Inclusive stepped ranges
//!
//! Positive step: start, start+step, … while `<= end`
//! Negative step: start, start+step, … while `>= end`

use std::iter::FusedIterator;

use crate::SequenceError;

/// Inclusive range with an arbitrary non-zero step
#[derive(Debug, Clone)]
pub struct StepRange {
    /// Next value to yield; `None` once exhausted
    next: Option<i64>,
    end: i64,
    step: i64,
}

/// Inclusive range from `start` to `end` by `step`
///
/// A range pointing away from `end` is simply empty.
pub fn range(start: i64, end: i64, step: i64) -> Result<StepRange, SequenceError> {
    if step == 0 {
        return Err(SequenceError::ZeroStep);
    }
    Ok(StepRange {
        next: Some(start),
        end,
        step,
    })
}

impl StepRange {
    #[inline]
    fn in_bounds(&self, value: i64) -> bool {
        if self.step > 0 {
            value <= self.end
        } else {
            value >= self.end
        }
    }
}

impl Iterator for StepRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let value = self.next.filter(|&v| self.in_bounds(v))?;
        self.next = value.checked_add(self.step);
        Some(value)
    }
}

impl FusedIterator for StepRange {}
