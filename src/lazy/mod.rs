//! Generator-style lazy iterators
//!
//! Each generator keeps its own private state and produces values only
//! when asked. A generator is restarted by constructing a new one.
//! All of them feed straight into `LinkedSequence::from_iter`.

mod generators;
mod range;

pub use generators::{fibonacci, powers, Fibonacci, IdGenerator, Powers};
pub use range::{range, StepRange};
