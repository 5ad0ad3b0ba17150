//! Unbounded and limit-bounded numeric generators

use std::iter::FusedIterator;

/// Successive powers of a base: base, base², base³, …
///
/// Ends when the next power would overflow `u64`. Bases 0 and 1 never
/// overflow, so their powers repeat forever.
#[derive(Debug, Clone)]
pub struct Powers {
    base: u64,
    current: Option<u64>,
}

/// Powers of `base`, starting at `base` itself
pub fn powers(base: u64) -> Powers {
    Powers {
        base,
        current: Some(base),
    }
}

impl Iterator for Powers {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.current?;
        self.current = current.checked_mul(self.base);
        Some(current)
    }
}

impl FusedIterator for Powers {}

/// Fibonacci numbers 0, 1, 1, 2, 3, … not exceeding a limit
#[derive(Debug, Clone)]
pub struct Fibonacci {
    /// (a, b) = current and next term; `a` is `None` once exhausted
    a: Option<u64>,
    b: Option<u64>,
    limit: u64,
}

/// Fibonacci numbers up to and including `limit`
pub fn fibonacci(limit: u64) -> Fibonacci {
    Fibonacci {
        a: Some(0),
        b: Some(1),
        limit,
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let a = self.a.filter(|&a| a <= self.limit)?;
        let next = match self.b {
            Some(b) => a.checked_add(b),
            None => None,
        };
        self.a = self.b;
        self.b = next;
        Some(a)
    }
}

impl FusedIterator for Fibonacci {}

/// Sequential identifiers
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: Option<u64>,
}

impl IdGenerator {
    /// Identifiers starting at 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Identifiers starting at `first`
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for IdGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }
}

impl FusedIterator for IdGenerator {}
