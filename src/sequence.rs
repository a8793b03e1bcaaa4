//! Subproblem traversal orders.
//!
//! A [`SequenceGenerator`] decides in which order the MOEA/D loop visits
//! subproblems. Each period of a generator yields a fixed number of indices;
//! when the period is exhausted the caller restarts it.
//!
//! - [`IntegerPermutationGenerator`]: a fresh random permutation per period
//! - [`CyclicIntegerSequence`]: `0, 1, …, L-1` every period

use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// A restartable, fixed-length traversal over `0..period()`.
pub trait SequenceGenerator {
    /// Number of indices produced per period.
    fn period(&self) -> usize;

    /// Whether the current period still has indices left.
    fn has_next(&self) -> bool;

    /// Returns the next index of the current period, or `None` once the
    /// period is exhausted.
    fn next_index(&mut self) -> Option<usize>;

    /// Starts a new period, independent of every earlier one.
    ///
    /// Randomized generators draw their new order from `rng`.
    fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R);
}

/// Random permutation of `0..length`, reshuffled on every restart.
///
/// Every index in `0..length` is produced exactly once per period.
#[derive(Debug, Clone)]
pub struct IntegerPermutationGenerator {
    order: Vec<usize>,
    cursor: usize,
}

impl IntegerPermutationGenerator {
    /// Creates a generator and shuffles its first period.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `length` is zero.
    pub fn new<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Self> {
        if length == 0 {
            return Err(Error::config("sequence length must be at least 1"));
        }
        let mut generator = Self {
            order: Vec::new(),
            cursor: 0,
        };
        generator.order = shuffled(length, rng);
        Ok(generator)
    }

    /// The order of the current period.
    pub fn current_order(&self) -> &[usize] {
        &self.order
    }
}

fn shuffled<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..length).collect();
    order.shuffle(rng);
    order
}

impl SequenceGenerator for IntegerPermutationGenerator {
    fn period(&self) -> usize {
        self.order.len()
    }

    fn has_next(&self) -> bool {
        self.cursor < self.order.len()
    }

    fn next_index(&mut self) -> Option<usize> {
        let value = self.order.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(value)
    }

    fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order = shuffled(self.order.len(), rng);
        self.cursor = 0;
    }
}

/// Deterministic `0, 1, …, length-1` sequence.
#[derive(Debug, Clone)]
pub struct CyclicIntegerSequence {
    length: usize,
    cursor: usize,
}

impl CyclicIntegerSequence {
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::config("sequence length must be at least 1"));
        }
        Ok(Self { length, cursor: 0 })
    }
}

impl SequenceGenerator for CyclicIntegerSequence {
    fn period(&self) -> usize {
        self.length
    }

    fn has_next(&self) -> bool {
        self.cursor < self.length
    }

    fn next_index(&mut self) -> Option<usize> {
        if self.cursor >= self.length {
            return None;
        }
        let value = self.cursor;
        self.cursor += 1;
        Some(value)
    }

    fn restart<R: Rng + ?Sized>(&mut self, _rng: &mut R) {
        self.cursor = 0;
    }
}
