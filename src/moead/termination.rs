//! Built-in termination criteria.

use super::types::{AlgorithmStatus, TerminationCriterion};
use std::time::Duration;

/// Stops once a number of evaluations has been spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminationByEvaluations {
    max_evaluations: usize,
}

impl TerminationByEvaluations {
    /// Stops when at least `max_evaluations` solutions have been evaluated.
    pub fn new(max_evaluations: usize) -> Self {
        Self { max_evaluations }
    }

    /// The evaluation budget.
    pub fn max_evaluations(&self) -> usize {
        self.max_evaluations
    }
}

impl TerminationCriterion for TerminationByEvaluations {
    fn is_met(&self, status: &AlgorithmStatus) -> bool {
        status.evaluations >= self.max_evaluations
    }
}

/// Stops once a wall-clock budget has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminationByComputingTime {
    limit: Duration,
}

impl TerminationByComputingTime {
    /// Stops when `limit` has elapsed since the run started.
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    /// Convenience constructor in milliseconds.
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// The time budget.
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl TerminationCriterion for TerminationByComputingTime {
    fn is_met(&self, status: &AlgorithmStatus) -> bool {
        status.elapsed >= self.limit
    }
}

/// Stops as soon as any inner criterion is met.
///
/// An empty combination never stops on its own.
#[derive(Default)]
pub struct AnyOf {
    criteria: Vec<Box<dyn TerminationCriterion + Send + Sync>>,
}

impl AnyOf {
    /// Creates an empty combination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion.
    pub fn with<T>(mut self, criterion: T) -> Self
    where
        T: TerminationCriterion + Send + Sync + 'static,
    {
        self.criteria.push(Box::new(criterion));
        self
    }

    /// Number of inner criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Whether no criterion has been added.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl std::fmt::Debug for AnyOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyOf")
            .field("criteria", &self.criteria.len())
            .finish()
    }
}

impl TerminationCriterion for AnyOf {
    fn is_met(&self, status: &AlgorithmStatus) -> bool {
        self.criteria.iter().any(|c| c.is_met(status))
    }
}
