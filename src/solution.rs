//! The solution value type.

/// A candidate solution of a multi-objective problem.
///
/// Solutions are plain values: decision variables, objective values, and
/// constraint-violation values. Within a generation a solution is identified
/// by its position in the population. Selection components only read
/// solutions; replacement overwrites population slots with fresh copies.
///
/// All objectives are **minimized**. A constraint value below zero denotes a
/// violation of that magnitude; zero or positive values are satisfied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Decision-variable values.
    pub variables: Vec<f64>,
    /// Objective values, filled in by evaluation.
    pub objectives: Vec<f64>,
    /// Constraint values, filled in by evaluation.
    pub constraints: Vec<f64>,
}

impl Solution {
    /// Creates an unevaluated solution.
    ///
    /// Objectives start at `f64::INFINITY` and constraints at `0.0`.
    pub fn new(variables: Vec<f64>, num_objectives: usize, num_constraints: usize) -> Self {
        Self {
            variables,
            objectives: vec![f64::INFINITY; num_objectives],
            constraints: vec![0.0; num_constraints],
        }
    }

    /// Creates an already evaluated, unconstrained solution.
    ///
    /// Mostly useful for tests and for seeding a population from known points.
    pub fn with_objectives(variables: Vec<f64>, objectives: Vec<f64>) -> Self {
        Self {
            variables,
            objectives,
            constraints: Vec::new(),
        }
    }

    /// Number of objectives.
    pub fn num_objectives(&self) -> usize {
        self.objectives.len()
    }

    /// Sum of violated constraint magnitudes (always `<= 0.0`).
    pub fn overall_constraint_violation(&self) -> f64 {
        self.constraints.iter().filter(|&&c| c < 0.0).sum()
    }

    /// Number of violated constraints.
    pub fn violated_constraints(&self) -> usize {
        self.constraints.iter().filter(|&&c| c < 0.0).count()
    }

    /// Whether no constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.violated_constraints() == 0
    }
}
