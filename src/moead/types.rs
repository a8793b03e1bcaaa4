//! Collaborator contracts of the MOEA/D loop.
//!
//! The loop owns selection, neighbourhoods, and replacement. Everything
//! problem-specific is supplied through these traits:
//!
//! - [`Problem`]: creates and evaluates solutions
//! - [`Variation`]: turns a mating pool into offspring
//! - [`AggregationFunction`]: scalarizes objective vectors per subproblem
//! - [`TerminationCriterion`]: decides when to stop

use crate::solution::Solution;
use rand::Rng;
use std::time::Duration;

/// Defines a multi-objective optimization problem.
///
/// All objectives are minimized.
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync` because the initial population may be
/// evaluated in parallel (feature `parallel`).
pub trait Problem: Send + Sync {
    /// Number of decision variables.
    fn num_variables(&self) -> usize;

    /// Number of objectives.
    fn num_objectives(&self) -> usize;

    /// Number of constraints. Defaults to none.
    fn num_constraints(&self) -> usize {
        0
    }

    /// Creates a random, unevaluated solution.
    fn create_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Solution;

    /// Fills in the objective and constraint values of `solution`.
    fn evaluate(&self, solution: &mut Solution);
}

/// Produces offspring from a mating pool.
pub trait Variation {
    /// Mating-pool size this operator consumes.
    fn required_parents(&self) -> usize;

    /// Offspring produced per call.
    fn offspring_count(&self) -> usize;

    /// Creates unevaluated offspring.
    ///
    /// `parents` holds exactly [`required_parents`](Self::required_parents)
    /// solutions, in mating-pool order.
    fn execute<R: Rng + ?Sized>(&self, parents: &[&Solution], rng: &mut R) -> Vec<Solution>;
}

/// Scalarizes an objective vector against a subproblem's weight vector.
///
/// Lower values are better.
pub trait AggregationFunction {
    /// Informs the function of the current ideal point.
    fn update(&mut self, ideal_point: &[f64]);

    /// Scalar value of `objectives` for the subproblem with `weights`.
    fn compute(&self, objectives: &[f64], weights: &[f64]) -> f64;
}

/// Progress of a run, as seen by termination criteria.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmStatus {
    /// Solutions evaluated so far, including the initial population.
    pub evaluations: usize,
    /// Completed passes over the subproblem sequence.
    pub passes: usize,
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
}

/// Decides when a run stops.
///
/// Criteria are polled between subproblem steps, so evaluation and
/// wall-clock budgets are honoured mid-pass. Any `Fn(&AlgorithmStatus) -> bool`
/// is a criterion.
pub trait TerminationCriterion {
    /// Whether the run should stop now.
    fn is_met(&self, status: &AlgorithmStatus) -> bool;
}

impl<F> TerminationCriterion for F
where
    F: Fn(&AlgorithmStatus) -> bool,
{
    fn is_met(&self, status: &AlgorithmStatus) -> bool {
        self(status)
    }
}

/// Stage of the MOEA/D state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Building neighbourhoods and the initial population.
    ///
    /// This phase spans [`MoeadRunner::new`](super::MoeadRunner::new) and
    /// is never observed on a constructed runner, which starts in
    /// [`GeneratingOffspring`](Self::GeneratingOffspring).
    Initializing,
    /// Selecting parents and applying variation.
    GeneratingOffspring,
    /// Evaluating offspring.
    Evaluating,
    /// Updating the ideal point and neighbouring subproblems.
    Replacing,
    /// The termination criterion was met or the run was cancelled.
    Terminated,
}
