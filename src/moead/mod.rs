//! MOEA/D: multi-objective optimization by decomposition.
//!
//! The problem is split into `N` scalar subproblems, one per weight vector.
//! Each subproblem keeps one solution; offspring produced for a subproblem
//! compete for the slots of its neighbours under the aggregation function.
//!
//! # Submodules
//!
//! - [`types`]: collaborator traits ([`Problem`], [`Variation`],
//!   [`AggregationFunction`], [`TerminationCriterion`])
//! - [`config`]: [`MoeadConfig`] builder
//! - [`runner`]: [`MoeadRunner`] state machine and [`MoeadResult`]
//! - [`aggregation`]: Tschebyscheff, weighted sum, PBI
//! - [`termination`]: evaluation and time budgets
//! - [`variation`]: DE/rand/1/bin with polynomial mutation
//!
//! # Example
//!
//! ```
//! use rand::Rng;
//! use u_moea::moead::{
//!     DifferentialEvolutionVariation, MoeadConfig, MoeadRunner, Problem,
//!     TerminationByEvaluations, Tschebyscheff,
//! };
//! use u_moea::Solution;
//!
//! struct Schaffer;
//!
//! impl Problem for Schaffer {
//!     fn num_variables(&self) -> usize { 1 }
//!     fn num_objectives(&self) -> usize { 2 }
//!     fn create_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Solution {
//!         Solution::new(vec![rng.random_range(-10.0..10.0)], 2, 0)
//!     }
//!     fn evaluate(&self, s: &mut Solution) {
//!         let x = s.variables[0];
//!         s.objectives = vec![x * x, (x - 2.0) * (x - 2.0)];
//!     }
//! }
//!
//! let variation = DifferentialEvolutionVariation::new(vec![(-10.0, 10.0)]).unwrap();
//! let config = MoeadConfig::default()
//!     .with_population_size(20)
//!     .with_neighborhood_size(5)
//!     .with_seed(42);
//!
//! let result = MoeadRunner::new(&Schaffer, variation, Tschebyscheff::new(), &config)
//!     .unwrap()
//!     .run(&TerminationByEvaluations::new(2_000))
//!     .unwrap();
//!
//! assert_eq!(result.evaluations, 2_000);
//! assert!(result.ideal_point.iter().all(|&z| z < 1.0));
//! ```
//!
//! # References
//!
//! - Zhang & Li (2007), "MOEA/D: A Multiobjective Evolutionary Algorithm
//!   Based on Decomposition"
//! - Li & Zhang (2009), "Multiobjective Optimization Problems With Complicated
//!   Pareto Sets, MOEA/D and NSGA-II"

pub mod aggregation;
pub mod config;
pub mod runner;
pub mod termination;
pub mod types;
pub mod variation;

pub use aggregation::{PenaltyBoundaryIntersection, Tschebyscheff, WeightedSum};
pub use config::MoeadConfig;
pub use runner::{MoeadResult, MoeadRunner};
pub use termination::{AnyOf, TerminationByComputingTime, TerminationByEvaluations};
pub use types::{
    AggregationFunction, AlgorithmStatus, Phase, Problem, TerminationCriterion, Variation,
};
pub use variation::DifferentialEvolutionVariation;
