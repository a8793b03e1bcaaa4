//! Decomposition-based multi-objective optimization.
//!
//! Provides the parent-selection machinery of multi-objective evolutionary
//! algorithms and a complete MOEA/D loop built on it:
//!
//! - **Neighbourhoods**: weight vectors for every scalar subproblem and the
//!   `T` closest subproblems of each, fixed at construction.
//! - **Sequences**: randomized or cyclic traversal orders over subproblems.
//! - **Preference**: Pareto ranking and density estimation, recomputed from a
//!   population snapshot on demand.
//! - **Selection**: n-ary tournaments and the MOEA/D neighbourhood-or-
//!   population sampling, behind one closed [`selection::MatingPoolSelection`].
//! - **MOEA/D**: the decomposition loop with Tschebyscheff/weighted-sum/PBI
//!   aggregation, capped neighbour replacement, and evaluation or time budgets.
//!
//! All objectives are minimized. Every stochastic operation takes an explicit
//! generator handle; runs seeded through [`random::create_rng`] are
//! bit-reproducible.
//!
//! # Architecture
//!
//! Selection strategies never mutate the population: they return indices or
//! references into the slice passed to each call. Only the MOEA/D runner
//! writes population slots, sequentially, one subproblem at a time.

pub mod error;
pub mod moead;
pub mod neighborhood;
pub mod preference;
pub mod random;
pub mod selection;
pub mod sequence;
pub mod solution;

pub use error::{Error, Result};
pub use solution::Solution;
