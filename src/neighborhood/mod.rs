//! Weight-vector neighbourhoods for decomposition algorithms.
//!
//! A [`WeightVectorNeighborhood`] assigns one weight vector to every
//! subproblem and precomputes, for each subproblem, the `T` subproblems whose
//! weight vectors are closest to its own. Both tables are fixed at
//! construction.
//!
//! # Submodules
//!
//! - [`weights`]: weight-vector generation schemes and weight-file parsing

pub mod weights;

use crate::error::{Error, Result};
use rand::Rng;

pub use weights::WeightGeneration;

/// Distance used to rank weight vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// L2 distance.
    #[default]
    Euclidean,
    /// L1 distance.
    Manhattan,
}

impl DistanceMetric {
    /// Distance between two vectors of equal length.
    pub fn distance(self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            DistanceMetric::Euclidean => a
                .iter()
                .zip(b)
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f64>()
                .sqrt(),
            DistanceMetric::Manhattan => a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum(),
        }
    }
}

/// Immutable weight vectors and their `T`-nearest-neighbour table.
///
/// Subproblem `i` always appears first in its own neighbourhood: weight
/// vectors are pairwise distinct, so `i` is the unique point at distance
/// zero. Remaining neighbours are ordered by increasing distance, ties
/// broken by lower index, so the table is a pure function of the weights.
///
/// # Examples
///
/// ```
/// use u_moea::neighborhood::WeightVectorNeighborhood;
///
/// let hood = WeightVectorNeighborhood::new(5, 3).unwrap();
/// assert_eq!(hood.weight_vector(1), &[0.25, 0.75]);
/// assert_eq!(hood.neighborhood(0), &[0, 1, 2]);
/// assert_eq!(hood.neighborhood(2), &[2, 1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVectorNeighborhood {
    weights: Vec<Vec<f64>>,
    neighbors: Vec<Vec<usize>>,
    metric: DistanceMetric,
}

impl WeightVectorNeighborhood {
    /// Two-objective neighbourhood with evenly spaced weights.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `t` is zero or exceeds `n`.
    pub fn new(n: usize, t: usize) -> Result<Self> {
        Self::from_weights(weights::uniform_weights_2d(n)?, t, DistanceMetric::Euclidean)
    }

    /// Neighbourhood over weights produced by `generation`.
    ///
    /// `rng` is only consumed by randomized schemes.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `t` is zero, `t > n`, or the
    /// scheme cannot produce `n` distinct weight vectors.
    pub fn generate<R: Rng + ?Sized>(
        n: usize,
        t: usize,
        generation: &WeightGeneration,
        rng: &mut R,
    ) -> Result<Self> {
        check_sizes(n, t)?;
        let weights = generation.generate(n, rng)?;
        Self::from_weights(weights, t, DistanceMetric::Euclidean)
    }

    /// Neighbourhood over explicit weight vectors under a chosen metric.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `t` is out of range or the
    /// weights are not distinct points on the simplex.
    pub fn from_weights(weights: Vec<Vec<f64>>, t: usize, metric: DistanceMetric) -> Result<Self> {
        let n = weights.len();
        check_sizes(n, t)?;
        let weights = weights::validated(&weights)?;
        let neighbors = nearest_neighbors(&weights, t, metric);

        tracing::debug!(
            subproblems = n,
            neighborhood_size = t,
            objectives = weights[0].len(),
            ?metric,
            "built weight-vector neighborhood"
        );

        Ok(Self {
            weights,
            neighbors,
            metric,
        })
    }

    /// Number of subproblems `N`.
    pub fn num_subproblems(&self) -> usize {
        self.weights.len()
    }

    /// Neighbourhood size `T`.
    pub fn neighborhood_size(&self) -> usize {
        self.neighbors.first().map_or(0, Vec::len)
    }

    /// Objective-space dimensionality of the weight vectors.
    pub fn num_objectives(&self) -> usize {
        self.weights[0].len()
    }

    /// Metric the neighbour table was built with.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Weight vector of subproblem `i`.
    ///
    /// # Panics
    /// Panics if `i >= num_subproblems()`.
    pub fn weight_vector(&self, i: usize) -> &[f64] {
        &self.weights[i]
    }

    /// All weight vectors, indexed by subproblem.
    pub fn weight_vectors(&self) -> &[Vec<f64>] {
        &self.weights
    }

    /// The `T` subproblems closest to `i`, `i` first.
    ///
    /// # Panics
    /// Panics if `i >= num_subproblems()`.
    pub fn neighborhood(&self, i: usize) -> &[usize] {
        &self.neighbors[i]
    }

    /// The solutions of `population` that occupy the neighbourhood of `i`.
    ///
    /// # Errors
    /// Returns [`Error::PopulationSizeMismatch`] if the population does not
    /// hold one solution per subproblem, or [`Error::IndexOutOfRange`] if `i`
    /// is not a subproblem.
    pub fn neighbors<'a, S>(&self, population: &'a [S], i: usize) -> Result<Vec<&'a S>> {
        self.check_population(population.len())?;
        if i >= self.num_subproblems() {
            return Err(Error::IndexOutOfRange {
                index: i,
                len: self.num_subproblems(),
            });
        }
        Ok(self.neighbors[i].iter().map(|&j| &population[j]).collect())
    }

    pub(crate) fn check_population(&self, len: usize) -> Result<()> {
        if len != self.num_subproblems() {
            return Err(Error::PopulationSizeMismatch {
                expected: self.num_subproblems(),
                got: len,
            });
        }
        Ok(())
    }
}

fn check_sizes(n: usize, t: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::config("population size must be at least 1"));
    }
    if t == 0 {
        return Err(Error::config("neighborhood size must be at least 1"));
    }
    if t > n {
        return Err(Error::config(format!(
            "neighborhood size {t} exceeds population size {n}"
        )));
    }
    Ok(())
}

/// For each weight vector, the indices of its `t` nearest vectors.
fn nearest_neighbors(weights: &[Vec<f64>], t: usize, metric: DistanceMetric) -> Vec<Vec<usize>> {
    weights
        .iter()
        .map(|wi| {
            let mut ranked: Vec<(f64, usize)> = weights
                .iter()
                .enumerate()
                .map(|(j, wj)| (metric.distance(wi, wj), j))
                .collect();
            ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
            ranked.into_iter().take(t).map(|(_, j)| j).collect()
        })
        .collect()
}
