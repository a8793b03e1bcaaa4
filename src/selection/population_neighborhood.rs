//! Neighbourhood-or-population parent sampling for MOEA/D.
//!
//! # References
//!
//! - Li & Zhang (2009), "Multiobjective Optimization Problems With Complicated
//!   Pareto Sets, MOEA/D and NSGA-II"

use crate::error::{Error, Result};
use crate::neighborhood::WeightVectorNeighborhood;
use crate::solution::Solution;
use rand::seq::index;
use rand::Rng;
use std::sync::Arc;

/// Where the parents of one mating event were sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentSource {
    /// The focal subproblem's weight-vector neighbourhood.
    Neighborhood,
    /// The whole population.
    Population,
}

/// Samples parents from either a subproblem's neighbourhood or the whole
/// population.
///
/// Each call draws `u ∈ [0, 1)`; if `u < neighborhood_probability` the
/// candidates are the focal subproblem's neighbours, otherwise every
/// population index. Parents are drawn uniformly and without repeated
/// indices within one call. When `include_current` is set, the focal
/// solution is parent 0 and is excluded from the sampled remainder.
///
/// The neighbourhood is shared with the algorithm loop, which uses the same
/// table for replacement.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_moea::neighborhood::WeightVectorNeighborhood;
/// use u_moea::random::create_rng;
/// use u_moea::selection::PopulationAndNeighborhoodMatingPoolSelection;
/// use u_moea::Solution;
///
/// let hood = Arc::new(WeightVectorNeighborhood::new(10, 3).unwrap());
/// let population: Vec<Solution> = (0..10)
///     .map(|i| Solution::with_objectives(vec![i as f64], vec![0.0, 0.0]))
///     .collect();
///
/// let selection = PopulationAndNeighborhoodMatingPoolSelection::new(3, hood, 1.0, true).unwrap();
/// let mut rng = create_rng(42);
/// let parents = selection.select_indices(&population, 0, &mut rng).unwrap();
///
/// assert_eq!(parents.len(), 3);
/// assert_eq!(parents[0], 0);
/// assert!(parents[1..].iter().all(|&i| i == 1 || i == 2));
/// ```
#[derive(Debug, Clone)]
pub struct PopulationAndNeighborhoodMatingPoolSelection {
    parents: usize,
    neighborhood: Arc<WeightVectorNeighborhood>,
    neighborhood_probability: f64,
    include_current: bool,
}

impl PopulationAndNeighborhoodMatingPoolSelection {
    /// Creates the selection.
    ///
    /// `parents` is the total mating-pool size, including the focal solution
    /// when `include_current` is set.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `parents` is zero or the
    /// probability lies outside `[0, 1]`.
    pub fn new(
        parents: usize,
        neighborhood: Arc<WeightVectorNeighborhood>,
        neighborhood_probability: f64,
        include_current: bool,
    ) -> Result<Self> {
        if parents == 0 {
            return Err(Error::config("number of parents must be at least 1"));
        }
        if !(0.0..=1.0).contains(&neighborhood_probability) {
            return Err(Error::config(format!(
                "neighborhood selection probability {neighborhood_probability} is outside [0, 1]"
            )));
        }
        Ok(Self {
            parents,
            neighborhood,
            neighborhood_probability,
            include_current,
        })
    }

    /// Total mating-pool size.
    pub fn parents(&self) -> usize {
        self.parents
    }

    /// Probability of sampling from the neighbourhood.
    pub fn neighborhood_probability(&self) -> f64 {
        self.neighborhood_probability
    }

    /// Whether the focal solution is always parent 0.
    pub fn include_current(&self) -> bool {
        self.include_current
    }

    /// The shared neighbourhood structure.
    pub fn neighborhood(&self) -> &Arc<WeightVectorNeighborhood> {
        &self.neighborhood
    }

    /// Draws the candidate source for one mating event.
    pub fn choose_source<R: Rng + ?Sized>(&self, rng: &mut R) -> ParentSource {
        if rng.random::<f64>() < self.neighborhood_probability {
            ParentSource::Neighborhood
        } else {
            ParentSource::Population
        }
    }

    /// Selects the parents of subproblem `focal` as references into
    /// `population`.
    ///
    /// # Errors
    /// See [`select_indices`](Self::select_indices).
    pub fn select<'a, R: Rng + ?Sized>(
        &self,
        population: &'a [Solution],
        focal: usize,
        rng: &mut R,
    ) -> Result<Vec<&'a Solution>> {
        let indices = self.select_indices(population, focal, rng)?;
        Ok(indices.into_iter().map(|i| &population[i]).collect())
    }

    /// Selects the parents of subproblem `focal` as population indices.
    ///
    /// # Errors
    /// - [`Error::EmptyPopulation`] if `population` is empty
    /// - [`Error::PopulationSizeMismatch`] if it does not hold one solution
    ///   per subproblem
    /// - [`Error::IndexOutOfRange`] if `focal` is not a subproblem
    /// - [`Error::InsufficientCandidates`] if the chosen candidate pool is
    ///   smaller than the number of parents still required
    pub fn select_indices<R: Rng + ?Sized>(
        &self,
        population: &[Solution],
        focal: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        self.select_indices_with_source(population, focal, rng)
            .map(|(parents, _)| parents)
    }

    /// Like [`select_indices`](Self::select_indices), also reporting which
    /// candidate pool the parents were drawn from.
    ///
    /// # Errors
    /// See [`select_indices`](Self::select_indices).
    pub fn select_indices_with_source<R: Rng + ?Sized>(
        &self,
        population: &[Solution],
        focal: usize,
        rng: &mut R,
    ) -> Result<(Vec<usize>, ParentSource)> {
        self.check(population.len(), focal)?;
        let source = self.choose_source(rng);
        let parents = self.sample_from(source, population.len(), focal, rng)?;
        Ok((parents, source))
    }

    /// Samples parents from an already chosen source.
    ///
    /// # Errors
    /// See [`select_indices`](Self::select_indices).
    pub fn sample_from<R: Rng + ?Sized>(
        &self,
        source: ParentSource,
        population_len: usize,
        focal: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        self.check(population_len, focal)?;

        let mut candidates: Vec<usize> = match source {
            ParentSource::Neighborhood => self.neighborhood.neighborhood(focal).to_vec(),
            ParentSource::Population => (0..population_len).collect(),
        };

        let mut parents = Vec::with_capacity(self.parents);
        if self.include_current {
            candidates.retain(|&i| i != focal);
            parents.push(focal);
        }

        let required = self.parents - parents.len();
        if candidates.len() < required {
            return Err(Error::InsufficientCandidates {
                required,
                available: candidates.len(),
            });
        }

        parents.extend(
            index::sample(rng, candidates.len(), required)
                .into_iter()
                .map(|k| candidates[k]),
        );
        Ok(parents)
    }

    fn check(&self, population_len: usize, focal: usize) -> Result<()> {
        if population_len == 0 {
            return Err(Error::EmptyPopulation);
        }
        self.neighborhood.check_population(population_len)?;
        if focal >= population_len {
            return Err(Error::IndexOutOfRange {
                index: focal,
                len: population_len,
            });
        }
        Ok(())
    }
}
