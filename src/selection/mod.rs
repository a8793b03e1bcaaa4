//! Mating-pool selection.
//!
//! Selection decides, for every mating event, which solutions become
//! parents. Strategies never modify the population; they return references
//! (or indices) into it, possibly with repeats across tournaments.
//!
//! - [`NaryTournamentMatingPoolSelection`]: repeated n-ary tournaments
//! - [`PopulationAndNeighborhoodMatingPoolSelection`]: MOEA/D neighbourhood
//!   or whole-population sampling around a focal subproblem
//!
//! [`MatingPoolSelection`] is the closed set of strategies the MOEA/D loop
//! can drive.

mod comparator;
mod population_neighborhood;
mod tournament;

pub use comparator::{
    dominance_comparator, objective_comparator, SolutionComparator, TournamentComparator,
};
pub use population_neighborhood::{ParentSource, PopulationAndNeighborhoodMatingPoolSelection};
pub use tournament::NaryTournamentMatingPoolSelection;

use crate::error::Result;
use crate::solution::Solution;
use rand::Rng;

/// A mating-pool selection strategy.
#[derive(Debug, Clone)]
pub enum MatingPoolSelection {
    /// Repeated n-ary tournaments; the focal index is ignored.
    NaryTournament(NaryTournamentMatingPoolSelection),
    /// Neighbourhood-or-population sampling around the focal subproblem.
    PopulationAndNeighborhood(PopulationAndNeighborhoodMatingPoolSelection),
}

impl MatingPoolSelection {
    /// Number of parents every successful call returns.
    pub fn mating_pool_size(&self) -> usize {
        match self {
            MatingPoolSelection::NaryTournament(s) => s.mating_pool_size(),
            MatingPoolSelection::PopulationAndNeighborhood(s) => s.parents(),
        }
    }

    /// Selects a mating pool for subproblem `focal`.
    ///
    /// # Errors
    /// Propagates the error of the underlying strategy. A failed call never
    /// yields a truncated pool.
    pub fn select<'a, R: Rng + ?Sized>(
        &self,
        population: &'a [Solution],
        focal: usize,
        rng: &mut R,
    ) -> Result<Vec<&'a Solution>> {
        let indices = self.select_indices(population, focal, rng)?;
        Ok(indices.into_iter().map(|i| &population[i]).collect())
    }

    /// Selects a mating pool for subproblem `focal` as population indices.
    ///
    /// # Errors
    /// See [`select`](Self::select).
    pub fn select_indices<R: Rng + ?Sized>(
        &self,
        population: &[Solution],
        focal: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        self.select_indices_with_source(population, focal, rng)
            .map(|(parents, _)| parents)
    }

    /// Selects a mating pool and reports its candidate pool.
    ///
    /// The source is `None` for strategies that do not distinguish the
    /// neighbourhood from the population.
    ///
    /// # Errors
    /// See [`select`](Self::select).
    pub fn select_indices_with_source<R: Rng + ?Sized>(
        &self,
        population: &[Solution],
        focal: usize,
        rng: &mut R,
    ) -> Result<(Vec<usize>, Option<ParentSource>)> {
        match self {
            MatingPoolSelection::NaryTournament(s) => {
                Ok((s.select_indices(population, rng)?, None))
            }
            MatingPoolSelection::PopulationAndNeighborhood(s) => s
                .select_indices_with_source(population, focal, rng)
                .map(|(parents, source)| (parents, Some(source))),
        }
    }
}

impl From<NaryTournamentMatingPoolSelection> for MatingPoolSelection {
    fn from(s: NaryTournamentMatingPoolSelection) -> Self {
        MatingPoolSelection::NaryTournament(s)
    }
}

impl From<PopulationAndNeighborhoodMatingPoolSelection> for MatingPoolSelection {
    fn from(s: PopulationAndNeighborhoodMatingPoolSelection) -> Self {
        MatingPoolSelection::PopulationAndNeighborhood(s)
    }
}
