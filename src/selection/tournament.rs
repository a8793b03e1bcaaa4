//! N-ary tournament mating-pool selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::comparator::{SolutionComparator, TournamentComparator};
use crate::error::{Error, Result};
use crate::preference::RankingAndDensityPreference;
use crate::solution::Solution;
use rand::seq::index;
use rand::Rng;
use std::cmp::Ordering;

/// Fills a mating pool with the winners of repeated tournaments.
///
/// Each tournament draws `tournament_size` **distinct** individuals
/// uniformly at random and keeps the best under the active comparator.
/// Tournaments are independent of each other, so the same individual can
/// win more than once. With a tournament size of 1 the comparator is never
/// consulted and selection is uniform.
///
/// When the comparator is [`TournamentComparator::Preference`], ranks and
/// densities are recomputed on the population passed to every
/// [`select`](Self::select) call.
///
/// # Examples
///
/// ```
/// use u_moea::random::create_rng;
/// use u_moea::selection::NaryTournamentMatingPoolSelection;
/// use u_moea::Solution;
///
/// let population = vec![
///     Solution::with_objectives(vec![], vec![1.0, 1.0]),
///     Solution::with_objectives(vec![], vec![2.0, 2.0]),
///     Solution::with_objectives(vec![], vec![3.0, 3.0]),
/// ];
/// let selection =
///     NaryTournamentMatingPoolSelection::with_preference(3, 4, Default::default()).unwrap();
/// let mut rng = create_rng(42);
///
/// // A full-size tournament always returns the dominating solution.
/// let pool = selection.select(&population, &mut rng).unwrap();
/// assert_eq!(pool.len(), 4);
/// assert!(pool.iter().all(|s| s.objectives == vec![1.0, 1.0]));
/// ```
#[derive(Debug, Clone)]
pub struct NaryTournamentMatingPoolSelection {
    tournament_size: usize,
    mating_pool_size: usize,
    comparator: TournamentComparator,
}

impl NaryTournamentMatingPoolSelection {
    /// Creates a tournament selection.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if either size is zero.
    pub fn new(
        tournament_size: usize,
        mating_pool_size: usize,
        comparator: TournamentComparator,
    ) -> Result<Self> {
        if tournament_size == 0 {
            return Err(Error::config("tournament size must be at least 1"));
        }
        if mating_pool_size == 0 {
            return Err(Error::config("mating pool size must be at least 1"));
        }
        Ok(Self {
            tournament_size,
            mating_pool_size,
            comparator,
        })
    }

    /// Tournament selection under a fixed comparator.
    ///
    /// # Errors
    /// See [`new`](Self::new).
    pub fn with_comparator(
        tournament_size: usize,
        mating_pool_size: usize,
        comparator: SolutionComparator,
    ) -> Result<Self> {
        Self::new(
            tournament_size,
            mating_pool_size,
            TournamentComparator::Static(comparator),
        )
    }

    /// Tournament selection under a per-call ranking-and-density preference.
    ///
    /// # Errors
    /// See [`new`](Self::new).
    pub fn with_preference(
        tournament_size: usize,
        mating_pool_size: usize,
        preference: RankingAndDensityPreference,
    ) -> Result<Self> {
        Self::new(
            tournament_size,
            mating_pool_size,
            TournamentComparator::Preference(preference),
        )
    }

    /// Individuals drawn per tournament.
    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Number of winners collected per call.
    pub fn mating_pool_size(&self) -> usize {
        self.mating_pool_size
    }

    /// The comparator deciding each tournament.
    pub fn comparator(&self) -> &TournamentComparator {
        &self.comparator
    }

    /// Selects a mating pool of references into `population`.
    ///
    /// # Errors
    /// See [`select_indices`](Self::select_indices).
    pub fn select<'a, R: Rng + ?Sized>(
        &self,
        population: &'a [Solution],
        rng: &mut R,
    ) -> Result<Vec<&'a Solution>> {
        let indices = self.select_indices(population, rng)?;
        Ok(indices.into_iter().map(|i| &population[i]).collect())
    }

    /// Selects a mating pool as population indices.
    ///
    /// # Errors
    /// Returns [`Error::EmptyPopulation`] for an empty population and
    /// [`Error::InsufficientCandidates`] if the population is smaller than
    /// the tournament.
    pub fn select_indices<R: Rng + ?Sized>(
        &self,
        population: &[Solution],
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        let n = population.len();
        if n == 0 {
            return Err(Error::EmptyPopulation);
        }
        if n < self.tournament_size {
            return Err(Error::InsufficientCandidates {
                required: self.tournament_size,
                available: n,
            });
        }

        let compare: Box<dyn Fn(usize, usize) -> Ordering + '_> = match &self.comparator {
            TournamentComparator::Static(cmp) => {
                Box::new(move |a, b| cmp(&population[a], &population[b]))
            }
            TournamentComparator::Preference(preference) => {
                let snapshot = preference.recompute(population);
                Box::new(move |a, b| snapshot.compare(a, b))
            }
        };

        let pool = (0..self.mating_pool_size)
            .map(|_| {
                let mut contestants = index::sample(&mut *rng, n, self.tournament_size).into_iter();
                let first = contestants.next().unwrap_or(0);
                contestants.fold(first, |best, idx| {
                    if compare(idx, best) == Ordering::Less {
                        idx
                    } else {
                        best
                    }
                })
            })
            .collect();

        Ok(pool)
    }
}
