//! Ranking-and-density preference over a population.
//!
//! [`RankingAndDensityPreference::recompute`] stratifies a population into
//! Pareto fronts, scores every solution with a density estimator inside its
//! front, and returns a [`Preference`] snapshot. The snapshot is a plain
//! value: it holds no reference to the population it was computed from and
//! is only meaningful for that exact population.
//!
//! # Submodules
//!
//! - [`ranking`]: constraint-aware dominance and fast non-dominated sorting
//! - [`density`]: crowding distance and k-nearest-neighbour estimators

pub mod density;
pub mod ranking;

use crate::solution::Solution;
use std::cmp::Ordering;

pub use density::{crowding_distance, knn_distance, DensityEstimator};
pub use ranking::{
    dominance, non_dominated_sort, pareto_dominance, Dominance, NondominatedSortResult,
};

/// Ranking plus density preference, the NSGA-II style total preorder.
///
/// # Examples
///
/// ```
/// use u_moea::preference::RankingAndDensityPreference;
/// use u_moea::Solution;
/// use std::cmp::Ordering;
///
/// let population = vec![
///     Solution::with_objectives(vec![], vec![1.0, 1.0]),
///     Solution::with_objectives(vec![], vec![2.0, 2.0]),
/// ];
/// let preference = RankingAndDensityPreference::default().recompute(&population);
/// assert_eq!(preference.compare(0, 1), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankingAndDensityPreference {
    density: DensityEstimator,
}

impl RankingAndDensityPreference {
    /// Creates a preference using the given density estimator.
    pub fn new(density: DensityEstimator) -> Self {
        Self { density }
    }

    /// The density estimator applied inside each front.
    pub fn density_estimator(&self) -> DensityEstimator {
        self.density
    }

    /// Ranks `population` from scratch.
    pub fn recompute(&self, population: &[Solution]) -> Preference {
        let sorted = non_dominated_sort(population);
        let mut densities = vec![0.0; population.len()];

        for front in &sorted.fronts {
            let objectives: Vec<&[f64]> = front
                .iter()
                .map(|&i| population[i].objectives.as_slice())
                .collect();
            for (&i, d) in front.iter().zip(self.density.compute(&objectives)) {
                densities[i] = d;
            }
        }

        Preference {
            ranks: sorted.ranks,
            densities,
            num_fronts: sorted.fronts.len(),
        }
    }
}

/// Per-solution front rank and density for one population snapshot.
///
/// Solutions are addressed by their index in the population passed to
/// [`RankingAndDensityPreference::recompute`].
#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    ranks: Vec<usize>,
    densities: Vec<f64>,
    num_fronts: usize,
}

impl Preference {
    /// Number of solutions in the snapshot.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Number of fronts.
    pub fn num_fronts(&self) -> usize {
        self.num_fronts
    }

    /// Front rank of solution `i` (0 = non-dominated).
    pub fn rank(&self, i: usize) -> usize {
        self.ranks[i]
    }

    /// Density of solution `i` within its front.
    pub fn density(&self, i: usize) -> f64 {
        self.densities[i]
    }

    /// Orders two solutions, best first.
    ///
    /// `Less` means `a` is preferred: a lower front always wins; within a
    /// front the higher density wins.
    ///
    /// # Panics
    /// Panics if either index is outside the snapshot.
    pub fn compare(&self, a: usize, b: usize) -> Ordering {
        self.ranks[a]
            .cmp(&self.ranks[b])
            .then_with(|| self.densities[b].total_cmp(&self.densities[a]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use rand::Rng;

    fn pop(objectives: &[&[f64]]) -> Vec<Solution> {
        objectives
            .iter()
            .map(|o| Solution::with_objectives(vec![], o.to_vec()))
            .collect()
    }

    #[test]
    fn test_empty_population() {
        let p = RankingAndDensityPreference::default().recompute(&[]);
        assert!(p.is_empty());
        assert_eq!(p.num_fronts(), 0);
    }

    #[test]
    fn test_single_front_orders_by_density() {
        let population = pop(&[
            &[0.0, 10.0],
            &[1.0, 9.0],
            &[1.1, 8.9],
            &[6.0, 4.0],
            &[10.0, 0.0],
        ]);
        let p = RankingAndDensityPreference::default().recompute(&population);
        assert_eq!(p.num_fronts(), 1);
        for i in 0..5 {
            for j in 0..5 {
                let expected = p.density(j).total_cmp(&p.density(i));
                assert_eq!(p.compare(i, j), expected);
            }
        }
        assert_eq!(p.compare(3, 2), Ordering::Less);
    }

    #[test]
    fn test_rank_beats_density() {
        // [3] is dominated and isolated (boundary, infinite crowding in its
        // own front), yet it loses to every front-0 member.
        let population = pop(&[&[1.0, 5.0], &[3.0, 3.0], &[5.0, 1.0], &[6.0, 6.0]]);
        let p = RankingAndDensityPreference::default().recompute(&population);
        assert_eq!(p.rank(3), 1);
        assert!(p.density(3).is_infinite());
        assert!(p.density(1).is_finite());
        assert_eq!(p.compare(1, 3), Ordering::Less);
        assert_eq!(p.compare(3, 1), Ordering::Greater);
    }

    #[test]
    fn test_knn_density() {
        let population = pop(&[&[0.0, 3.0], &[1.0, 2.0], &[3.0, 0.0]]);
        let p = RankingAndDensityPreference::new(DensityEstimator::KNearestNeighbor { k: 1 })
            .recompute(&population);
        // [2] is farthest from its nearest neighbour
        assert_eq!(p.compare(2, 0), Ordering::Less);
        assert_eq!(p.compare(2, 1), Ordering::Less);
    }

    proptest! {
        #[test]
        fn prop_dominating_solution_always_preferred(seed in any::<u64>(), n in 2usize..40) {
            let mut rng = create_rng(seed);
            let population: Vec<Solution> = (0..n)
                .map(|_| {
                    let o = vec![
                        rng.random_range(0..5) as f64,
                        rng.random_range(0..5) as f64,
                    ];
                    Solution::with_objectives(vec![], o)
                })
                .collect();
            let p = RankingAndDensityPreference::default().recompute(&population);
            for i in 0..n {
                for j in 0..n {
                    if dominance(&population[i], &population[j]) == Dominance::Left {
                        prop_assert_eq!(p.compare(i, j), Ordering::Less);
                        prop_assert!(p.rank(i) < p.rank(j));
                    }
                }
            }
        }
    }
}
