//! Comparators used to decide tournaments.

use crate::preference::{dominance, Dominance, RankingAndDensityPreference};
use crate::solution::Solution;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A fixed ordering over solutions; `Less` means the left operand is better.
pub type SolutionComparator = Arc<dyn Fn(&Solution, &Solution) -> Ordering + Send + Sync>;

/// Orders by constraint-aware Pareto dominance; incomparable solutions tie.
pub fn dominance_comparator() -> SolutionComparator {
    Arc::new(|a, b| match dominance(a, b) {
        Dominance::Left => Ordering::Less,
        Dominance::Right => Ordering::Greater,
        Dominance::Neither => Ordering::Equal,
    })
}

/// Orders by a single objective value, lower first.
pub fn objective_comparator(objective: usize) -> SolutionComparator {
    Arc::new(move |a, b| a.objectives[objective].total_cmp(&b.objectives[objective]))
}

/// The ordering a tournament uses to pick its winner.
#[derive(Clone)]
pub enum TournamentComparator {
    /// The same ordering on every call.
    Static(SolutionComparator),
    /// Rank-and-density order recomputed on the population of every call.
    Preference(RankingAndDensityPreference),
}

impl Default for TournamentComparator {
    fn default() -> Self {
        TournamentComparator::Preference(RankingAndDensityPreference::default())
    }
}

impl fmt::Debug for TournamentComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentComparator::Static(_) => f.write_str("Static(..)"),
            TournamentComparator::Preference(p) => f.debug_tuple("Preference").field(p).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominance_comparator() {
        let cmp = dominance_comparator();
        let a = Solution::with_objectives(vec![], vec![1.0, 1.0]);
        let b = Solution::with_objectives(vec![], vec![2.0, 2.0]);
        let c = Solution::with_objectives(vec![], vec![0.5, 3.0]);
        assert_eq!(cmp(&a, &b), Ordering::Less);
        assert_eq!(cmp(&b, &a), Ordering::Greater);
        assert_eq!(cmp(&a, &c), Ordering::Equal);
    }

    #[test]
    fn test_objective_comparator() {
        let cmp = objective_comparator(1);
        let a = Solution::with_objectives(vec![], vec![9.0, 1.0]);
        let b = Solution::with_objectives(vec![], vec![0.0, 2.0]);
        assert_eq!(cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_debug_format() {
        let s = format!("{:?}", TournamentComparator::Static(dominance_comparator()));
        assert_eq!(s, "Static(..)");
    }
}
