//! Pareto dominance and non-dominated sorting.
//!
//! All objectives are **minimized**. Dominance is constraint-aware: a
//! feasible solution dominates an infeasible one, and between two infeasible
//! solutions the one with the smaller total violation dominates.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use crate::solution::Solution;

/// Outcome of a dominance test between a left and a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Pareto dominance between two objective vectors.
pub fn pareto_dominance(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Constraint-aware dominance between two solutions.
pub fn dominance(a: &Solution, b: &Solution) -> Dominance {
    let va = a.overall_constraint_violation();
    let vb = b.overall_constraint_violation();

    // Violations are non-positive: closer to zero is better.
    if va > vb {
        Dominance::Left
    } else if vb > va {
        Dominance::Right
    } else {
        pareto_dominance(&a.objectives, &b.objectives)
    }
}

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the front of the solution at the
/// same index. Rank 0 is the non-dominated set.
#[derive(Debug, Clone, Default)]
pub struct NondominatedSortResult {
    /// Front index for each solution (0 = non-dominated).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting.
///
/// Front `k` holds the solutions dominated only by members of fronts `< k`.
/// An empty population yields an empty result.
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of solutions
///
/// # Example
///
/// ```
/// use u_moea::preference::non_dominated_sort;
/// use u_moea::Solution;
///
/// let population = vec![
///     Solution::with_objectives(vec![], vec![1.0, 5.0]),
///     Solution::with_objectives(vec![], vec![3.0, 3.0]),
///     Solution::with_objectives(vec![], vec![4.0, 4.0]), // dominated by [1]
/// ];
///
/// let result = non_dominated_sort(&population);
/// assert_eq!(result.ranks, vec![0, 0, 1]);
/// assert_eq!(result.fronts, vec![vec![0, 1], vec![2]]);
/// ```
pub fn non_dominated_sort(population: &[Solution]) -> NondominatedSortResult {
    let n = population.len();
    if n == 0 {
        return NondominatedSortResult::default();
    }

    let mut domination_count = vec![0usize; n];
    let mut dominates: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance(&population[i], &population[j]) {
                Dominance::Left => {
                    dominates[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominates[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }
    }

    let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
    let mut fronts = Vec::new();
    while !current.is_empty() {
        let mut next = Vec::new();
        for &i in &current {
            for &j in &dominates[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len() + 1;
                    next.push(j);
                }
            }
        }
        next.sort_unstable();
        fronts.push(current);
        current = next;
    }

    NondominatedSortResult { ranks, fronts }
}
