//! Density estimators.
//!
//! A density estimator scores how isolated a solution is within its front.
//! For every estimator here a **larger** value means more isolated, which is
//! preferred when breaking ties between solutions of the same rank.

/// Which density estimator a [`RankingAndDensityPreference`](super::RankingAndDensityPreference)
/// applies inside each front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DensityEstimator {
    /// NSGA-II crowding distance.
    #[default]
    CrowdingDistance,

    /// Euclidean distance to the k-th nearest other member of the front.
    KNearestNeighbor {
        /// Which neighbour to measure against (k ≥ 1).
        k: usize,
    },
}

impl DensityEstimator {
    /// Scores every member of one front.
    pub fn compute<O: AsRef<[f64]>>(self, front: &[O]) -> Vec<f64> {
        match self {
            DensityEstimator::CrowdingDistance => crowding_distance(front),
            DensityEstimator::KNearestNeighbor { k } => knn_distance(front, k),
        }
    }
}

/// Crowding distance assignment.
///
/// Boundary solutions (min/max for any objective) receive `f64::INFINITY`;
/// interior solutions accumulate the normalized gap between their
/// neighbours along every objective.
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = number of solutions
///
/// # Example
///
/// ```
/// use u_moea::preference::crowding_distance;
///
/// let front = vec![vec![1.0, 5.0], vec![3.0, 3.0], vec![5.0, 1.0]];
/// let distances = crowding_distance(&front);
///
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!(distances[1].is_finite());
/// ```
pub fn crowding_distance<O: AsRef<[f64]>>(front: &[O]) -> Vec<f64> {
    let n = front.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = front[0].as_ref().len();
    let mut distances = vec![0.0f64; n];
    let mut indices: Vec<usize> = (0..n).collect();

    for obj in 0..m {
        let value = |i: usize| front[i].as_ref()[obj];
        indices.sort_by(|&a, &b| value(a).total_cmp(&value(b)));

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let range = value(indices[n - 1]) - value(indices[0]);
        if range > 0.0 {
            for w in indices.windows(3) {
                distances[w[1]] += (value(w[2]) - value(w[0])) / range;
            }
        }
    }

    distances
}

/// Distance from each solution to its k-th nearest neighbour in the front.
///
/// With fewer than `k` other members the farthest one is used; a lone
/// solution scores `f64::INFINITY`.
pub fn knn_distance<O: AsRef<[f64]>>(front: &[O], k: usize) -> Vec<f64> {
    let n = front.len();
    let k = k.max(1);

    (0..n)
        .map(|i| {
            let mut distances: Vec<f64> = (0..n)
                .filter(|&j| j != i)
                .map(|j| euclidean(front[i].as_ref(), front[j].as_ref()))
                .collect();
            if distances.is_empty() {
                return f64::INFINITY;
            }
            distances.sort_by(f64::total_cmp);
            distances[(k - 1).min(distances.len() - 1)]
        })
        .collect()
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
