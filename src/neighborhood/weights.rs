//! Weight-vector generation schemes.
//!
//! Every scheme produces vectors on the unit simplex: non-negative
//! components summing to one.
//!
//! # References
//!
//! - Das & Dennis (1998), "Normal-Boundary Intersection: A New Method for
//!   Generating the Pareto Surface in Nonlinear Multicriteria Optimization
//!   Problems"
//! - Zhang & Li (2007), "MOEA/D: A Multiobjective Evolutionary Algorithm
//!   Based on Decomposition"

use crate::error::{Error, Result};
use rand::Rng;
use std::path::Path;

/// Tolerance on `sum(w) == 1` for user-supplied vectors.
const SIMPLEX_TOLERANCE: f64 = 1e-3;

/// How the weight vectors of a [`WeightVectorNeighborhood`](super::WeightVectorNeighborhood)
/// are produced.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightGeneration {
    /// Two objectives, evenly spaced: `w_i = (i/(N-1), 1 - i/(N-1))`.
    #[default]
    Uniform2D,

    /// Das–Dennis simplex lattice for `objectives` dimensions.
    ///
    /// The lattice must contain exactly `N` points, i.e. `N = C(H+m-1, m-1)`
    /// for some number of divisions `H`.
    SimplexLattice {
        /// Objective-space dimensionality `m`.
        objectives: usize,
    },

    /// Uniformly random points on the simplex.
    Random {
        /// Objective-space dimensionality `m`.
        objectives: usize,
    },

    /// Caller-supplied vectors, e.g. loaded with [`read_weight_file`].
    Explicit(Vec<Vec<f64>>),
}

impl WeightGeneration {
    /// Produces `n` weight vectors.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if the scheme cannot produce
    /// `n` distinct vectors on the simplex.
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<Vec<f64>>> {
        if n == 0 {
            return Err(Error::config("population size must be at least 1"));
        }

        let weights = match self {
            WeightGeneration::Uniform2D => uniform_2d(n),
            WeightGeneration::SimplexLattice { objectives } => simplex_lattice(*objectives, n)?,
            WeightGeneration::Random { objectives } => random_simplex(*objectives, n, rng)?,
            WeightGeneration::Explicit(weights) => normalize_explicit(weights, n)?,
        };

        ensure_distinct(&weights)?;
        Ok(weights)
    }

    /// Objective-space dimensionality of the generated vectors, when known
    /// up front.
    pub fn objectives(&self) -> Option<usize> {
        match self {
            WeightGeneration::Uniform2D => Some(2),
            WeightGeneration::SimplexLattice { objectives }
            | WeightGeneration::Random { objectives } => Some(*objectives),
            WeightGeneration::Explicit(weights) => weights.first().map(Vec::len),
        }
    }
}

/// Evenly spaced two-objective weights.
pub(crate) fn uniform_weights_2d(n: usize) -> Result<Vec<Vec<f64>>> {
    if n == 0 {
        return Err(Error::config("population size must be at least 1"));
    }
    Ok(uniform_2d(n))
}

/// Normalizes caller-supplied weights and checks they are distinct points
/// on the simplex.
pub(crate) fn validated(weights: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    if weights.is_empty() {
        return Err(Error::config("at least one weight vector is required"));
    }
    let normalized = normalize_explicit(weights, weights.len())?;
    ensure_distinct(&normalized)?;
    Ok(normalized)
}

fn uniform_2d(n: usize) -> Vec<Vec<f64>> {
    if n == 1 {
        return vec![vec![0.5, 0.5]];
    }
    (0..n)
        .map(|i| {
            let a = i as f64 / (n - 1) as f64;
            vec![a, 1.0 - a]
        })
        .collect()
}

/// Number of lattice points `C(h + m - 1, m - 1)`, saturating on overflow.
fn lattice_size(m: usize, h: usize) -> usize {
    let k = m - 1;
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (h + k - i) as u128 / (i + 1) as u128;
        if result > usize::MAX as u128 {
            return usize::MAX;
        }
    }
    result as usize
}

fn simplex_lattice(m: usize, n: usize) -> Result<Vec<Vec<f64>>> {
    if m < 2 {
        return Err(Error::config("simplex lattice needs at least 2 objectives"));
    }
    if n == 1 {
        return Ok(vec![vec![1.0 / m as f64; m]]);
    }

    let mut h = 1;
    while lattice_size(m, h) < n {
        h += 1;
    }
    if lattice_size(m, h) != n {
        return Err(Error::config(format!(
            "no simplex lattice with {m} objectives has exactly {n} points \
             (nearest: {} with H={}, {} with H={h})",
            lattice_size(m, h - 1),
            h - 1,
            lattice_size(m, h),
        )));
    }

    let mut points = Vec::with_capacity(n);
    let mut current = vec![0usize; m];
    lattice_recursive(m, h, 0, h, &mut current, &mut points);
    Ok(points)
}

fn lattice_recursive(
    m: usize,
    h: usize,
    depth: usize,
    remaining: usize,
    current: &mut [usize],
    points: &mut Vec<Vec<f64>>,
) {
    if depth == m - 1 {
        current[depth] = remaining;
        points.push(current.iter().map(|&c| c as f64 / h as f64).collect());
        return;
    }
    for i in 0..=remaining {
        current[depth] = i;
        lattice_recursive(m, h, depth + 1, remaining - i, current, points);
    }
}

/// Normalized exponential samples are uniform on the simplex.
fn random_simplex<R: Rng + ?Sized>(m: usize, n: usize, rng: &mut R) -> Result<Vec<Vec<f64>>> {
    if m < 2 {
        return Err(Error::config("random weights need at least 2 objectives"));
    }
    let mut weights = Vec::with_capacity(n);
    while weights.len() < n {
        let raw: Vec<f64> = (0..m)
            .map(|_| -(1.0 - rng.random::<f64>()).ln())
            .collect();
        let sum: f64 = raw.iter().sum();
        if sum > 0.0 {
            weights.push(raw.into_iter().map(|x| x / sum).collect());
        }
    }
    Ok(weights)
}

fn normalize_explicit(weights: &[Vec<f64>], n: usize) -> Result<Vec<Vec<f64>>> {
    if weights.len() != n {
        return Err(Error::config(format!(
            "expected {n} weight vectors, got {}",
            weights.len()
        )));
    }
    let m = weights[0].len();
    if m == 0 {
        return Err(Error::config("weight vectors must not be empty"));
    }

    weights
        .iter()
        .enumerate()
        .map(|(i, w)| {
            if w.len() != m {
                return Err(Error::config(format!(
                    "weight vector {i} has {} components, expected {m}",
                    w.len()
                )));
            }
            if w.iter().any(|&x| !x.is_finite() || x < 0.0) {
                return Err(Error::config(format!(
                    "weight vector {i} has a negative or non-finite component"
                )));
            }
            let sum: f64 = w.iter().sum();
            if (sum - 1.0).abs() > SIMPLEX_TOLERANCE {
                return Err(Error::config(format!(
                    "weight vector {i} sums to {sum}, not 1"
                )));
            }
            Ok(w.iter().map(|&x| x / sum).collect())
        })
        .collect()
}

fn ensure_distinct(weights: &[Vec<f64>]) -> Result<()> {
    for i in 0..weights.len() {
        for j in (i + 1)..weights.len() {
            if weights[i] == weights[j] {
                return Err(Error::config(format!(
                    "weight vectors {i} and {j} are identical"
                )));
            }
        }
    }
    Ok(())
}

/// Parses whitespace-separated weight vectors, one per line.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
/// Returns [`Error::InvalidWeightFile`] on unparsable numbers.
pub fn parse_weights(text: &str) -> Result<Vec<Vec<f64>>> {
    let mut weights = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|e| Error::InvalidWeightFile {
                    line: line_idx + 1,
                    reason: format!("{token:?}: {e}"),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        weights.push(row);
    }
    Ok(weights)
}

/// Reads a weight-vector file (see [`parse_weights`] for the format).
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read, or
/// [`Error::InvalidWeightFile`] if it cannot be parsed.
pub fn read_weight_file(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>> {
    let text = std::fs::read_to_string(path)?;
    parse_weights(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn assert_on_simplex(weights: &[Vec<f64>]) {
        for w in weights {
            assert!(w.iter().all(|&x| x >= 0.0), "negative component in {w:?}");
            let sum: f64 = w.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{w:?} sums to {sum}");
        }
    }

    #[test]
    fn test_uniform_2d() {
        let mut rng = create_rng(0);
        let w = WeightGeneration::Uniform2D.generate(5, &mut rng).unwrap();
        assert_eq!(w.len(), 5);
        assert_eq!(w[0], vec![0.0, 1.0]);
        assert_eq!(w[4], vec![1.0, 0.0]);
        assert!((w[2][0] - 0.5).abs() < 1e-12);
        assert_on_simplex(&w);
    }

    #[test]
    fn test_uniform_2d_single() {
        let mut rng = create_rng(0);
        let w = WeightGeneration::Uniform2D.generate(1, &mut rng).unwrap();
        assert_eq!(w, vec![vec![0.5, 0.5]]);
    }

    #[test]
    fn test_lattice_three_objectives() {
        // H=12, m=3 → C(14, 2) = 91 points
        let mut rng = create_rng(0);
        let w = WeightGeneration::SimplexLattice { objectives: 3 }
            .generate(91, &mut rng)
            .unwrap();
        assert_eq!(w.len(), 91);
        assert_on_simplex(&w);
    }

    #[test]
    fn test_lattice_size_mismatch() {
        let mut rng = create_rng(0);
        let err = WeightGeneration::SimplexLattice { objectives: 3 }
            .generate(90, &mut rng)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_lattice_size_values() {
        assert_eq!(lattice_size(2, 99), 100);
        assert_eq!(lattice_size(3, 12), 91);
        assert_eq!(lattice_size(3, 13), 105);
    }

    #[test]
    fn test_random_on_simplex() {
        let mut rng = create_rng(9);
        let w = WeightGeneration::Random { objectives: 4 }
            .generate(50, &mut rng)
            .unwrap();
        assert_eq!(w.len(), 50);
        assert_on_simplex(&w);
    }

    #[test]
    fn test_explicit_validation() {
        let mut rng = create_rng(0);
        let ok = WeightGeneration::Explicit(vec![vec![0.25, 0.75], vec![0.75, 0.25]]);
        assert!(ok.generate(2, &mut rng).is_ok());

        let wrong_count = WeightGeneration::Explicit(vec![vec![0.5, 0.5]]);
        assert!(wrong_count.generate(2, &mut rng).is_err());

        let negative = WeightGeneration::Explicit(vec![vec![1.5, -0.5], vec![0.5, 0.5]]);
        assert!(negative.generate(2, &mut rng).is_err());

        let not_normalized = WeightGeneration::Explicit(vec![vec![0.5, 0.6], vec![0.5, 0.5]]);
        assert!(not_normalized.generate(2, &mut rng).is_err());

        let duplicate = WeightGeneration::Explicit(vec![vec![0.5, 0.5], vec![0.5, 0.5]]);
        assert!(duplicate.generate(2, &mut rng).is_err());
    }

    #[test]
    fn test_parse_weights() {
        let text = "# two objectives\n0.0 1.0\n\n0.5  0.5\n1.0\t0.0\n";
        let w = parse_weights(text).unwrap();
        assert_eq!(w, vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]]);
    }

    #[test]
    fn test_parse_weights_bad_token() {
        let err = parse_weights("0.5 0.5\n0.5 abc\n").unwrap_err();
        match err {
            Error::InvalidWeightFile { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_weight_file("/nonexistent/weights.dat").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
