//! Scalarizing (aggregation) functions.
//!
//! | Function | Formula | Best for |
//! |----------|---------|----------|
//! | [`Tschebyscheff`] | `max(wᵢ · \|fᵢ − zᵢ\|)` | General purpose, non-convex fronts |
//! | [`WeightedSum`] | `Σ wᵢ · fᵢ` | Convex fronts only |
//! | [`PenaltyBoundaryIntersection`] | `d₁ + θ · d₂` | Tunable convergence pressure |
//!
//! # References
//!
//! - Zhang & Li (2007), "MOEA/D: A Multiobjective Evolutionary Algorithm
//!   Based on Decomposition"

use super::types::AggregationFunction;

/// Stand-in for zero weight components in [`Tschebyscheff`].
const ZERO_WEIGHT: f64 = 1e-4;

/// Weighted Tschebyscheff distance to the ideal point.
#[derive(Debug, Clone, Default)]
pub struct Tschebyscheff {
    ideal: Vec<f64>,
}

impl Tschebyscheff {
    /// Creates the function; the ideal point is set by the first `update`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AggregationFunction for Tschebyscheff {
    fn update(&mut self, ideal_point: &[f64]) {
        self.ideal.clear();
        self.ideal.extend_from_slice(ideal_point);
    }

    fn compute(&self, objectives: &[f64], weights: &[f64]) -> f64 {
        objectives
            .iter()
            .zip(weights)
            .enumerate()
            .map(|(i, (&f, &w))| {
                let z = self.ideal.get(i).copied().unwrap_or(0.0);
                let w = if w == 0.0 { ZERO_WEIGHT } else { w };
                w * (f - z).abs()
            })
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Linear weighted sum; ignores the ideal point.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedSum;

impl AggregationFunction for WeightedSum {
    fn update(&mut self, _ideal_point: &[f64]) {}

    fn compute(&self, objectives: &[f64], weights: &[f64]) -> f64 {
        objectives.iter().zip(weights).map(|(&f, &w)| w * f).sum()
    }
}

/// Penalty-based boundary intersection.
///
/// `d₁` is the projection of `f − z` onto the weight direction and `d₂` the
/// perpendicular distance to it.
#[derive(Debug, Clone)]
pub struct PenaltyBoundaryIntersection {
    theta: f64,
    ideal: Vec<f64>,
}

impl PenaltyBoundaryIntersection {
    /// Creates the function with penalty `theta` (commonly 5.0).
    pub fn new(theta: f64) -> Self {
        Self {
            theta,
            ideal: Vec::new(),
        }
    }

    /// Penalty parameter.
    pub fn theta(&self) -> f64 {
        self.theta
    }
}

impl Default for PenaltyBoundaryIntersection {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl AggregationFunction for PenaltyBoundaryIntersection {
    fn update(&mut self, ideal_point: &[f64]) {
        self.ideal.clear();
        self.ideal.extend_from_slice(ideal_point);
    }

    fn compute(&self, objectives: &[f64], weights: &[f64]) -> f64 {
        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return f64::INFINITY;
        }

        let diff: Vec<f64> = objectives
            .iter()
            .enumerate()
            .map(|(i, &f)| f - self.ideal.get(i).copied().unwrap_or(0.0))
            .collect();

        let d1 = diff.iter().zip(weights).map(|(d, w)| d * w).sum::<f64>() / norm;
        let d2 = diff
            .iter()
            .zip(weights)
            .map(|(d, w)| {
                let off = d - d1 * w / norm;
                off * off
            })
            .sum::<f64>()
            .sqrt();

        d1 + self.theta * d2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tschebyscheff() {
        let mut agg = Tschebyscheff::new();
        agg.update(&[0.0, 0.0]);
        assert!((agg.compute(&[1.0, 2.0], &[0.5, 0.5]) - 1.0).abs() < 1e-12);
        assert!((agg.compute(&[4.0, 1.0], &[0.25, 0.75]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tschebyscheff_zero_weight() {
        let mut agg = Tschebyscheff::new();
        agg.update(&[0.0, 0.0]);
        // Only the zero-weight component differs from the ideal point.
        let value = agg.compute(&[10.0, 0.0], &[0.0, 1.0]);
        assert!((value - 10.0 * ZERO_WEIGHT).abs() < 1e-12);
    }

    #[test]
    fn test_tschebyscheff_uses_ideal_point() {
        let mut agg = Tschebyscheff::new();
        agg.update(&[1.0, 1.0]);
        assert!(agg.compute(&[1.0, 1.0], &[0.5, 0.5]).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_sum() {
        let mut agg = WeightedSum;
        agg.update(&[100.0, 100.0]);
        assert!((agg.compute(&[2.0, 4.0], &[0.5, 0.5]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_pbi_on_direction() {
        let mut agg = PenaltyBoundaryIntersection::new(5.0);
        agg.update(&[0.0, 0.0]);
        // On the weight direction: d2 = 0, d1 = |f|
        let value = agg.compute(&[1.0, 1.0], &[0.5, 0.5]);
        assert!((value - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_pbi_penalizes_deviation() {
        let mut agg = PenaltyBoundaryIntersection::default();
        agg.update(&[0.0, 0.0]);
        let on_line = agg.compute(&[1.0, 1.0], &[0.5, 0.5]);
        let off_line = agg.compute(&[2.0, 0.0], &[0.5, 0.5]);
        // Same projection, but off_line is sqrt(2) away from the direction.
        assert!((off_line - on_line - 5.0 * 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_pbi_zero_weight_vector() {
        let agg = PenaltyBoundaryIntersection::default();
        assert!(agg.compute(&[1.0, 1.0], &[0.0, 0.0]).is_infinite());
    }
}
