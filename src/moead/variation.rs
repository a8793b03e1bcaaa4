//! Differential-evolution variation for real-coded problems.
//!
//! # References
//!
//! - Storn & Price (1997), "Differential Evolution – A Simple and Efficient
//!   Heuristic for Global Optimization over Continuous Spaces"
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous
//!   Search Space" (polynomial mutation)
//! - Li & Zhang (2009), "Multiobjective Optimization Problems With Complicated
//!   Pareto Sets, MOEA/D and NSGA-II"

use super::types::Variation;
use crate::error::{Error, Result};
use crate::solution::Solution;
use rand::Rng;

/// DE/rand/1/bin followed by polynomial mutation.
///
/// The mating pool is `[current, r1, r2]`. Each variable of the child is
/// `current + F · (r1 − r2)` with probability `CR` (and always for one
/// randomly chosen variable), otherwise copied from `current`. The trial
/// vector is clamped to the variable bounds, then polynomially mutated.
///
/// Paired with a neighbourhood [mating-pool selection](crate::selection)
/// that includes the current solution, `current` is the focal subproblem's
/// solution.
///
/// # Examples
///
/// ```
/// use u_moea::moead::{DifferentialEvolutionVariation, Variation};
/// use u_moea::random::create_rng;
/// use u_moea::Solution;
///
/// let de = DifferentialEvolutionVariation::new(vec![(0.0, 1.0); 3]).unwrap();
/// let a = Solution::with_objectives(vec![0.5, 0.5, 0.5], vec![0.0, 0.0]);
/// let b = Solution::with_objectives(vec![0.9, 0.1, 0.3], vec![0.0, 0.0]);
/// let c = Solution::with_objectives(vec![0.2, 0.4, 0.8], vec![0.0, 0.0]);
///
/// let mut rng = create_rng(42);
/// let child = &de.execute(&[&a, &b, &c], &mut rng)[0];
/// assert!(child.variables.iter().all(|&x| (0.0..=1.0).contains(&x)));
/// ```
#[derive(Debug, Clone)]
pub struct DifferentialEvolutionVariation {
    cr: f64,
    f: f64,
    mutation_probability: f64,
    distribution_index: f64,
    bounds: Vec<(f64, f64)>,
}

impl DifferentialEvolutionVariation {
    /// Creates the operator with `CR = 1.0`, `F = 0.5`, mutation probability
    /// `1/n` and distribution index 20.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `bounds` is empty or any
    /// lower bound exceeds its upper bound.
    pub fn new(bounds: Vec<(f64, f64)>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(Error::config("at least one variable bound is required"));
        }
        if let Some(i) = bounds.iter().position(|&(lo, hi)| lo.is_nan() || hi.is_nan() || lo > hi) {
            return Err(Error::config(format!(
                "variable {i}: lower bound exceeds upper bound"
            )));
        }
        let n = bounds.len();
        Ok(Self {
            cr: 1.0,
            f: 0.5,
            mutation_probability: 1.0 / n as f64,
            distribution_index: 20.0,
            bounds,
        })
    }

    /// Sets the crossover rate `CR`.
    pub fn with_cr(mut self, cr: f64) -> Self {
        self.cr = cr.clamp(0.0, 1.0);
        self
    }

    /// Sets the differential weight `F`.
    pub fn with_f(mut self, f: f64) -> Self {
        self.f = f.max(0.0);
        self
    }

    /// Sets the per-variable mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the polynomial-mutation distribution index.
    pub fn with_distribution_index(mut self, eta: f64) -> Self {
        self.distribution_index = eta.max(0.0);
        self
    }

    /// Crossover rate.
    pub fn cr(&self) -> f64 {
        self.cr
    }

    /// Differential weight.
    pub fn f(&self) -> f64 {
        self.f
    }

    /// Per-variable mutation probability.
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Polynomial-mutation distribution index.
    pub fn distribution_index(&self) -> f64 {
        self.distribution_index
    }

    /// Variable bounds.
    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }
}

impl Variation for DifferentialEvolutionVariation {
    fn required_parents(&self) -> usize {
        3
    }

    fn offspring_count(&self) -> usize {
        1
    }

    /// # Panics
    /// Panics if `parents` holds fewer than three solutions or their variable
    /// counts differ from the number of bounds.
    fn execute<R: Rng + ?Sized>(&self, parents: &[&Solution], rng: &mut R) -> Vec<Solution> {
        assert!(parents.len() >= 3, "DE/rand/1/bin needs three parents");
        let (current, r1, r2) = (parents[0], parents[1], parents[2]);
        let n = self.bounds.len();
        assert!(
            current.variables.len() == n && r1.variables.len() == n && r2.variables.len() == n,
            "parents must have one variable per bound"
        );

        let forced = rng.random_range(0..n);
        let mut variables: Vec<f64> = (0..n)
            .map(|k| {
                let (lo, hi) = self.bounds[k];
                let x = if k == forced || rng.random::<f64>() < self.cr {
                    current.variables[k] + self.f * (r1.variables[k] - r2.variables[k])
                } else {
                    current.variables[k]
                };
                x.clamp(lo, hi)
            })
            .collect();

        for (x, &(lo, hi)) in variables.iter_mut().zip(&self.bounds) {
            if rng.random::<f64>() < self.mutation_probability {
                *x = polynomial_mutation(rng, *x, lo, hi, self.distribution_index);
            }
        }

        vec![Solution::new(
            variables,
            current.num_objectives(),
            current.constraints.len(),
        )]
    }
}

/// Polynomial mutation of a single bounded value.
pub(crate) fn polynomial_mutation<R: Rng + ?Sized>(
    rng: &mut R,
    x: f64,
    low: f64,
    high: f64,
    eta: f64,
) -> f64 {
    let range = high - low;
    if range <= 0.0 {
        return low;
    }

    let u: f64 = rng.random();
    let delta1 = (x - low) / range;
    let delta2 = (high - x) / range;
    let pow = 1.0 / (eta + 1.0);

    let delta_q = if u <= 0.5 {
        let xy = 1.0 - delta1;
        let val = 2.0 * u + (1.0 - 2.0 * u) * xy.powf(eta + 1.0);
        val.powf(pow) - 1.0
    } else {
        let xy = 1.0 - delta2;
        let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * xy.powf(eta + 1.0);
        1.0 - val.powf(pow)
    };

    (x + delta_q * range).clamp(low, high)
}
