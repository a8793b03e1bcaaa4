//! MOEA/D configuration.
//!
//! [`MoeadConfig`] holds all parameters that control the decomposition loop.

use crate::error::{Error, Result};
use crate::neighborhood::WeightGeneration;

/// Configuration for MOEA/D.
///
/// Controls the number of subproblems, neighbourhood shape, parent sampling,
/// replacement pressure, and reproducibility.
///
/// # Defaults
///
/// ```
/// use u_moea::moead::MoeadConfig;
///
/// let config = MoeadConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.neighborhood_size, 20);
/// assert_eq!(config.max_replacements, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_moea::moead::MoeadConfig;
/// use u_moea::neighborhood::WeightGeneration;
///
/// let config = MoeadConfig::default()
///     .with_population_size(91)
///     .with_neighborhood_size(10)
///     .with_weight_generation(WeightGeneration::SimplexLattice { objectives: 3 })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoeadConfig {
    /// Number of subproblems `N`, equal to the population size.
    pub population_size: usize,

    /// Neighbourhood size `T` (1 ≤ T ≤ N).
    ///
    /// Small neighbourhoods concentrate mating and replacement locally.
    /// Typical range: 10–30% of `N`.
    pub neighborhood_size: usize,

    /// Probability `p` of drawing parents from the neighbourhood rather than
    /// the whole population (0.0–1.0).
    pub neighborhood_selection_probability: f64,

    /// Maximum number of neighbours one offspring may replace.
    ///
    /// Keeps a single good offspring from taking over a whole neighbourhood.
    pub max_replacements: usize,

    /// Whether the focal subproblem's solution is always the first parent.
    pub include_current_solution: bool,

    /// How the weight vectors are generated.
    pub weight_generation: WeightGeneration,

    /// Whether to evaluate the initial population in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for MoeadConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            neighborhood_size: 20,
            neighborhood_selection_probability: 0.9,
            max_replacements: 2,
            include_current_solution: true,
            weight_generation: WeightGeneration::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl MoeadConfig {
    /// Sets the number of subproblems.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the neighbourhood size.
    pub fn with_neighborhood_size(mut self, t: usize) -> Self {
        self.neighborhood_size = t;
        self
    }

    /// Sets the neighbourhood selection probability.
    pub fn with_neighborhood_selection_probability(mut self, p: f64) -> Self {
        self.neighborhood_selection_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the replacement cap.
    pub fn with_max_replacements(mut self, n: usize) -> Self {
        self.max_replacements = n;
        self
    }

    /// Sets whether the focal solution is always a parent.
    pub fn with_include_current_solution(mut self, include: bool) -> Self {
        self.include_current_solution = include;
        self
    }

    /// Sets the weight-vector generation scheme.
    pub fn with_weight_generation(mut self, generation: WeightGeneration) -> Self {
        self.weight_generation = generation;
        self
    }

    /// Enables or disables parallel initial evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::config("population_size must be at least 1"));
        }
        if self.neighborhood_size == 0 {
            return Err(Error::config("neighborhood_size must be at least 1"));
        }
        if self.neighborhood_size > self.population_size {
            return Err(Error::config(format!(
                "neighborhood_size {} exceeds population_size {}",
                self.neighborhood_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.neighborhood_selection_probability) {
            return Err(Error::config(
                "neighborhood_selection_probability must be in [0, 1]",
            ));
        }
        if self.max_replacements == 0 {
            return Err(Error::config("max_replacements must be at least 1"));
        }
        if let WeightGeneration::Explicit(weights) = &self.weight_generation {
            if weights.len() != self.population_size {
                return Err(Error::config(format!(
                    "{} explicit weight vectors for population_size {}",
                    weights.len(),
                    self.population_size
                )));
            }
        }
        Ok(())
    }
}
