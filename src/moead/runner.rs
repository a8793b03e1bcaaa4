//! MOEA/D loop execution.
//!
//! [`MoeadRunner`] drives the decomposition loop, one subproblem at a time:
//! select → vary → evaluate → update ideal point → replace neighbours → repeat.
//!
//! Subproblems are visited in a fresh random order on every pass. Replacement
//! writes happen in place, so later subproblems of a pass already see the
//! offspring accepted by earlier ones.
//!
//! An offspring competes for the slots of the pool its parents came from:
//! the focal neighbourhood, or the whole population when the parents were
//! sampled globally. Slots are offered in random order and at most
//! `max_replacements` of them are taken.

use super::config::MoeadConfig;
use super::types::{
    AggregationFunction, AlgorithmStatus, Phase, Problem, TerminationCriterion, Variation,
};
use crate::error::{Error, Result};
use crate::neighborhood::WeightVectorNeighborhood;
use crate::random::rng_from_seed;
use crate::selection::{
    MatingPoolSelection, ParentSource, PopulationAndNeighborhoodMatingPoolSelection,
};
use crate::sequence::{IntegerPermutationGenerator, SequenceGenerator};
use crate::solution::Solution;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// Result of a MOEA/D run.
#[derive(Debug, Clone)]
pub struct MoeadResult {
    /// Final population, one solution per subproblem.
    pub population: Vec<Solution>,

    /// Component-wise best objective values seen during the run.
    pub ideal_point: Vec<f64>,

    /// Total number of evaluations, including the initial population.
    pub evaluations: usize,

    /// Completed passes over all subproblems.
    pub passes: usize,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes MOEA/D.
///
/// Construction performs the initialization phase: weight vectors and
/// neighbourhoods are built and the initial population is created and
/// evaluated. [`run`](Self::run) then steps until the termination criterion
/// is met; [`step`](Self::step) advances a single subproblem for callers
/// that drive the loop themselves.
///
/// All randomness (weights, traversal order, selection, variation) is drawn
/// from one generator seeded from [`MoeadConfig::seed`].
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let variation = DifferentialEvolutionVariation::new(problem.bounds())?;
/// let config = MoeadConfig::default().with_seed(42);
/// let result = MoeadRunner::new(&problem, variation, Tschebyscheff::new(), &config)?
///     .run(&TerminationByEvaluations::new(150_000))?;
/// println!("ideal point: {:?}", result.ideal_point);
/// ```
pub struct MoeadRunner<'p, P, V, A> {
    problem: &'p P,
    variation: V,
    aggregation: A,
    neighborhood: Arc<WeightVectorNeighborhood>,
    selection: MatingPoolSelection,
    sequence: IntegerPermutationGenerator,
    rng: StdRng,
    population: Vec<Solution>,
    ideal_point: Vec<f64>,
    max_replacements: usize,
    evaluations: usize,
    passes: usize,
    phase: Phase,
    start: Instant,
}

impl<'p, P, V, A> MoeadRunner<'p, P, V, A>
where
    P: Problem,
    V: Variation,
    A: AggregationFunction,
{
    /// Initializes a run.
    ///
    /// Parents are sampled with [`PopulationAndNeighborhoodMatingPoolSelection`]
    /// sized to the variation's arity; use
    /// [`with_selection`](Self::with_selection) for another strategy.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if the configuration is
    /// invalid, its weight vectors do not match the problem's objective
    /// count, the variation needs no parents, or the neighbourhood or
    /// population is too small to supply them.
    pub fn new(
        problem: &'p P,
        variation: V,
        mut aggregation: A,
        config: &MoeadConfig,
    ) -> Result<Self> {
        config.validate()?;

        let m = problem.num_objectives();
        if let Some(dims) = config.weight_generation.objectives() {
            if dims != m {
                return Err(Error::config(format!(
                    "weight vectors have {dims} components but the problem has {m} objectives"
                )));
            }
        }
        let parents = variation.required_parents();
        if parents == 0 {
            return Err(Error::config("variation must require at least one parent"));
        }
        if config.population_size < parents {
            return Err(Error::config(format!(
                "population_size {} cannot supply {parents} distinct parents",
                config.population_size
            )));
        }
        if config.neighborhood_selection_probability > 0.0 && config.neighborhood_size < parents {
            return Err(Error::config(format!(
                "neighborhood_size {} cannot supply {parents} distinct parents",
                config.neighborhood_size
            )));
        }

        let mut rng = rng_from_seed(config.seed);
        let n = config.population_size;

        let neighborhood = Arc::new(WeightVectorNeighborhood::generate(
            n,
            config.neighborhood_size,
            &config.weight_generation,
            &mut rng,
        )?);
        let selection = PopulationAndNeighborhoodMatingPoolSelection::new(
            variation.required_parents(),
            Arc::clone(&neighborhood),
            config.neighborhood_selection_probability,
            config.include_current_solution,
        )?
        .into();
        let sequence = IntegerPermutationGenerator::new(n, &mut rng)?;

        let start = Instant::now();
        let mut population: Vec<Solution> =
            (0..n).map(|_| problem.create_solution(&mut rng)).collect();
        evaluate_population(problem, &mut population, config.parallel);

        let ideal_point = initial_ideal_point(&population, m);
        aggregation.update(&ideal_point);

        debug!(
            subproblems = n,
            neighborhood_size = config.neighborhood_size,
            objectives = m,
            "initialized MOEA/D population"
        );

        Ok(Self {
            problem,
            variation,
            aggregation,
            neighborhood,
            selection,
            sequence,
            rng,
            population,
            ideal_point,
            max_replacements: config.max_replacements,
            evaluations: n,
            passes: 0,
            phase: Phase::GeneratingOffspring,
            start,
        })
    }

    /// Replaces the mating-pool selection strategy.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if the strategy's pool size
    /// differs from the variation's arity.
    pub fn with_selection(mut self, selection: MatingPoolSelection) -> Result<Self> {
        let required = self.variation.required_parents();
        if selection.mating_pool_size() != required {
            return Err(Error::config(format!(
                "selection yields {} parents but the variation requires {required}",
                selection.mating_pool_size()
            )));
        }
        self.selection = selection;
        Ok(self)
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current population, indexed by subproblem.
    pub fn population(&self) -> &[Solution] {
        &self.population
    }

    /// Current ideal point.
    pub fn ideal_point(&self) -> &[f64] {
        &self.ideal_point
    }

    /// The neighbourhood structure used for mating and replacement.
    pub fn neighborhood(&self) -> &WeightVectorNeighborhood {
        &self.neighborhood
    }

    /// The active selection strategy.
    pub fn selection(&self) -> &MatingPoolSelection {
        &self.selection
    }

    /// Progress counters as seen by termination criteria.
    pub fn status(&self) -> AlgorithmStatus {
        AlgorithmStatus {
            evaluations: self.evaluations,
            passes: self.passes,
            elapsed: self.start.elapsed(),
        }
    }

    /// Advances one subproblem of the current pass.
    ///
    /// # Errors
    /// Propagates selection errors; a failed step leaves the population
    /// untouched. Returns [`Error::InvalidConfiguration`] once the runner
    /// has terminated and [`Error::SequenceExhausted`] if the subproblem
    /// sequence was drained without a restart.
    pub fn step(&mut self) -> Result<()> {
        if self.phase == Phase::Terminated {
            return Err(Error::config("runner has already terminated"));
        }
        let focal = self.sequence.next_index().ok_or(Error::SequenceExhausted)?;

        self.phase = Phase::GeneratingOffspring;
        let (indices, source) = self.selection.select_indices_with_source(
            &self.population,
            focal,
            &mut self.rng,
        )?;
        let mut offspring = {
            let parents: Vec<&Solution> = indices.iter().map(|&i| &self.population[i]).collect();
            self.variation.execute(&parents, &mut self.rng)
        };
        let scope = source.unwrap_or(ParentSource::Neighborhood);

        self.phase = Phase::Evaluating;
        for child in offspring.iter_mut() {
            self.problem.evaluate(child);
        }
        self.evaluations += offspring.len();

        self.phase = Phase::Replacing;
        for child in &offspring {
            self.update_ideal_point(child);
            self.replace_neighbors(focal, child, scope);
        }

        if !self.sequence.has_next() {
            self.passes += 1;
            debug!(
                pass = self.passes,
                evaluations = self.evaluations,
                ideal_point = ?self.ideal_point,
                "completed subproblem pass"
            );
            self.sequence.restart(&mut self.rng);
        }

        self.phase = Phase::GeneratingOffspring;
        Ok(())
    }

    /// Runs until `termination` is met.
    ///
    /// # Errors
    /// See [`step`](Self::step).
    pub fn run<T>(self, termination: &T) -> Result<MoeadResult>
    where
        T: TerminationCriterion + ?Sized,
    {
        self.run_with_cancel(termination, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// The flag and the termination criterion are both polled before every
    /// subproblem step, so the run stops mid-pass as soon as either fires.
    ///
    /// # Errors
    /// See [`step`](Self::step).
    pub fn run_with_cancel<T>(
        mut self,
        termination: &T,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<MoeadResult>
    where
        T: TerminationCriterion + ?Sized,
    {
        let mut cancelled = false;
        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if termination.is_met(&self.status()) {
                break;
            }
            self.step()?;
        }

        self.phase = Phase::Terminated;
        let elapsed = self.start.elapsed();
        info!(
            evaluations = self.evaluations,
            passes = self.passes,
            elapsed_ms = elapsed.as_millis() as u64,
            cancelled,
            "MOEA/D terminated"
        );

        Ok(MoeadResult {
            population: self.population,
            ideal_point: self.ideal_point,
            evaluations: self.evaluations,
            passes: self.passes,
            elapsed,
            cancelled,
        })
    }

    fn update_ideal_point(&mut self, solution: &Solution) {
        let mut improved = false;
        for (z, &f) in self.ideal_point.iter_mut().zip(&solution.objectives) {
            if f < *z {
                *z = f;
                improved = true;
            }
        }
        if improved {
            self.aggregation.update(&self.ideal_point);
        }
    }

    /// Offers `child` to the slots of `scope`, in random order, until
    /// `max_replacements` of them have been taken. Returns the number of
    /// replaced solutions.
    fn replace_neighbors(&mut self, focal: usize, child: &Solution, scope: ParentSource) -> usize {
        let neighborhood = Arc::clone(&self.neighborhood);
        let mut slots: Vec<usize> = match scope {
            ParentSource::Neighborhood => neighborhood.neighborhood(focal).to_vec(),
            ParentSource::Population => (0..self.population.len()).collect(),
        };
        slots.shuffle(&mut self.rng);
        let mut replaced = 0;

        for j in slots {
            if replaced >= self.max_replacements {
                break;
            }
            let weights = neighborhood.weight_vector(j);
            let incumbent = self.aggregation.compute(&self.population[j].objectives, weights);
            let candidate = self.aggregation.compute(&child.objectives, weights);
            if candidate < incumbent {
                self.population[j] = child.clone();
                replaced += 1;
                trace!(focal, subproblem = j, incumbent, candidate, "replaced solution");
            }
        }

        replaced
    }
}

/// Evaluates every solution, in parallel when requested and available.
fn evaluate_population<P: Problem>(problem: &P, population: &mut [Solution], parallel: bool) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            population.par_iter_mut().for_each(|s| problem.evaluate(s));
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for s in population.iter_mut() {
        problem.evaluate(s);
    }
}

fn initial_ideal_point(population: &[Solution], num_objectives: usize) -> Vec<f64> {
    let mut ideal = vec![f64::INFINITY; num_objectives];
    for s in population {
        for (z, &f) in ideal.iter_mut().zip(&s.objectives) {
            *z = z.min(f);
        }
    }
    ideal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moead::aggregation::{Tschebyscheff, WeightedSum};
    use crate::moead::termination::TerminationByEvaluations;
    use crate::moead::variation::DifferentialEvolutionVariation;
    use crate::neighborhood::WeightGeneration;
    use crate::selection::NaryTournamentMatingPoolSelection;
    use rand::Rng;
    use std::collections::HashSet;

    /// ZDT1 with a configurable number of variables.
    struct Zdt1 {
        n: usize,
    }

    impl Problem for Zdt1 {
        fn num_variables(&self) -> usize {
            self.n
        }

        fn num_objectives(&self) -> usize {
            2
        }

        fn create_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Solution {
            let vars = (0..self.n).map(|_| rng.random::<f64>()).collect();
            Solution::new(vars, 2, 0)
        }

        fn evaluate(&self, solution: &mut Solution) {
            let x = &solution.variables;
            let f1 = x[0];
            let g = 1.0 + 9.0 * x[1..].iter().sum::<f64>() / (self.n - 1) as f64;
            let f2 = g * (1.0 - (f1 / g).sqrt());
            solution.objectives = vec![f1, f2];
        }
    }

    fn de(n: usize) -> DifferentialEvolutionVariation {
        DifferentialEvolutionVariation::new(vec![(0.0, 1.0); n]).unwrap()
    }

    fn runner<'a>(
        problem: &'a Zdt1,
        config: &MoeadConfig,
    ) -> MoeadRunner<'a, Zdt1, DifferentialEvolutionVariation, Tschebyscheff> {
        MoeadRunner::new(problem, de(problem.n), Tschebyscheff::new(), config).unwrap()
    }

    #[test]
    fn test_initialization() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(42);
        let r = runner(&problem, &config);

        assert_ne!(r.phase(), Phase::Initializing);
        assert_eq!(r.phase(), Phase::GeneratingOffspring);
        assert_eq!(r.population().len(), 100);
        assert_eq!(r.status().evaluations, 100);
        assert_eq!(r.status().passes, 0);
        assert!(r
            .population()
            .iter()
            .all(|s| s.objectives.iter().all(|f| f.is_finite())));
        for (k, &z) in r.ideal_point().iter().enumerate() {
            let min = r
                .population()
                .iter()
                .map(|s| s.objectives[k])
                .fold(f64::INFINITY, f64::min);
            assert_eq!(z, min);
        }
    }

    #[test]
    fn test_invalid_config() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default()
            .with_population_size(10)
            .with_neighborhood_size(20);
        assert!(matches!(
            MoeadRunner::new(&problem, de(10), Tschebyscheff::new(), &config),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_neighborhood_smaller_than_mating_pool() {
        // DE needs three parents; T=2 cannot supply them.
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default()
            .with_population_size(10)
            .with_neighborhood_size(2);
        assert!(matches!(
            MoeadRunner::new(&problem, de(10), Tschebyscheff::new(), &config),
            Err(Error::InvalidConfiguration(_))
        ));

        // Population-only sampling never reads the neighbourhood.
        let config = config.with_neighborhood_selection_probability(0.0);
        assert!(MoeadRunner::new(&problem, de(10), Tschebyscheff::new(), &config).is_ok());
    }

    #[test]
    fn test_population_smaller_than_mating_pool() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default()
            .with_population_size(2)
            .with_neighborhood_size(2)
            .with_neighborhood_selection_probability(0.0);
        assert!(matches!(
            MoeadRunner::new(&problem, de(10), Tschebyscheff::new(), &config),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_insufficient_candidates_propagates_from_run() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(42);
        let small = Arc::new(WeightVectorNeighborhood::new(100, 2).unwrap());
        let selection =
            PopulationAndNeighborhoodMatingPoolSelection::new(3, small, 1.0, true).unwrap();
        let r = runner(&problem, &config)
            .with_selection(selection.into())
            .unwrap();

        let err = r.run(&TerminationByEvaluations::new(1_000)).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientCandidates {
                required: 2,
                available: 1
            }
        ));
    }

    #[test]
    fn test_objective_count_mismatch() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default()
            .with_population_size(91)
            .with_neighborhood_size(10)
            .with_weight_generation(WeightGeneration::SimplexLattice { objectives: 3 });
        assert!(MoeadRunner::new(&problem, de(10), Tschebyscheff::new(), &config).is_err());
    }

    #[test]
    fn test_ideal_point_never_regresses_over_one_pass() {
        // N=100, T=20, p=0.9, DE with two sampled parents plus the focal one.
        let problem = Zdt1 { n: 30 };
        let config = MoeadConfig::default().with_seed(42);
        let mut r = runner(&problem, &config);
        assert_eq!(r.selection().mating_pool_size(), 3);

        let before = r.ideal_point().to_vec();
        let mut previous = before.clone();
        for _ in 0..100 {
            r.step().unwrap();
            for (now, prev) in r.ideal_point().iter().zip(&previous) {
                assert!(now <= prev);
            }
            previous = r.ideal_point().to_vec();
        }

        assert_eq!(r.status().passes, 1);
        assert_eq!(r.status().evaluations, 200);
        for (after, start) in r.ideal_point().iter().zip(&before) {
            assert!(after <= start);
        }
    }

    #[test]
    fn test_evaluation_budget_is_exact() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(1);
        let result = runner(&problem, &config)
            .run(&TerminationByEvaluations::new(1_000))
            .unwrap();

        assert_eq!(result.evaluations, 1_000);
        assert_eq!(result.passes, 9);
        assert_eq!(result.population.len(), 100);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_budget_stops_mid_pass() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(1);
        let result = runner(&problem, &config)
            .run(&TerminationByEvaluations::new(150))
            .unwrap();
        assert_eq!(result.evaluations, 150);
        assert_eq!(result.passes, 0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(7);
        let a = runner(&problem, &config)
            .run(&TerminationByEvaluations::new(500))
            .unwrap();
        let b = runner(&problem, &config)
            .run(&TerminationByEvaluations::new(500))
            .unwrap();
        assert_eq!(a.population, b.population);
        assert_eq!(a.ideal_point, b.ideal_point);
    }

    #[test]
    fn test_improves_over_initial_population() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(3);
        let r = runner(&problem, &config);
        let initial: f64 = r.population().iter().map(|s| s.objectives[1]).sum();

        let result = r.run(&TerminationByEvaluations::new(5_000)).unwrap();
        let last: f64 = result.population.iter().map(|s| s.objectives[1]).sum();
        assert!(last < initial, "initial {initial}, final {last}");
    }

    #[test]
    fn test_cancellation() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(42);
        let cancel = Arc::new(AtomicBool::new(true));
        let result = runner(&problem, &config)
            .run_with_cancel(&TerminationByEvaluations::new(10_000), Some(cancel))
            .unwrap();
        assert!(result.cancelled);
        assert_eq!(result.evaluations, 100);
    }

    #[test]
    fn test_closure_termination_by_passes() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(42);
        let result = runner(&problem, &config)
            .run(&|s: &AlgorithmStatus| s.passes >= 2)
            .unwrap();
        assert_eq!(result.passes, 2);
        assert_eq!(result.evaluations, 300);
    }

    #[test]
    fn test_tournament_selection() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(42);
        let selection =
            NaryTournamentMatingPoolSelection::with_preference(2, 3, Default::default()).unwrap();
        let result = runner(&problem, &config)
            .with_selection(selection.into())
            .unwrap()
            .run(&TerminationByEvaluations::new(300))
            .unwrap();
        assert_eq!(result.evaluations, 300);
    }

    #[test]
    fn test_selection_arity_mismatch() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(42);
        let selection =
            NaryTournamentMatingPoolSelection::with_preference(2, 2, Default::default()).unwrap();
        assert!(runner(&problem, &config).with_selection(selection.into()).is_err());
    }

    #[test]
    fn test_replacement_is_capped() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(42);
        let mut r = MoeadRunner::new(&problem, de(10), WeightedSum, &config).unwrap();

        // Beats every ZDT1 point under any non-negative weighting.
        let child = Solution::with_objectives(vec![0.0; 10], vec![-1.0, -1.0]);
        assert_eq!(r.replace_neighbors(17, &child, ParentSource::Neighborhood), 2);
        let copies = r.population().iter().filter(|s| **s == child).count();
        assert_eq!(copies, 2);
    }

    #[test]
    fn test_replacement_bounded_by_neighborhood() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default()
            .with_seed(42)
            .with_max_replacements(1_000);
        let mut r = MoeadRunner::new(&problem, de(10), WeightedSum, &config).unwrap();

        let child = Solution::with_objectives(vec![0.0; 10], vec![-1.0, -1.0]);
        assert_eq!(r.replace_neighbors(50, &child, ParentSource::Neighborhood), 20);
        for &j in r.neighborhood().neighborhood(50) {
            assert_eq!(r.population()[j], child);
        }
    }

    #[test]
    fn test_replacement_scope_follows_parent_source() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default()
            .with_seed(42)
            .with_max_replacements(1_000);
        let mut r = MoeadRunner::new(&problem, de(10), WeightedSum, &config).unwrap();

        let child = Solution::with_objectives(vec![0.0; 10], vec![-1.0, -1.0]);
        assert_eq!(r.replace_neighbors(50, &child, ParentSource::Population), 100);
        assert!(r.population().iter().all(|s| *s == child));
    }

    #[test]
    fn test_replacement_order_is_random() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default()
            .with_seed(42)
            .with_max_replacements(1);
        let mut r = MoeadRunner::new(&problem, de(10), WeightedSum, &config).unwrap();
        let hood: HashSet<usize> = r.neighborhood().neighborhood(50).iter().copied().collect();

        let mut taken = HashSet::new();
        for k in 0..10 {
            // Each child beats every earlier one, so exactly one slot changes.
            let f = -1.0 - k as f64;
            let child = Solution::with_objectives(vec![0.0; 10], vec![f, f]);
            assert_eq!(r.replace_neighbors(50, &child, ParentSource::Neighborhood), 1);
            let slot = r
                .population()
                .iter()
                .position(|s| *s == child)
                .unwrap();
            assert!(hood.contains(&slot));
            taken.insert(slot);
        }
        assert!(taken.len() > 1, "always replaced slot {taken:?}");
    }

    #[test]
    fn test_exhausted_sequence_is_reported() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(42);
        let mut r = runner(&problem, &config);
        while r.sequence.next_index().is_some() {}
        assert!(matches!(r.step(), Err(Error::SequenceExhausted)));
    }

    #[test]
    fn test_step_after_termination_fails() {
        let problem = Zdt1 { n: 10 };
        let config = MoeadConfig::default().with_seed(42);
        let mut r = runner(&problem, &config);
        r.phase = Phase::Terminated;
        assert!(r.step().is_err());
    }
}
