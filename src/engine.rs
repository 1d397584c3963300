//! The evolutionary optimizer.
//!
//! [`Optimizer`] owns the population and drives it one generation per
//! [`step()`](Optimizer::step) call: sort and cap, record the best tour,
//! reproduce, mutate, age and cull. An external scheduler polls `step()`
//! once per tick and reads the current best route between calls; the
//! optimizer itself never renders, blocks, or spawns threads.

use crate::config::EvolveConfig;
use crate::error::EvolveError;
use crate::instance::Instance;
use crate::monitor::{ConvergenceMonitor, OptimizerState};
use crate::population::Population;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Result of driving an optimizer to a terminal state with
/// [`Optimizer::run`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Best route at termination (closed loop, depot at both ends).
    pub best_route: Vec<usize>,

    /// Length of `best_route`.
    pub best_length: f64,

    /// Generations executed.
    pub generations: usize,

    /// Terminal state: `Converged` or `BudgetExhausted`.
    pub state: OptimizerState,

    /// Best length recorded after each generation.
    pub length_history: Vec<f64>,
}

/// Evolutionary TSP optimizer.
///
/// # Examples
///
/// ```
/// use tsp_evolve::{EvolveConfig, Instance, Optimizer, OptimizerState, Point};
///
/// let square = Instance::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ]);
/// let config = EvolveConfig::default()
///     .with_max_generations(200)
///     .with_stagnation_limit(20)
///     .with_seed(42);
///
/// let mut optimizer = Optimizer::new(square, config)?;
/// while optimizer.step()? == OptimizerState::Running {}
///
/// println!("{}: {:?}", optimizer.status(), optimizer.best_route());
/// # Ok::<(), tsp_evolve::EvolveError>(())
/// ```
#[derive(Debug)]
pub struct Optimizer {
    instance: Instance,
    config: EvolveConfig,
    population: Population,
    monitor: ConvergenceMonitor,
    rng: ChaCha8Rng,
}

impl Optimizer {
    /// Creates an optimizer over `instance` with an initial population of
    /// random tours.
    ///
    /// Configuration errors are detected here, eagerly: an instance with
    /// fewer than 2 cities, invalid population bounds, an out-of-range
    /// mutation probability, or an initial population too small to pair.
    pub fn new(instance: Instance, config: EvolveConfig) -> Result<Self, EvolveError> {
        config.validate()?;
        if instance.len() < 2 {
            return Err(EvolveError::InvalidConfiguration(
                "instance must contain at least 2 cities".into(),
            ));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        let population = Population::random(
            &instance,
            config.init_population_size,
            config.mutation_probability,
            &mut rng,
        );
        let monitor = ConvergenceMonitor::new(config.max_generations, config.stagnation_limit);

        Ok(Self {
            instance,
            config,
            population,
            monitor,
            rng,
        })
    }

    /// Advances the search by one generation.
    ///
    /// Runs the fixed pass order — sort/cap, best-route comparison,
    /// crossover, mutation, aging — then increments the generation counter
    /// and evaluates the stop conditions. Stagnation beyond the limit
    /// yields [`OptimizerState::Converged`]; otherwise an exhausted budget
    /// yields [`OptimizerState::BudgetExhausted`].
    ///
    /// Terminal states are absorbing: calling `step()` afterwards returns
    /// [`EvolveError::AlreadyTerminated`] rather than silently doing
    /// nothing, so a scheduler that fails to check the state hears about
    /// it.
    pub fn step(&mut self) -> Result<OptimizerState, EvolveError> {
        let state = self.monitor.state();
        if state.is_terminal() {
            return Err(EvolveError::AlreadyTerminated(state));
        }

        self.population
            .sort_and_cap(&self.instance, self.config.max_population_size);

        let best = self.population.best(&self.instance);
        let best_length = best.length(&self.instance);
        self.monitor.observe_best(best.route());

        self.population.crossover_pass(&mut self.rng);
        self.population.mutation_pass(&mut self.rng);
        self.population.age_pass(self.config.max_life_time);

        let state = self.monitor.end_generation();
        debug!(
            "generation {}: best {:.3}, stagnation {}, population {}",
            self.monitor.generation(),
            best_length,
            self.monitor.stagnation(),
            self.population.len()
        );
        if state.is_terminal() {
            info!(
                "terminated after {} generations: {}",
                self.monitor.generation(),
                state.message()
            );
        }
        Ok(state)
    }

    /// Drives [`step()`](Self::step) until a terminal state is reached.
    pub fn run(&mut self) -> Result<RunSummary, EvolveError> {
        let mut length_history = Vec::with_capacity(self.config.max_generations.min(1024));
        loop {
            let state = self.step()?;
            length_history.push(self.best_length());
            if state.is_terminal() {
                return Ok(RunSummary {
                    best_route: self.best_route(),
                    best_length: self.best_length(),
                    generations: self.generation(),
                    state,
                    length_history,
                });
            }
        }
    }

    /// The current best route: the one recorded by the last step, or the
    /// best of the initial population before any step has run.
    pub fn best_route(&self) -> Vec<usize> {
        match self.monitor.best_route() {
            Some(route) => route.to_vec(),
            None => self.population.best(&self.instance).route().to_vec(),
        }
    }

    /// Length of [`best_route()`](Self::best_route).
    pub fn best_length(&self) -> f64 {
        match self.monitor.best_route() {
            Some(route) => self.instance.route_length(route),
            None => self.population.best(&self.instance).length(&self.instance),
        }
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.monitor.generation()
    }

    /// Consecutive generations without a change of best route.
    pub fn stagnation(&self) -> usize {
        self.monitor.stagnation()
    }

    pub fn state(&self) -> OptimizerState {
        self.monitor.state()
    }

    /// Human-readable status line for the current state.
    pub fn status(&self) -> &'static str {
        self.monitor.state().message()
    }

    /// Current number of tours in the population.
    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn config(&self) -> &EvolveConfig {
        &self.config
    }
}

// ============================================================================
// Tests
// ============================================================================
