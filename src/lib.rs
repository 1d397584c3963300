//! Evolutionary solver for the Travelling Salesman Problem.
//!
//! Approximates the shortest closed tour over a fixed set of 2-D points
//! with a population-based genetic search:
//!
//! - **[`Tour`]**: a closed-loop permutation of city indices with
//!   validity-preserving crossover and mutation operators.
//! - **[`Population`]**: an aging collection of tours — stable sort by
//!   length, size cap, additive adjacent-pair reproduction, and
//!   lifetime-based culling.
//! - **[`Optimizer`]**: drives one generation per [`Optimizer::step`] call
//!   and exposes the current best route between calls, so an external
//!   scheduler (UI tick, game loop, test harness) stays in control of
//!   timing.
//! - **[`ConvergenceMonitor`]**: counts stagnant generations and signals
//!   when the search has converged or run out of budget.
//!
//! The search is single-threaded and synchronous; all randomness flows
//! from one seedable generator, so a fixed [`EvolveConfig::seed`] makes
//! runs fully reproducible.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use tsp_evolve::{EvolveConfig, Instance, Optimizer, OptimizerState};
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let instance = Instance::random(20, 1000.0, 1000.0, &mut rng);
//!
//! let config = EvolveConfig::default()
//!     .with_max_generations(200)
//!     .with_seed(42);
//! let mut optimizer = Optimizer::new(instance, config)?;
//!
//! while optimizer.step()? == OptimizerState::Running {}
//!
//! assert!(optimizer.state().is_terminal());
//! println!("{} after {} generations, best length {:.1}",
//!     optimizer.status(), optimizer.generation(), optimizer.best_length());
//! # Ok::<(), tsp_evolve::EvolveError>(())
//! ```

mod config;
mod engine;
mod error;
mod instance;
mod monitor;
mod population;
mod tour;

pub use config::EvolveConfig;
pub use engine::{Optimizer, RunSummary};
pub use error::EvolveError;
pub use instance::{Instance, Point};
pub use monitor::{ConvergenceMonitor, OptimizerState};
pub use population::Population;
pub use tour::Tour;
