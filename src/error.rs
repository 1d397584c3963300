//! Error taxonomy for the optimizer.

use crate::monitor::OptimizerState;

/// Errors surfaced by optimizer construction and stepping.
///
/// Configuration problems are detected eagerly at construction; nothing is
/// caught and swallowed during a generation step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvolveError {
    /// A construction parameter is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The initial population is too small for the crossover pairing
    /// scheme to form a pair.
    #[error("init_population_size {0} cannot form a crossover pair (minimum 4)")]
    DegeneratePairing(usize),

    /// `step()` was called after the optimizer reached a terminal state.
    #[error("step() called after optimizer terminated: {0}")]
    AlreadyTerminated(OptimizerState),
}
