//! Convergence monitoring.
//!
//! The [`ConvergenceMonitor`] watches the best route across generations
//! and decides when the search should stop: either the best route has not
//! changed for longer than the stagnation limit (converged), or the
//! generation budget ran out. It is owned by the optimizer but kept as its
//! own type so the stop logic stays separate from the evolutionary passes.

use std::fmt;

/// Lifecycle of an optimizer run.
///
/// Starts `Running`; both other states are terminal and absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptimizerState {
    /// The search is still making steps.
    Running,
    /// The best route survived unchanged past the stagnation limit.
    Converged,
    /// The generation budget was exhausted before convergence.
    BudgetExhausted,
}

impl OptimizerState {
    pub fn is_terminal(self) -> bool {
        self != OptimizerState::Running
    }

    /// Human-readable status line for schedulers and UIs.
    pub fn message(self) -> &'static str {
        match self {
            OptimizerState::Running => "running",
            OptimizerState::Converged => "solution found",
            OptimizerState::BudgetExhausted => "generation budget exhausted",
        }
    }
}

impl fmt::Display for OptimizerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Tracks stagnation and the generation budget across steps.
#[derive(Debug, Clone)]
pub struct ConvergenceMonitor {
    max_generations: usize,
    stagnation_limit: usize,
    generation: usize,
    stagnation: usize,
    best_route: Option<Vec<usize>>,
    state: OptimizerState,
}

impl ConvergenceMonitor {
    pub fn new(max_generations: usize, stagnation_limit: usize) -> Self {
        Self {
            max_generations,
            stagnation_limit,
            generation: 0,
            stagnation: 0,
            best_route: None,
            state: OptimizerState::Running,
        }
    }

    /// Records the current best route. An unchanged index sequence counts
    /// as one more stagnant generation; any change resets the counter and
    /// replaces the recorded route.
    pub fn observe_best(&mut self, route: &[usize]) {
        match &self.best_route {
            Some(recorded) if recorded == route => self.stagnation += 1,
            _ => {
                self.stagnation = 0;
                self.best_route = Some(route.to_vec());
            }
        }
    }

    /// Closes a generation: bumps the counter and evaluates the stop
    /// conditions. Stagnation wins over budget exhaustion when both hold.
    pub fn end_generation(&mut self) -> OptimizerState {
        self.generation += 1;
        if self.stagnation > self.stagnation_limit {
            self.state = OptimizerState::Converged;
        } else if self.generation > self.max_generations {
            self.state = OptimizerState::BudgetExhausted;
        }
        self.state
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Consecutive generations without a change of best route.
    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    /// The most recently recorded best route, if any step has run.
    pub fn best_route(&self) -> Option<&[usize]> {
        self.best_route.as_deref()
    }

    pub fn state(&self) -> OptimizerState {
        self.state
    }
}
