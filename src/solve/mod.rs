//! Value iteration over the reachable state space.
//!
//! X's turns take the maximum over moves and O's turns average uniformly
//! over moves. The solver runs synchronous sweeps until the largest change
//! in a sweep falls below the configured threshold.

pub mod policy;
pub mod value_iteration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::State;
use crate::graph::{StateId, StateSpace};

pub use policy::{action_values, backed_up, best_move};
pub use value_iteration::solve;

/// Default discount factor.
pub const DEFAULT_DISCOUNT: f64 = 1.0;

/// Default convergence threshold on the per-sweep delta.
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Default cap on the number of sweeps.
pub const DEFAULT_MAX_SWEEPS: usize = 1000;

/// Errors raised by the solver.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("discount must be within [0, 1], got {0}")]
    InvalidDiscount(f64),

    #[error("convergence threshold must be positive and finite, got {0}")]
    InvalidThreshold(f64),

    #[error("max_sweeps must be at least 1")]
    InvalidMaxSweeps,

    #[error("threads must be at least 1")]
    InvalidThreads,

    #[error("did not converge after {sweeps} sweeps (last delta {delta})")]
    DidNotConverge { sweeps: usize, delta: f64 },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Multiplier applied to backed-up successor values.
    pub discount: f64,
    /// A sweep whose delta is below this value ends the iteration.
    pub epsilon: f64,
    /// Sweeps allowed before giving up with `DidNotConverge`.
    pub max_sweeps: usize,
    /// Worker threads per sweep; 1 runs sequentially.
    pub threads: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            discount: DEFAULT_DISCOUNT,
            epsilon: DEFAULT_EPSILON,
            max_sweeps: DEFAULT_MAX_SWEEPS,
            threads: 1,
        }
    }
}

impl SolverConfig {
    /// Checks that every setting is usable.
    pub fn validate(&self) -> Result<(), SolveError> {
        if !(0.0..=1.0).contains(&self.discount) {
            return Err(SolveError::InvalidDiscount(self.discount));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SolveError::InvalidThreshold(self.epsilon));
        }
        if self.max_sweeps == 0 {
            return Err(SolveError::InvalidMaxSweeps);
        }
        if self.threads == 0 {
            return Err(SolveError::InvalidThreads);
        }
        Ok(())
    }
}

/// A converged value table with its convergence history.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    values: Vec<f64>,
    /// Number of sweeps performed, including the final one.
    pub sweeps: usize,
    /// Maximum absolute change of each sweep, in order.
    pub trace: Vec<f64>,
}

impl Solution {
    /// Values indexed by `StateId::index`.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn value(&self, id: StateId) -> f64 {
        self.values[id.index()]
    }

    /// Value of `state`, or `None` if it is not in `space`.
    pub fn value_of(&self, space: &StateSpace, state: &State) -> Option<f64> {
        space.id_of(state).map(|id| self.value(id))
    }

    /// Value of the state generation started from.
    pub fn initial_value(&self, space: &StateSpace) -> f64 {
        self.value(space.initial())
    }
}
