//! Engine state management.
//!
//! Holds the run configuration and the state space generated for it, and
//! drives the solver, position queries, and self-play on top of that space.

use std::io::Write;

use crate::board::State;
use crate::config::Config;
use crate::graph::{generate, StateSpace};
use crate::protocol::report::Report;
use crate::selfplay::{run_self_play, SelfPlayError, SelfPlaySummary};
use crate::solve::{action_values, solve, Solution, SolveError};

/// Value of a single position and of each move available from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionValue {
    pub value: f64,
    /// Backed-up value per legal move, in cell order.
    pub moves: Vec<(usize, f64)>,
}

/// A generated state space together with the configuration that produced it.
pub struct Engine {
    config: Config,
    space: StateSpace,
}

impl Engine {
    /// Generates the state space for `config.start`.
    pub fn new(config: Config) -> Self {
        let space = generate(config.start);
        Engine { config, space }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn space(&self) -> &StateSpace {
        &self.space
    }

    /// Runs value iteration with the configured solver settings.
    pub fn solve<W: Write>(&self, out: &mut W) -> Result<Solution, SolveError> {
        solve(&self.space, &self.config.solver, out)
    }

    /// Summarizes a solution of this engine's space.
    pub fn report(&self, solution: &Solution) -> Report {
        Report::new(&self.space, solution)
    }

    /// Looks up a position. Returns `None` if it is unreachable.
    pub fn evaluate(&self, solution: &Solution, state: &State) -> Option<PositionValue> {
        let id = self.space.id_of(state)?;
        Some(PositionValue {
            value: solution.value(id),
            moves: action_values(&self.space, solution.values(), id),
        })
    }

    /// Plays the configured number of self-play games against `solution`.
    pub fn self_play(&self, solution: &Solution) -> Result<SelfPlaySummary, SelfPlayError> {
        run_self_play(&self.space, solution, &self.config.selfplay)
    }
}
