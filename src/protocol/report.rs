//! Run summary for downstream tooling.
//!
//! The report carries everything a renderer or plotting script needs: state
//! counts, the number of sweeps, the initial-state value, and the per-sweep
//! delta trace. It is written as JSON.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::board::Player;
use crate::graph::StateSpace;
use crate::solve::Solution;

/// Summary of one generate-and-solve run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub start: Player,
    pub states: usize,
    pub terminal_states: usize,
    pub sweeps: usize,
    pub initial_value: f64,
    pub trace: Vec<f64>,
}

impl Report {
    /// Builds a report from a state space and its solution.
    pub fn new(space: &StateSpace, solution: &Solution) -> Self {
        Report {
            start: space.record(space.initial()).state.to_move,
            states: space.len(),
            terminal_states: space.terminal_count(),
            sweeps: solution.sweeps,
            initial_value: solution.initial_value(space),
            trace: solution.trace.clone(),
        }
    }
}

/// Writes the report as pretty-printed JSON followed by a newline.
pub fn write_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    out.flush()
}
