//! Synchronous value iteration.
//!
//! Every sweep computes a fresh table from the previous one; no backup reads
//! a value written earlier in the same sweep. With more than one thread the
//! per-state backups of a sweep are spread over a rayon pool, which yields
//! exactly the same table as the sequential sweep.

use std::io::Write;
use std::time::Instant;

use rayon::prelude::*;

use super::policy::backed_up;
use super::{Solution, SolveError, SolverConfig};
use crate::graph::{StateRecord, StateSpace, Status};

/// Runs value iteration over `space` until a sweep's delta drops below
/// `config.epsilon`.
///
/// Writes one `info sweep <n> delta <d> time <ms>` line to `out` per sweep.
/// Returns `DidNotConverge` if `config.max_sweeps` sweeps complete without
/// reaching the threshold.
pub fn solve<W: Write>(
    space: &StateSpace,
    config: &SolverConfig,
    out: &mut W,
) -> Result<Solution, SolveError> {
    config.validate()?;

    let pool = if config.threads > 1 {
        Some(
            rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .build()?,
        )
    } else {
        None
    };

    let mut values = initial_values(space);
    let mut trace = Vec::new();
    let start = Instant::now();

    loop {
        let next = match &pool {
            Some(pool) => pool.install(|| sweep_parallel(space, &values, config.discount)),
            None => sweep(space, &values, config.discount),
        };
        let delta = max_change(&values, &next);
        values = next;
        trace.push(delta);
        let sweeps = trace.len();

        let _ = writeln!(
            out,
            "info sweep {} delta {:e} time {}",
            sweeps,
            delta,
            start.elapsed().as_millis()
        );

        if delta < config.epsilon {
            return Ok(Solution {
                values,
                sweeps,
                trace,
            });
        }
        if sweeps >= config.max_sweeps {
            return Err(SolveError::DidNotConverge { sweeps, delta });
        }
    }
}

/// Terminal states start at their reward, everything else at zero.
fn initial_values(space: &StateSpace) -> Vec<f64> {
    space
        .records()
        .iter()
        .map(|r| r.reward().unwrap_or(0.0))
        .collect()
}

fn sweep(space: &StateSpace, values: &[f64], discount: f64) -> Vec<f64> {
    space
        .records()
        .iter()
        .map(|r| backup(space, r, values, discount))
        .collect()
}

fn sweep_parallel(space: &StateSpace, values: &[f64], discount: f64) -> Vec<f64> {
    space
        .records()
        .par_iter()
        .map(|r| backup(space, r, values, discount))
        .collect()
}

/// One Bellman backup for a single state, reading only `values`.
fn backup(space: &StateSpace, record: &StateRecord, values: &[f64], discount: f64) -> f64 {
    match &record.status {
        Status::Terminal(outcome) => outcome.reward(),
        Status::NonTerminal(actions) => {
            let successors = actions.iter().map(|a| backed_up(space, values, a.next));
            if record.state.to_move.is_maximizer() {
                discount * successors.fold(f64::NEG_INFINITY, f64::max)
            } else {
                // Generation never leaves a non-terminal state without moves.
                let n = actions.len() as f64;
                discount * successors.sum::<f64>() / n
            }
        }
    }
}

fn max_change(prev: &[f64], next: &[f64]) -> f64 {
    prev.iter()
        .zip(next)
        .map(|(a, b)| (b - a).abs())
        .fold(0.0, f64::max)
}
