//! Greedy policy extraction from a value table.

use crate::graph::{Action, StateId, StateSpace};

/// Value used for `id` when it is the successor in a backup: its reward if
/// terminal, else its entry in `values`.
pub fn backed_up(space: &StateSpace, values: &[f64], id: StateId) -> f64 {
    space
        .record(id)
        .reward()
        .unwrap_or_else(|| values[id.index()])
}

/// Backed-up value of every legal move from `id`, in cell order.
///
/// Empty for terminal states.
pub fn action_values(space: &StateSpace, values: &[f64], id: StateId) -> Vec<(usize, f64)> {
    space
        .record(id)
        .actions()
        .iter()
        .map(|a| (a.cell, backed_up(space, values, a.next)))
        .collect()
}

/// The move with the highest backed-up value, lowest cell on ties.
///
/// Returns `None` for terminal states.
pub fn best_move(space: &StateSpace, values: &[f64], id: StateId) -> Option<Action> {
    let mut best: Option<(Action, f64)> = None;
    for &action in space.record(id).actions() {
        let v = backed_up(space, values, action.next);
        if best.map_or(true, |(_, best_v)| v > best_v) {
            best = Some((action, v));
        }
    }
    best.map(|(a, _)| a)
}
