//! Reachable state space.
//!
//! The state space is an owned arena of [`StateRecord`]s indexed by
//! [`StateId`], built once by [`generate`] and read-only afterwards. Every
//! successor referenced by a record is itself a member of the arena.

pub mod generate;

use std::collections::HashMap;

use crate::board::{Outcome, State};

pub use generate::generate;

/// Index of a state within a [`StateSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub u32);

impl StateId {
    /// Returns the id as a slice index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A legal move: the cell played and the state it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub cell: usize,
    pub next: StateId,
}

/// Whether a state ends the game, and what can be played from it otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Terminal(Outcome),
    /// Legal moves in ascending cell order. Never empty once generation returns.
    NonTerminal(Vec<Action>),
}

/// Everything known about one discovered state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRecord {
    pub state: State,
    pub status: Status,
}

impl StateRecord {
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, Status::Terminal(_))
    }

    /// Terminal reward from X's perspective; `None` for non-terminal states.
    pub fn reward(&self) -> Option<f64> {
        match self.status {
            Status::Terminal(outcome) => Some(outcome.reward()),
            Status::NonTerminal(_) => None,
        }
    }

    /// Legal moves; empty iff the state is terminal.
    pub fn actions(&self) -> &[Action] {
        match &self.status {
            Status::Terminal(_) => &[],
            Status::NonTerminal(actions) => actions,
        }
    }
}

/// The complete set of states reachable from an initial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSpace {
    records: Vec<StateRecord>,
    index: HashMap<State, StateId>,
    initial: StateId,
}

impl StateSpace {
    /// Number of discovered states.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id of the state the traversal started from.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Looks up the id of a state, if it is reachable.
    pub fn id_of(&self, state: &State) -> Option<StateId> {
        self.index.get(state).copied()
    }

    /// Returns the record for `id`.
    ///
    /// Ids are only handed out by this arena, so indexing cannot miss for
    /// ids obtained from it.
    pub fn record(&self, id: StateId) -> &StateRecord {
        &self.records[id.index()]
    }

    /// Iterates over all records in id order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &StateRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (StateId(i as u32), r))
    }

    /// All records, indexed by `StateId::index`.
    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    /// Number of terminal states.
    pub fn terminal_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_terminal()).count()
    }
}
