//! Reachable state enumeration.
//!
//! Walks the game tree depth-first from the empty board with an explicit
//! stack. Each state is interned (classified and stored) the first time it is
//! seen and expanded at most once, so transpositions that reach the same
//! board and mover through different move orders collapse into one record.

use std::collections::HashMap;

use super::{Action, StateId, StateRecord, StateSpace, Status};
use crate::board::{outcome, Player, State};

/// Builds the state space reachable from the empty board with `first` to move.
pub fn generate(first: Player) -> StateSpace {
    let mut builder = Builder::default();
    let (initial, _) = builder.intern(State::initial(first));

    let mut stack = vec![initial];
    while let Some(id) = stack.pop() {
        let record = &builder.records[id.index()];
        if record.is_terminal() {
            continue;
        }
        let state = record.state;

        let mut actions = Vec::new();
        for cell in state.board.empty_cells() {
            let Some(next) = state.play(cell) else {
                continue;
            };
            let (next_id, fresh) = builder.intern(next);
            actions.push(Action {
                cell,
                next: next_id,
            });
            if fresh {
                stack.push(next_id);
            }
        }
        builder.records[id.index()].status = Status::NonTerminal(actions);
    }

    StateSpace {
        records: builder.records,
        index: builder.index,
        initial,
    }
}

#[derive(Default)]
struct Builder {
    records: Vec<StateRecord>,
    index: HashMap<State, StateId>,
}

impl Builder {
    /// Returns the id of `state`, inserting a new record if it was unseen.
    ///
    /// The boolean is true when the record was created by this call.
    /// Non-terminal records start with no actions; the caller fills them in
    /// when the state is expanded.
    fn intern(&mut self, state: State) -> (StateId, bool) {
        if let Some(&id) = self.index.get(&state) {
            return (id, false);
        }
        let id = StateId(self.records.len() as u32);
        let status = match outcome(&state.board) {
            Some(o) => Status::Terminal(o),
            None => Status::NonTerminal(Vec::new()),
        };
        self.records.push(StateRecord { state, status });
        self.index.insert(state, id);
        (id, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Outcome, CELL_COUNT};

    #[test]
    fn standard_board_has_5478_states() {
        let space = generate(Player::X);
        assert_eq!(space.len(), 5478);
        assert_eq!(space.terminal_count(), 958);
    }

    #[test]
    fn o_first_has_same_count() {
        let space = generate(Player::O);
        assert_eq!(space.len(), 5478);
        assert_eq!(space.record(space.initial()).state, State::initial(Player::O));
    }

    #[test]
    fn initial_state_has_nine_moves() {
        let space = generate(Player::X);
        let root = space.record(space.initial());
        assert_eq!(root.state, State::initial(Player::X));
        let cells: Vec<usize> = root.actions().iter().map(|a| a.cell).collect();
        assert_eq!(cells, (0..CELL_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn actions_match_empty_cells() {
        let space = generate(Player::X);
        for (_, record) in space.iter() {
            if record.is_terminal() {
                assert!(record.actions().is_empty());
                continue;
            }
            let cells: Vec<usize> = record.actions().iter().map(|a| a.cell).collect();
            let empty: Vec<usize> = record.state.board.empty_cells().collect();
            assert!(!cells.is_empty());
            assert_eq!(cells, empty);
        }
    }

    #[test]
    fn successors_are_single_marks_by_mover() {
        let space = generate(Player::X);
        for (_, record) in space.iter() {
            let state = record.state;
            for action in record.actions() {
                let next = space.record(action.next).state;
                assert_eq!(next.to_move, state.to_move.opponent());
                let changed: Vec<usize> = (0..CELL_COUNT)
                    .filter(|&i| state.board.get(i) != next.board.get(i))
                    .collect();
                assert_eq!(changed, vec![action.cell]);
                assert_eq!(next.board.get(action.cell), Some(state.to_move));
            }
        }
    }

    #[test]
    fn terminal_states_match_outcome() {
        let space = generate(Player::X);
        let mut wins_x = 0;
        let mut wins_o = 0;
        let mut draws = 0;
        for (_, record) in space.iter() {
            match record.status {
                Status::Terminal(Outcome::Win(Player::X)) => wins_x += 1,
                Status::Terminal(Outcome::Win(Player::O)) => wins_o += 1,
                Status::Terminal(Outcome::Draw) => draws += 1,
                Status::NonTerminal(_) => {
                    assert_eq!(outcome(&record.state.board), None);
                }
            }
        }
        assert_eq!((wins_x, wins_o, draws), (626, 316, 16));
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate(Player::X), generate(Player::X));
    }

    #[test]
    fn unreachable_state_is_absent() {
        let space = generate(Player::X);
        // O cannot have moved first when X starts.
        let board = Board::empty().play(0, Player::O).unwrap();
        assert_eq!(space.id_of(&State::new(board, Player::X)), None);
    }
}
