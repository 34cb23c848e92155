//! Compact text notation for positions.
//!
//! A position is written as three rows separated by `/`, each row three
//! cells (`X`, `O`, or `.` for empty), then a space and the player to move:
//!
//! ```text
//! XX./OO./..X O
//! ```

use thiserror::Error;

use crate::board::{Board, Player, State, CELL_COUNT, SIZE};

/// Errors that can occur while parsing a position.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("missing player to move")]
    MissingMover,

    #[error("expected 3 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected 3")]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error("invalid player to move: '{0}'")]
    InvalidMover(String),

    #[error("unexpected trailing input: '{0}'")]
    TrailingInput(String),
}

/// Parses a position such as `XX./OO./..X O`.
pub fn parse_position(s: &str) -> Result<State, NotationError> {
    let mut tokens = s.split_whitespace();
    let grid = tokens.next().ok_or(NotationError::EmptyInput)?;
    let mover = tokens.next().ok_or(NotationError::MissingMover)?;
    if let Some(extra) = tokens.next() {
        return Err(NotationError::TrailingInput(extra.to_string()));
    }

    let rows: Vec<&str> = grid.split('/').collect();
    if rows.len() != SIZE {
        return Err(NotationError::WrongRowCount(rows.len()));
    }

    let mut cells = [None; CELL_COUNT];
    for (r, row) in rows.iter().enumerate() {
        let len = row.chars().count();
        if len != SIZE {
            return Err(NotationError::WrongRowLength { row: r + 1, len });
        }
        for (c, ch) in row.chars().enumerate() {
            cells[r * SIZE + c] = match ch {
                '.' => None,
                _ => Some(Player::from_symbol(ch).ok_or(NotationError::InvalidCell(ch))?),
            };
        }
    }

    let mut mover_chars = mover.chars();
    let to_move = match (mover_chars.next(), mover_chars.next()) {
        (Some(ch), None) => Player::from_symbol(ch),
        _ => None,
    }
    .ok_or_else(|| NotationError::InvalidMover(mover.to_string()))?;

    Ok(State::new(Board::from_cells(cells), to_move))
}

/// Encodes a position in the notation accepted by [`parse_position`].
pub fn encode_position(state: &State) -> String {
    let mut s = String::with_capacity(CELL_COUNT + SIZE + 2);
    for (i, cell) in state.board.cells().iter().enumerate() {
        if i > 0 && i % SIZE == 0 {
            s.push('/');
        }
        s.push(cell.map_or('.', Player::symbol));
    }
    s.push(' ');
    s.push(state.to_move.symbol());
    s
}
