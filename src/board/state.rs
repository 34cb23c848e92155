//! Board and game-state representation.
//!
//! A board is a fixed array of nine cells; a state pairs a board with the
//! player to move. Both are small `Copy` values with structural equality, so
//! they can key hash maps directly.

use super::player::Player;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A tic-tac-toe board.
///
/// Cells are indexed row-major, `0..CELL_COUNT`. `None` marks an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    cells: [Option<Player>; CELL_COUNT],
}

impl Board {
    /// Creates a board with every cell empty.
    pub const fn empty() -> Self {
        Board {
            cells: [None; CELL_COUNT],
        }
    }

    /// Creates a board from explicit cell contents.
    pub const fn from_cells(cells: [Option<Player>; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// Returns the mark at `cell`, or `None` if empty or out of range.
    pub fn get(&self, cell: usize) -> Option<Player> {
        self.cells.get(cell).copied().flatten()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Option<Player>; CELL_COUNT] {
        &self.cells
    }

    /// Returns the indices of the empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Number of marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| **c == Some(player)).count()
    }

    /// Returns a copy of this board with `player`'s mark at `cell`.
    ///
    /// Returns `None` if the cell is out of range or already occupied. The
    /// receiver is never modified.
    pub fn play(&self, cell: usize, player: Player) -> Option<Board> {
        match self.cells.get(cell) {
            Some(None) => {
                let mut next = *self;
                next.cells[cell] = Some(player);
                Some(next)
            }
            _ => None,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// A board together with the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub board: Board,
    pub to_move: Player,
}

impl State {
    /// Creates a state from a board and the player to move.
    pub const fn new(board: Board, to_move: Player) -> Self {
        State { board, to_move }
    }

    /// The empty board with `first` to move.
    pub const fn initial(first: Player) -> Self {
        State {
            board: Board::empty(),
            to_move: first,
        }
    }

    /// Plays the mover's mark at `cell` and hands the turn to the opponent.
    pub fn play(&self, cell: usize) -> Option<State> {
        self.board
            .play(cell, self.to_move)
            .map(|board| State::new(board, self.to_move.opponent()))
    }
}
