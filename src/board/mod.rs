//! Board representation and game-state types.
//!
//! Contains players, the board, (board, mover) states, and the win-line
//! rules that decide when a game is over.

pub mod lines;
pub mod player;
pub mod state;

pub use lines::{outcome, winner, Outcome, WIN_LINES};
pub use player::{Player, ALL_PLAYERS};
pub use state::{Board, State, CELL_COUNT, SIZE};
