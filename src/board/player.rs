//! Players and their marks.
//!
//! X is the maximizing player and O the uniformly random one. Rewards are
//! always expressed from X's point of view.

use serde::{Deserialize, Serialize};

/// One of the two players. Turns alternate strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

/// Both players, X first.
pub const ALL_PLAYERS: [Player; 2] = [Player::X, Player::O];

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns true for the player whose turns take the maximum over moves.
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Player::X)
    }

    /// Returns the uppercase mark character.
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Parses a player from its mark character (case-insensitive).
    pub fn from_symbol(c: char) -> Option<Player> {
        match c {
            'X' | 'x' => Some(Player::X),
            'O' | 'o' => Some(Player::O),
            _ => None,
        }
    }

    /// Reward for a game won by this player.
    pub const fn win_reward(self) -> f64 {
        match self {
            Player::X => 1.0,
            Player::O => -1.0,
        }
    }
}
