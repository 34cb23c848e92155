//! Winning lines and terminal classification.

use super::player::Player;
use super::state::Board;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    /// Reward from X's perspective: +1 for an X win, -1 for an O win, 0 for a draw.
    pub const fn reward(self) -> f64 {
        match self {
            Outcome::Win(p) => p.win_reward(),
            Outcome::Draw => 0.0,
        }
    }
}

/// Returns the owner of the first completed line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(mark)
    })
}

/// Classifies a board as finished or not.
///
/// Lines are checked before fullness, so a full board holding a line is a win.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(p) = winner(board) {
        Some(Outcome::Win(p))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::empty(), |b, &(i, p)| b.play(i, p).unwrap())
    }

    #[test]
    fn empty_board_is_open() {
        assert_eq!(winner(&Board::empty()), None);
        assert_eq!(outcome(&Board::empty()), None);
    }

    #[test]
    fn every_line_wins() {
        for line in WIN_LINES {
            let board = board_from(&line.map(|i| (i, Player::O)));
            assert_eq!(winner(&board), Some(Player::O), "line {:?}", line);
            assert_eq!(outcome(&board), Some(Outcome::Win(Player::O)));
        }
    }

    #[test]
    fn mixed_line_does_not_win() {
        let board = board_from(&[(0, Player::X), (1, Player::X), (2, Player::O)]);
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let board = board_from(&[
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (3, Player::X),
            (4, Player::O),
            (5, Player::O),
            (6, Player::O),
            (7, Player::X),
            (8, Player::X),
        ]);
        assert!(board.is_full());
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }

    #[test]
    fn full_board_with_line_is_win() {
        // X X X
        // O O X
        // X O O
        let board = board_from(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::O),
            (4, Player::O),
            (5, Player::X),
            (6, Player::X),
            (7, Player::O),
            (8, Player::O),
        ]);
        assert!(board.is_full());
        assert_eq!(outcome(&board), Some(Outcome::Win(Player::X)));
    }

    #[test]
    fn rewards_are_signed_for_x() {
        assert_eq!(Outcome::Win(Player::X).reward(), 1.0);
        assert_eq!(Outcome::Win(Player::O).reward(), -1.0);
        assert_eq!(Outcome::Draw.reward(), 0.0);
    }
}
