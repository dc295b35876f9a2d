//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Winning lines in priority order: rows top to bottom, columns left
/// to right, then the `\` and `/` diagonals.
///
/// Every line lists its cells in ascending index order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinnerResult {
    /// The player holding all three cells.
    pub player: Player,
    /// Board indices (0-8) of the line's cells, ascending.
    pub winning_line: [usize; 3],
}

impl WinnerResult {
    /// Whether the given position is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.winning_line.contains(&pos.to_index())
    }
}

/// Evaluates the board for a completed line.
///
/// Returns the first line in [`LINES`] order whose three squares hold
/// the same mark, or `None` if no line is complete.
#[instrument]
pub fn evaluate(board: &Board) -> Option<WinnerResult> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinnerResult {
                    player,
                    winning_line: [a, b, c].map(Position::to_index),
                })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(index, player) in cells {
            if let Some(pos) = Position::from_index(index) {
                board.set(pos, Square::Occupied(player));
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let cells: Vec<_> = line.iter().map(|p| (p.to_index(), player)).collect();
                let result = evaluate(&board_with(&cells)).map(|r| (r.player, r.winning_line));
                assert_eq!(result, Some((player, line.map(Position::to_index))));
            }
        }
    }

    #[test]
    fn test_anti_diagonal_reported_ascending() {
        let board = board_with(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        let result = evaluate(&board).map(|r| r.winning_line);
        assert_eq!(result, Some([2, 4, 6]));
    }

    #[test]
    fn test_main_diagonal_beats_anti_diagonal() {
        // X . X
        // . X .
        // X . X
        let board = board_with(&[
            (0, Player::X),
            (2, Player::X),
            (4, Player::X),
            (6, Player::X),
            (8, Player::X),
        ]);
        let result = evaluate(&board).map(|r| r.winning_line);
        assert_eq!(result, Some([0, 4, 8]));
    }

    #[test]
    fn test_contains_matches_line_cells() {
        let board = board_with(&[(2, Player::O), (5, Player::O), (8, Player::O)]);
        let result = evaluate(&board).expect("right column is complete");
        assert!(result.contains(Position::MiddleRight));
        assert!(!result.contains(Position::Center));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::O)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_row_beats_column_when_both_complete() {
        // X X X
        // X O O
        // X O O
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
            (4, Player::O),
            (5, Player::O),
            (7, Player::O),
            (8, Player::O),
        ]);
        let result = evaluate(&board).map(|r| r.winning_line);
        assert_eq!(result, Some([0, 1, 2]));
    }

    #[test]
    fn test_column_beats_diagonal_when_both_complete() {
        // X O .
        // X X O
        // X O X
        let board = board_with(&[
            (0, Player::X),
            (3, Player::X),
            (6, Player::X),
            (4, Player::X),
            (8, Player::X),
            (1, Player::O),
            (5, Player::O),
            (7, Player::O),
        ]);
        let result = evaluate(&board).map(|r| r.winning_line);
        assert_eq!(result, Some([0, 3, 6]));
    }
}
