//! Derives which cell a move filled from two successive boards.

use super::super::{Board, MovePosition, Position};
use tracing::instrument;

/// Resolves the coordinates of the first cell that differs between
/// `previous` and `current`.
///
/// A missing `previous` board is treated as empty. Returns `None` when
/// the boards are identical. Callers supply consecutive history entries,
/// which differ in exactly one cell.
#[instrument(skip_all)]
pub fn resolve(previous: Option<&Board>, current: &Board) -> Option<MovePosition> {
    let blank = Board::new();
    let previous = previous.unwrap_or(&blank);

    Position::ALL
        .into_iter()
        .find(|&pos| previous.get(pos) != current.get(pos))
        .map(Position::coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_identical_boards_resolve_to_none() {
        let board = Board::new();
        assert_eq!(resolve(Some(&board), &board), None);
        assert_eq!(resolve(None, &board), None);
    }

    #[test]
    fn test_missing_previous_treated_as_blank() {
        let mut board = Board::new();
        board.set(Position::MiddleRight, Square::Occupied(Player::X));
        assert_eq!(resolve(None, &board), Some(MovePosition { row: 2, col: 3 }));
    }

    #[test]
    fn test_each_single_cell_delta() {
        let mut previous = Board::new();
        previous.set(Position::Center, Square::Occupied(Player::X));

        for pos in Position::valid_moves(&previous) {
            let mut current = previous;
            current.set(pos, Square::Occupied(Player::O));
            assert_eq!(resolve(Some(&previous), &current), Some(pos.coordinates()));
        }
    }
}
