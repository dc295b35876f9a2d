//! Rejected commands.

use super::{Player, Position};

/// Reason a move or history jump was rejected.
///
/// A rejected command never changes game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The board at the current step already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),

    /// The requested step is not in history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for MoveError {}
