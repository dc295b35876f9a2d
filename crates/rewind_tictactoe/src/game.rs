//! History-backed game state with time travel.
//!
//! `GameState` keeps every board snapshot since the start of the game and
//! a pointer to the snapshot currently shown. Moving the pointer back and
//! playing a new move branches history: everything after the pointer is
//! discarded before the new snapshot is appended.

use super::error::MoveError;
use super::invariants::{InvariantSet, RewindInvariants};
use super::rules::{self, WinnerResult};
use super::{Board, MovePosition, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of moves that fill the board.
pub const MAX_MOVES: usize = 9;

/// Derived status of the board at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player to move next.
        next: Player,
    },
    /// A line is complete.
    Won(WinnerResult),
    /// All nine moves were played without a winner.
    Draw,
}

impl GameStatus {
    /// Whether no further moves are accepted at this step.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(result) => write!(f, "Winner: {}", result.player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Authoritative game state: board history plus the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Board>,
    step_number: usize,
}

impl GameState {
    /// Creates a new game whose only history entry is the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step_number: 0,
        }
    }

    /// Every board snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot currently shown.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// The board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step_number]
    }

    /// Player to move at the current step, derived from step parity.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// Completed line on the current board, if any.
    pub fn winner(&self) -> Option<WinnerResult> {
        rules::evaluate(self.current_board())
    }

    /// Status of the current board.
    ///
    /// A draw is declared from the move count alone: one square fills per
    /// step, so step nine without a winner is a full board.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn status(&self) -> GameStatus {
        if let Some(result) = self.winner() {
            GameStatus::Won(result)
        } else if self.step_number < MAX_MOVES {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        } else {
            GameStatus::Draw
        }
    }

    /// Places the current player's mark on `cell` (0-8).
    ///
    /// Any history after the current step is discarded before the new
    /// board is appended. Returns the new step number.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range cells, occupied cells, and moves on a board
    /// that already has a winner. State is unchanged on rejection.
    #[instrument(skip(self), fields(step = self.step_number, player = %self.next_player()))]
    pub fn apply_move(&mut self, cell: usize) -> Result<usize, MoveError> {
        let pos = Position::from_index(cell).ok_or(MoveError::CellOutOfRange(cell))?;

        if let Some(result) = self.winner() {
            return Err(MoveError::GameOver(result.player));
        }
        if !self.current_board().is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let mut board = *self.current_board();
        board.set(pos, Square::Occupied(self.next_player()));

        let discarded = self.history.len() - (self.step_number + 1);
        self.history.truncate(self.step_number + 1);
        self.history.push(board);
        self.step_number = self.history.len() - 1;

        debug!(position = %pos, discarded, step = self.step_number, "Move applied");
        self.check_invariants();
        Ok(self.step_number)
    }

    /// Moves the step pointer without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::StepOutOfRange`] if `step` is past the end of
    /// history.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step_number = step;
        debug!(step, "Jumped");
        self.check_invariants();
        Ok(())
    }

    /// Discards all history and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Coordinates of the cell filled by each history entry.
    ///
    /// Entry 0 is the empty starting board and has no position.
    pub fn move_positions(&self) -> Vec<Option<MovePosition>> {
        std::iter::once(None)
            .chain(
                self.history
                    .windows(2)
                    .map(|pair| rules::resolve(Some(&pair[0]), &pair[1])),
            )
            .collect()
    }

    /// Builds a read-only view for rendering.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> GameSnapshot {
        let moves = self
            .move_positions()
            .into_iter()
            .enumerate()
            .map(|(step, position)| MoveRecord { step, position })
            .collect();

        GameSnapshot {
            board: *self.current_board(),
            winner: self.winner(),
            status: self.status(),
            step_number: self.step_number,
            moves,
        }
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            let result = RewindInvariants::check_all(self);
            debug_assert!(result.is_ok(), "invariant violated: {result:?}");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// History index of the entry.
    pub step: usize,
    /// Cell filled by this entry; `None` for the starting board.
    pub position: Option<MovePosition>,
}

/// Everything a renderer needs, captured at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board at the current step.
    pub board: Board,
    /// Completed line on that board, for highlighting.
    pub winner: Option<WinnerResult>,
    /// Derived status.
    pub status: GameStatus,
    /// Current step.
    pub step_number: usize,
    /// One record per history entry, oldest first.
    pub moves: Vec<MoveRecord>,
}

impl GameSnapshot {
    /// Status line shown above the board.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step_number(), 0);
        assert!(game.current_board().is_blank());
        assert_eq!(game.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_apply_move_alternates_players() {
        let mut game = GameState::new();
        assert_eq!(game.apply_move(4), Ok(1));
        assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.next_player(), Player::O);

        assert_eq!(game.apply_move(0), Ok(2));
        assert_eq!(game.current_board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(game.next_player(), Player::X);
    }

    #[test]
    fn test_out_of_range_cell_rejected() {
        let mut game = GameState::new();
        assert_eq!(game.apply_move(9), Err(MoveError::CellOutOfRange(9)));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_jump_does_not_touch_history() {
        let mut game = GameState::new();
        for cell in [0, 4, 8] {
            game.apply_move(cell).unwrap();
        }
        game.jump_to(1).unwrap();
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.next_player(), Player::O);
        assert_eq!(game.current_board().occupied(), 1);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = GameState::new();
        game.apply_move(0).unwrap();
        let before = game.clone();
        assert_eq!(
            game.jump_to(2),
            Err(MoveError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_positions() {
        let mut game = GameState::new();
        game.apply_move(4).unwrap();
        game.apply_move(2).unwrap();
        assert_eq!(
            game.move_positions(),
            vec![
                None,
                Some(MovePosition { row: 2, col: 2 }),
                Some(MovePosition { row: 1, col: 3 }),
            ]
        );
    }

    #[test]
    fn test_status_is_over() {
        let mut game = GameState::new();
        assert!(!game.status().is_over());
        for cell in [0, 3, 1, 4, 2] {
            game.apply_move(cell).unwrap();
        }
        assert!(game.status().is_over());
        game.jump_to(4).unwrap();
        assert!(!game.status().is_over());
    }

    #[test]
    fn test_reset() {
        let mut game = GameState::new();
        game.apply_move(4).unwrap();
        game.reset();
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_snapshot_reflects_current_step() {
        let mut game = GameState::new();
        game.apply_move(4).unwrap();
        game.apply_move(0).unwrap();
        game.jump_to(1).unwrap();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.step_number, 1);
        assert_eq!(snapshot.moves.len(), 3);
        assert_eq!(snapshot.board.occupied(), 1);
        assert_eq!(snapshot.status_text(), "Next player: O");
        assert_eq!(snapshot.winner, None);
    }
}
