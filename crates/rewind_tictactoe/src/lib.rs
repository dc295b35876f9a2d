//! Tic-tac-toe game logic with time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure board functions (win detection, move position
//!   resolution)
//! - **GameState**: board history, step pointer, and branching
//! - **GameSession**: command interface with change listeners
//! - **Invariants**: properties checked after every accepted command
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::GameState;
//!
//! let mut game = GameState::new();
//! game.apply_move(4).unwrap();
//! game.apply_move(0).unwrap();
//! game.jump_to(1).unwrap();
//!
//! // Playing from an earlier step discards the later history.
//! game.apply_move(8).unwrap();
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use error::MoveError;
pub use game::{GameSnapshot, GameState, GameStatus, MAX_MOVES, MoveRecord};
pub use position::{MovePosition, Position};
pub use rules::WinnerResult;
pub use session::{Command, GameSession};
pub use types::{Board, Player, Square};
