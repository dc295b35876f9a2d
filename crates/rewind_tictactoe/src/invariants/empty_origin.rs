//! Empty origin invariant: history always starts from a blank board.

use super::Invariant;
use crate::GameState;

/// Invariant: `history[0]` is the all-empty board.
pub struct EmptyOriginInvariant;

impl Invariant<GameState> for EmptyOriginInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().first().is_some_and(|board| board.is_blank())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}
