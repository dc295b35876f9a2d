//! Single delta invariant: each history entry adds exactly one mark.

use super::Invariant;
use crate::{Board, GameState, Player, Position, Square};

/// Invariant: consecutive history entries differ in exactly one square,
/// that square was empty before, and it holds the mark of the player
/// whose turn it was.
pub struct SingleDeltaInvariant;

impl SingleDeltaInvariant {
    fn valid_step(step: usize, before: &Board, after: &Board) -> bool {
        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| before.get(pos) != after.get(pos))
            .collect();

        match changed.as_slice() {
            [pos] => {
                before.is_empty(*pos)
                    && after.get(*pos) == Square::Occupied(Player::for_step(step))
            }
            _ => false,
        }
    }
}

impl Invariant<GameState> for SingleDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| Self::valid_step(step, &pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark for the player on turn"
    }
}
