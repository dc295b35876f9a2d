//! Step bounds invariant.

use super::Invariant;
use crate::GameState;

/// Invariant: the step pointer always indexes an existing history entry.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.step_number() < game.history().len()
    }

    fn description() -> &'static str {
        "Step number indexes an existing history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_rejected_jump() {
        let mut game = GameState::new();
        assert!(game.jump_to(5).is_err());
        assert!(StepInBoundsInvariant::holds(&game));
    }
}
