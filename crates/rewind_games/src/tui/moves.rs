//! Move list labels and ordering.

use rewind_tictactoe::{GameSnapshot, MoveRecord};
use serde::{Deserialize, Serialize};

/// Display order of the move list.
///
/// Owned by the front end; toggling it never touches game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort moves in descending order",
            Self::Descending => "Sort moves in ascending order",
        }
    }
}

/// One rendered row of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveItem {
    /// History step this row jumps to when selected.
    pub step: usize,
    /// Row text.
    pub label: String,
    /// Whether this is the step currently shown.
    pub is_current: bool,
}

/// Describes a history entry.
///
/// The current entry reads "Game start" or "Move #n"; the others read
/// "Go to game start" or "Go to move #n".
pub fn describe(record: &MoveRecord, is_current: bool, show_positions: bool) -> String {
    let mut label = match (record.step, is_current) {
        (0, true) => "Game start".to_string(),
        (0, false) => "Go to game start".to_string(),
        (n, true) => format!("Move #{}", n),
        (n, false) => format!("Go to move #{}", n),
    };
    if show_positions && let Some(position) = record.position {
        label.push(' ');
        label.push_str(&position.to_string());
    }
    label
}

/// Builds the move list rows in the requested order.
pub fn move_items(snapshot: &GameSnapshot, order: SortOrder, show_positions: bool) -> Vec<MoveItem> {
    let mut items: Vec<MoveItem> = snapshot
        .moves
        .iter()
        .map(|record| {
            let is_current = record.step == snapshot.step_number;
            MoveItem {
                step: record.step,
                label: describe(record, is_current, show_positions),
                is_current,
            }
        })
        .collect();

    if order == SortOrder::Descending {
        items.reverse();
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{GameState, MovePosition};

    #[test]
    fn test_describe_labels() {
        let start = MoveRecord { step: 0, position: None };
        let third = MoveRecord {
            step: 3,
            position: Some(MovePosition { row: 2, col: 1 }),
        };

        assert_eq!(describe(&start, true, true), "Game start");
        assert_eq!(describe(&start, false, true), "Go to game start");
        assert_eq!(describe(&third, true, true), "Move #3 (2, 1)");
        assert_eq!(describe(&third, false, true), "Go to move #3 (2, 1)");
        assert_eq!(describe(&third, false, false), "Go to move #3");
    }

    #[test]
    fn test_descending_reverses_without_touching_game() {
        let mut game = GameState::new();
        game.apply_move(4).unwrap();
        game.apply_move(0).unwrap();
        let before = game.clone();
        let snapshot = game.snapshot();

        let ascending: Vec<usize> = move_items(&snapshot, SortOrder::Ascending, true)
            .iter()
            .map(|item| item.step)
            .collect();
        let descending: Vec<usize> = move_items(&snapshot, SortOrder::Descending, true)
            .iter()
            .map(|item| item.step)
            .collect();

        assert_eq!(ascending, vec![0, 1, 2]);
        assert_eq!(descending, vec![2, 1, 0]);
        assert_eq!(game, before);
    }

    #[test]
    fn test_current_item_marked() {
        let mut game = GameState::new();
        game.apply_move(4).unwrap();
        game.apply_move(0).unwrap();
        game.jump_to(1).unwrap();

        let items = move_items(&game.snapshot(), SortOrder::Ascending, true);
        let current: Vec<_> = items.iter().filter(|item| item.is_current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].label, "Move #1 (2, 2)");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle().toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort moves in descending order");
    }
}
