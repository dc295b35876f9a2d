//! Keyboard mapping.

use rewind_tictactoe::Position;
use crossterm::event::KeyCode;

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor with an arrow key.
    Cursor(KeyCode),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a cell directly (0-8).
    Play(usize),
    /// Show the previous step.
    StepBack,
    /// Show the next step.
    StepForward,
    /// Show the starting board.
    First,
    /// Show the latest step.
    Last,
    /// Switch arrow keys and Enter between the board and the move list.
    ToggleFocus,
    /// Flip the move list order.
    ToggleSort,
    /// Start a new game.
    NewGame,
    /// Leave the application.
    Quit,
}

/// Maps a key to an action, if it has one.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Play(d as usize - 1)),
        KeyCode::Char('u') | KeyCode::Backspace => Some(Action::StepBack),
        KeyCode::Char('r') => Some(Action::StepForward),
        KeyCode::Home => Some(Action::First),
        KeyCode::End => Some(Action::Last),
        KeyCode::Tab => Some(Action::ToggleFocus),
        KeyCode::Char('s') => Some(Action::ToggleSort),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Play(0)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Play(8)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Left), Position::BottomLeft);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Tab), Position::TopRight);
    }

    #[test]
    fn test_tab_toggles_focus() {
        assert_eq!(action_for(KeyCode::Tab), Some(Action::ToggleFocus));
    }
}
