//! Application state and logic.

use super::input::{Action, move_cursor};
use super::moves::{MoveItem, SortOrder, move_items};
use crate::config::DisplayConfig;
use crossterm::event::KeyCode;
use rewind_tictactoe::{Command, GameSession, GameSnapshot, Position};
use tracing::{debug, info, instrument};

/// Which pane the arrow keys and Enter act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor; Enter plays.
    #[default]
    Board,
    /// Arrows move the move-list selection; Enter jumps there.
    Moves,
}

/// Main application state.
///
/// The game itself lives in a [`GameSession`]; the app only adds what
/// the terminal needs on top of it: a cursor, the move list selection
/// and order, and the quit flag.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    sort_order: SortOrder,
    show_positions: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(display))]
    pub fn new(display: &DisplayConfig) -> Self {
        let mut session = GameSession::new();
        session.subscribe(|snapshot| {
            info!(
                step = snapshot.step_number,
                history = snapshot.moves.len(),
                status = %snapshot.status,
                "Game updated"
            );
        });

        Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            sort_order: *display.sort_order(),
            show_positions: *display.show_positions(),
            should_quit: false,
        }
    }

    /// Current game snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane that receives arrow keys and Enter.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Move list rows in display order.
    pub fn move_items(&self) -> Vec<MoveItem> {
        move_items(&self.snapshot(), self.sort_order, self.show_positions)
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a decoded key press.
    ///
    /// Rejected game commands are ignored.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        let state = self.session.state();
        let step = state.step_number();
        let last = state.history().len() - 1;

        let command = match action {
            Action::Cursor(key) => {
                match self.focus {
                    Focus::Board => self.cursor = move_cursor(self.cursor, key),
                    Focus::Moves => self.move_selection(key),
                }
                None
            }
            Action::PlayCursor => match self.focus {
                Focus::Board => Some(Command::Play(self.cursor.to_index())),
                Focus::Moves => Some(Command::JumpTo(self.selected_step)),
            },
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => {
                        self.selected_step = step;
                        Focus::Moves
                    }
                    Focus::Moves => Focus::Board,
                };
                debug!(focus = ?self.focus, "Focus toggled");
                None
            }
            Action::Play(cell) => {
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
                Some(Command::Play(cell))
            }
            Action::StepBack => step.checked_sub(1).map(Command::JumpTo),
            Action::StepForward => Some(Command::JumpTo(step + 1)),
            Action::First => Some(Command::JumpTo(0)),
            Action::Last => Some(Command::JumpTo(last)),
            Action::ToggleSort => {
                self.sort_order = self.sort_order.toggle();
                debug!(order = ?self.sort_order, "Sort order toggled");
                None
            }
            Action::NewGame => Some(Command::Reset),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
                None
            }
        };

        if let Some(command) = command
            && let Err(e) = self.session.dispatch(command)
        {
            debug!(?command, error = %e, "Command ignored");
        }
    }

    /// Moves the list selection one row up or down in display order.
    ///
    /// A selection left stale by branching or a new game restarts from
    /// the current step.
    fn move_selection(&mut self, key: KeyCode) {
        let items = self.move_items();
        let current = items
            .iter()
            .position(|item| item.step == self.selected_step)
            .or_else(|| items.iter().position(|item| item.is_current))
            .unwrap_or(0);

        let row = match key {
            KeyCode::Up => current.saturating_sub(1),
            KeyCode::Down => (current + 1).min(items.len().saturating_sub(1)),
            _ => current,
        };
        if let Some(item) = items.get(row) {
            self.selected_step = item.step;
        }
    }
}
