//! Non-interactive replay of a move list.

use crate::tui::{SortOrder, move_items};
use anyhow::{Context, Result};
use rewind_tictactoe::{Command, GameSession};
use tracing::{instrument, warn};

/// Output format for `replay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Board, status, and move list as plain text.
    #[default]
    Text,
    /// The game snapshot as JSON.
    Json,
}

/// Plays `cells` in order, then jumps to `jump` if given.
///
/// Rejected moves and jumps are skipped with a warning, the same way
/// the interactive UI ignores them.
#[instrument]
pub fn replay(cells: &[usize], jump: Option<usize>) -> GameSession {
    let mut session = GameSession::new();
    let commands = cells
        .iter()
        .map(|&cell| Command::Play(cell))
        .chain(jump.map(Command::JumpTo));

    for command in commands {
        if let Err(e) = session.dispatch(command) {
            warn!(?command, error = %e, "Skipping rejected command");
        }
    }
    session
}

/// Formats the session for printing.
#[instrument(skip(session))]
pub fn render(session: &GameSession, format: OutputFormat) -> Result<String> {
    let snapshot = session.snapshot();
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")
        }
        OutputFormat::Text => {
            let mut out = format!("{}\n\n{}\n", snapshot.board, snapshot.status_text());
            for item in move_items(&snapshot, SortOrder::Ascending, true) {
                let marker = if item.is_current { '>' } else { ' ' };
                out.push_str(&format!("{} {}\n", marker, item.label));
            }
            Ok(out)
        }
    }
}
