//! Terminal UI for Rewind Games.

mod app;
mod input;
mod moves;
mod ui;

pub use app::{App, Focus};
pub use input::{Action, action_for, move_cursor};
pub use moves::{MoveItem, SortOrder, describe, move_items};

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting Rewind Games TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard::new(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")?;

    let mut app = App::new(config.display());
    let res = run_app(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Runs a cleanup action when dropped.
///
/// Created right after raw mode is enabled so that every exit from
/// [`run_tui`], including early `?` returns, restores the terminal.
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leaves raw mode and the alternate screen. Errors are ignored: this
/// runs during unwinding and after failed setup alike.
fn restore_terminal() {
    debug!("Restoring terminal");
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Draw/read loop. Each key press is handled before the next frame is
/// drawn.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for(key.code)
        {
            app.handle(action);
        }
    }
    Ok(())
}
