//! Command interface and change notification around [`GameState`].

use super::error::MoveError;
use super::game::{GameSnapshot, GameState};
use tracing::{debug, instrument};

/// A user intent forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark on a cell (0-8).
    Play(usize),
    /// Move the step pointer to a history entry.
    JumpTo(usize),
    /// Start a fresh game.
    Reset,
}

type Listener = Box<dyn FnMut(&GameSnapshot)>;

/// A game plus the listeners that re-render it.
///
/// Listeners run synchronously, in registration order, after each
/// accepted command. Rejected commands notify nobody.
#[derive(Default)]
pub struct GameSession {
    state: GameState,
    listeners: Vec<Listener>,
}

impl GameSession {
    /// Creates a session around a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Registers a listener for snapshots produced by accepted commands.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
        debug!(listeners = self.listeners.len(), "Listener subscribed");
    }

    /// Applies a command and notifies listeners if it was accepted.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason from [`GameState`]; state is
    /// unchanged and no listener runs.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> Result<(), MoveError> {
        match command {
            Command::Play(cell) => {
                self.state.apply_move(cell)?;
            }
            Command::JumpTo(step) => self.state.jump_to(step)?,
            Command::Reset => self.state.reset(),
        }

        let snapshot = self.state.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
        Ok(())
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
