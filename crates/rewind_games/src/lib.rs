//! Rewind Games - terminal tic-tac-toe with move history navigation.
//!
//! # Architecture
//!
//! - **Cli**: command-line parsing (interactive TUI or scripted replay)
//! - **Config**: TOML display and logging settings
//! - **Replay**: applies a move list and prints the resulting state
//! - **Tui**: ratatui front end rendering [`rewind_tictactoe`] snapshots

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DisplayConfig, GameConfig, LoggingConfig};
pub use replay::{OutputFormat, render, replay};
pub use tui::{Action, App, Focus, MoveItem, SortOrder};
