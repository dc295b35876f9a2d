//! Command-line interface for rewind_games.

use crate::replay::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Games - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with move history navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Cells to play in order (0-8, row-major)
        #[arg(required = true)]
        cells: Vec<usize>,

        /// Step to jump to after playing the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Tui { config: None }
    }
}
