//! Rewind Games - Unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use rewind_games::{Cli, Command, GameConfig, LoggingConfig, render, replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Tui { config } => {
            let config = GameConfig::load(config.as_deref())?;
            init_file_logging(config.logging())?;
            tui::run_tui(&config)
        }
        Command::Replay {
            cells,
            jump,
            format,
        } => {
            init_stderr_logging();
            let session = replay(&cells, jump);
            println!("{}", render(&session, format)?);
            Ok(())
        }
    }
}

/// Logs to a file so output never lands on the alternate screen.
fn init_file_logging(config: &LoggingConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.file())
        .with_context(|| format!("Failed to create log file {}", config.file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(file = %config.file().display(), "Logging initialized");
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();
}
