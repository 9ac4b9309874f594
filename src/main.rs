//! tictactoe_rewind - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use std::path::Path;
use tictactoe_rewind::{Action, Applied, GameController, Position, UiConfig, run_tui};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = UiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Play { reversed, log_file } => {
            let reversed = reversed || *config.start_reversed();
            let mut config = config.with_start_reversed(reversed);
            if let Some(log_file) = log_file {
                config = config.with_log_file(log_file);
            }
            init_file_logging(config.log_file())?;
            run_tui(&config)
        }
        Command::Replay {
            moves,
            reversed,
            jump,
            format,
        } => {
            init_stderr_logging();
            run_replay(&config, &moves, reversed, jump, format)
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Setup logging to file to avoid interfering with the TUI.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Applies moves to a fresh session and prints the resulting snapshot.
#[instrument(skip(config, moves), fields(moves = moves.len()))]
fn run_replay(
    config: &UiConfig,
    moves: &[Position],
    reversed: bool,
    jump: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let mut game = GameController::with_direction(config.direction());

    let actions = moves
        .iter()
        .map(|pos| Action::Cell(*pos))
        .chain(reversed.then_some(Action::Toggle))
        .chain(jump.map(Action::Jump));

    for action in actions {
        if let Applied::Ignored(reason) = game.dispatch(action) {
            warn!(%action, %reason, "Action ignored");
        }
    }

    let snapshot = game.snapshot();
    info!(status = %snapshot.status_text(), "Replay finished");

    match format {
        OutputFormat::Text => print!("{}", snapshot.to_text()),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
            println!("{}", json);
        }
    }
    Ok(())
}
