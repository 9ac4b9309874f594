//! Command-line interface for tictactoe_rewind.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_rewind::Position;

/// Tic-tac-toe with move history, time travel and a reversible move list
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Show the move list newest first
        #[arg(long)]
        reversed: bool,

        /// Override the log file from the config
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply moves without a UI and print the resulting view
    Replay {
        /// Moves as indices 0-8 or labels such as "center"
        #[arg(value_parser = parse_position)]
        moves: Vec<Position>,

        /// Toggle the move list after the moves are applied
        #[arg(long)]
        reversed: bool,

        /// Jump to this step after the moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints the final view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    Text,
    /// The snapshot as pretty-printed JSON
    Json,
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a square (use 0-8 or a label like top-left)", s))
}
