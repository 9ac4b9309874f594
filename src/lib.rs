//! Tic-tac-toe with move history and time travel.
//!
//! The game core is a [`GameController`] over a direction-aware
//! [`HistoryStore`] and a pure winner rule. Front ends read a [`Snapshot`]
//! after every event and send [`Action`]s back.
//!
//! # Architecture
//!
//! - **Rules**: winner and draw evaluation of a single board
//! - **History**: one board per move, stored oldest or newest first
//! - **Controller**: moves, branch truncation, jumps, direction toggling
//! - **TUI**: ratatui front end driven by snapshots
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{GameController, Position};
//!
//! let mut game = GameController::new();
//! game.apply_move(Position::TopLeft);
//! game.apply_move(Position::Center);
//! game.jump_to(1);
//! assert_eq!(game.snapshot().status_text(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, UiConfig};

// Crate-level exports - Terminal UI
pub use tui::run_tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, AlternatingTurnInvariant, Applied, Board, Direction, GameController,
    HistoryConsistentInvariant, HistoryInvariants, HistoryStore, Ignored, Invariant,
    InvariantSet, InvariantViolation, Mark, MonotonicBoardInvariant, MoveRecord, Outcome, Phase,
    Placement, Position, Snapshot, Square, Status, StepEntry, storage_index,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{LINES, check_winner, evaluate, is_draw, is_full};
