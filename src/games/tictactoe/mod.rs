//! Tic-tac-toe with time travel.
//!
//! Leaf to root: [`rules`] evaluates a single board, [`history`] stores the
//! board after every move, and [`controller`] drives a session on top of
//! both and produces [`Snapshot`]s for renderers.

pub mod action;
pub mod controller;
pub mod history;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod snapshot;
pub mod types;

pub use action::{Action, Applied, Ignored};
pub use controller::{GameController, Phase};
pub use history::{Direction, HistoryStore, MoveRecord, Placement, storage_index};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use position::Position;
pub use rules::Outcome;
pub use snapshot::{Snapshot, StepEntry, Status};
pub use types::{Board, Mark, Square};
