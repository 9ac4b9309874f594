//! First-class events and results for the game controller.
//!
//! Renderers never call controller internals directly; they hand over an
//! [`Action`] and redraw from the next snapshot.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// An event issued by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// A cell was clicked.
    #[display("play {_0}")]
    Cell(Position),
    /// A move-list entry was clicked.
    #[display("jump to step {_0}")]
    Jump(usize),
    /// The direction toggle was clicked.
    #[display("toggle direction")]
    Toggle,
}

/// Why an event left the session unchanged.
///
/// These are not failures: the policy for invalid input is that nothing
/// happens. The reason exists for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Ignored {
    /// The target square is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already won by {_0}")]
    GameWon(Mark),

    /// The requested step does not exist.
    #[display("Step {step} is outside history of length {len}")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Result of handing an event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The session state changed.
    Changed,
    /// The event was ignored.
    Ignored(Ignored),
}

impl Applied {
    /// True if the session state changed.
    pub fn is_changed(&self) -> bool {
        matches!(self, Applied::Changed)
    }
}

impl From<Ignored> for Applied {
    fn from(reason: Ignored) -> Self {
        Applied::Ignored(reason)
    }
}
