//! Immutable view of a session handed to renderers.

use super::history::Direction;
use super::{Board, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The displayed board has a line of three.
    #[display("Winner: {_0}")]
    Winner(Mark),
    /// All nine moves were played without a line.
    #[display("Draw!")]
    Draw,
    /// The game continues with this mark to move.
    #[display("Next player: {_0}")]
    NextPlayer(Mark),
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct StepEntry {
    /// Logical step this entry jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// True for the step currently displayed.
    current: bool,
}

impl StepEntry {
    pub(crate) fn new(step: usize, label: String, current: bool) -> Self {
        Self {
            step,
            label,
            current,
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board at the current step.
    board: Board,
    /// Squares to highlight, when the current board has a winner.
    winning_line: Option<[Position; 3]>,
    /// Structured status.
    status: Status,
    /// Status text as displayed.
    status_text: String,
    /// Move list in display order.
    steps: Vec<StepEntry>,
    /// Display direction of the move list.
    direction: Direction,
    /// Mark to play next.
    to_move: Mark,
    /// Logical step currently displayed.
    current_step: usize,
}

impl Snapshot {
    pub(crate) fn new(
        board: Board,
        winning_line: Option<[Position; 3]>,
        status: Status,
        steps: Vec<StepEntry>,
        direction: Direction,
        to_move: Mark,
        current_step: usize,
    ) -> Self {
        Self {
            board,
            winning_line,
            status_text: status.to_string(),
            status,
            steps,
            direction,
            to_move,
            current_step,
        }
    }

    /// True if `pos` is part of the highlighted winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }

    /// Plain-text rendering: board, status, then the move list with the
    /// current entry marked by `>`.
    pub fn to_text(&self) -> String {
        let mut out = self.board.display();
        out.push_str("\n\n");
        out.push_str(&self.status_text);
        out.push('\n');
        for entry in &self.steps {
            let marker = if entry.current { '>' } else { ' ' };
            out.push_str(&format!("{marker} {}. {}\n", entry.step, entry.label));
        }
        out
    }
}
