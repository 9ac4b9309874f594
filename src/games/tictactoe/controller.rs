//! Session controller: moves, time travel and history direction.
//!
//! The controller owns the whole session. Every operation either changes
//! the session or leaves it untouched; nothing here fails. Renderers read
//! [`GameController::snapshot`] after each call.

use super::action::{Action, Applied, Ignored};
use super::history::{Direction, HistoryStore, MoveRecord};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{self, Outcome};
use super::snapshot::{Snapshot, StepEntry, Status};
use super::{Mark, Position};
use tracing::{debug, error, info, instrument};

/// Total records in a history whose nine moves are all played.
const FULL_HISTORY: usize = 10;

/// Phase of the displayed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Only the starting record exists.
    NoMovesYet,
    /// Moves remain and nobody has won.
    InProgress,
    /// The displayed board has a winner.
    Won(Mark),
    /// Nine moves were played without a winner.
    Drawn,
}

/// Game session: history, displayed step and turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    history: HistoryStore,
    to_move: Mark,
}

impl GameController {
    /// Creates a session with an oldest-first history.
    #[instrument]
    pub fn new() -> Self {
        Self::with_direction(Direction::Forward)
    }

    /// Creates a session whose history starts in the given direction.
    #[instrument]
    pub fn with_direction(direction: Direction) -> Self {
        info!(%direction, "Starting new game session");
        Self {
            history: HistoryStore::new(direction),
            to_move: Mark::X,
        }
    }

    /// The move history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Mark to play next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Logical step currently displayed.
    pub fn current_step(&self) -> usize {
        self.history.current_step()
    }

    /// Current history direction.
    pub fn direction(&self) -> Direction {
        *self.history.direction()
    }

    /// Record currently displayed.
    pub fn current(&self) -> &MoveRecord {
        self.history.current()
    }

    /// Places the mark to move on `pos`.
    ///
    /// Ignored if the displayed board already has a winner or the square is
    /// taken. Records after the displayed step are discarded first, so
    /// playing from an earlier step starts a new branch.
    #[instrument(skip(self), fields(player = %self.to_move, step = self.current_step()))]
    pub fn apply_move(&mut self, pos: Position) -> Applied {
        let current = self.history.current();

        if let Some(mark) = rules::check_winner(current.board()) {
            debug!(winner = %mark, "Move ignored, game already won");
            return Ignored::GameWon(mark).into();
        }

        if !current.board().is_empty(pos) {
            debug!("Move ignored, square occupied");
            return Ignored::SquareOccupied(pos).into();
        }

        let mark = self.to_move;
        let record = current.next(pos, mark);
        let step = self.history.current_step();
        if step < self.history.last_step() {
            info!(
                from = step,
                discarded = self.history.last_step() - step,
                "Branching history"
            );
        }
        self.history.truncate_after(step);
        self.history.push(record);
        self.to_move = mark.opponent();

        if cfg!(debug_assertions)
            && let Err(violations) = HistoryInvariants::check_all(&self.history)
        {
            for violation in violations {
                error!(%violation, "History invariant violated");
            }
        }

        debug!(step = self.current_step(), next = %self.to_move, "Move applied");
        Applied::Changed
    }

    /// Displays the given logical step without touching the history.
    ///
    /// The turn is derived from the step's parity. Out-of-range steps are
    /// ignored.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Applied {
        if !self.history.seek(step) {
            debug!("Jump ignored, step out of range");
            return Ignored::StepOutOfRange {
                step,
                len: self.history.len(),
            }
            .into();
        }
        self.to_move = Mark::for_step(step);
        debug!(next = %self.to_move, "Jumped");
        Applied::Changed
    }

    /// Reverses history order, keeping the displayed step and the labels.
    #[instrument(skip(self), fields(from = %self.direction()))]
    pub fn toggle_direction(&mut self) -> Applied {
        self.history.reverse();
        debug!(to = %self.direction(), step = self.current_step(), "Direction toggled");
        Applied::Changed
    }

    /// Starts over with an empty board, keeping the direction.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::with_direction(self.direction());
    }

    /// Routes a renderer event to the matching operation.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Applied {
        match action {
            Action::Cell(pos) => self.apply_move(pos),
            Action::Jump(step) => self.jump_to(step),
            Action::Toggle => self.toggle_direction(),
        }
    }

    /// Winner evaluation of the displayed board.
    pub fn current_outcome(&self) -> Outcome {
        rules::evaluate(self.history.current().board())
    }

    /// Phase of the displayed position.
    pub fn phase(&self) -> Phase {
        match self.current_outcome() {
            Outcome::Winner { mark, .. } => Phase::Won(mark),
            Outcome::NoWinner if self.history.len() == FULL_HISTORY => Phase::Drawn,
            Outcome::NoWinner if self.history.len() == 1 => Phase::NoMovesYet,
            Outcome::NoWinner => Phase::InProgress,
        }
    }

    /// Status line for the displayed position.
    pub fn status(&self) -> Status {
        match self.phase() {
            Phase::Won(mark) => Status::Winner(mark),
            Phase::Drawn => Status::Draw,
            Phase::NoMovesYet | Phase::InProgress => Status::NextPlayer(self.to_move),
        }
    }

    /// Move-list label for a logical step.
    ///
    /// Numbering always counts from the start of the game, whatever the
    /// display direction.
    pub fn describe_step(&self, step: usize) -> Option<String> {
        let record = self.history.record_at(step)?;
        let label = match record.placement() {
            Some(placement) if step > 0 => format!(
                "Go to move #{} where {} moved on ({}, {})",
                step,
                placement.mark,
                placement.position.col(),
                placement.position.row()
            ),
            _ => "Go to game start".to_string(),
        };
        Some(label)
    }

    /// Builds the renderer view of the session.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        let current_step = self.current_step();
        let steps = self
            .history
            .entries()
            .map(|(step, _)| {
                let label = self.describe_step(step).unwrap_or_default();
                StepEntry::new(step, label, step == current_step)
            })
            .collect();

        Snapshot::new(
            self.history.current().board().clone(),
            self.current_outcome().line(),
            self.status(),
            steps,
            self.direction(),
            self.to_move,
            current_step,
        )
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
