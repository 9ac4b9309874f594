//! Move history with direction-aware storage.
//!
//! Records are addressed by *logical step*: 0 is the empty starting board,
//! `n` is the board after the `n`th move. Physical storage order follows the
//! [`Direction`] flag, so reversing the history for display is a real
//! reversal of the backing vector. All translation between the two goes
//! through [`storage_index`].

use super::{Board, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Order in which history records are stored and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
pub enum Direction {
    /// Oldest record first.
    #[default]
    #[display("oldest first")]
    Forward,
    /// Newest record first.
    #[display("newest first")]
    Reversed,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Direction::Forward => Direction::Reversed,
            Direction::Reversed => Direction::Forward,
        }
    }
}

/// Translates a logical step into a storage index.
///
/// `len` is the number of stored records. The caller guarantees
/// `step < len`.
pub fn storage_index(step: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Forward => step,
        Direction::Reversed => len - 1 - step,
    }
}

/// The square filled by a move and the mark placed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// Square that was filled.
    pub position: Position,
    /// Mark placed on it.
    pub mark: Mark,
}

/// One entry in the history: the board after a move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Board snapshot after the move.
    board: Board,
    /// The move that produced this board; `None` for the starting record.
    placement: Option<Placement>,
}

impl MoveRecord {
    /// The empty starting record.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            placement: None,
        }
    }

    /// Builds the record that follows `self` when `mark` plays `position`.
    pub fn next(&self, position: Position, mark: Mark) -> Self {
        Self {
            board: self.board.with(position, mark),
            placement: Some(Placement::new(position, mark)),
        }
    }

    /// Column of the filled square.
    pub fn col(&self) -> Option<usize> {
        self.placement.map(|p| p.position.col())
    }

    /// Row of the filled square.
    pub fn row(&self) -> Option<usize> {
        self.placement.map(|p| p.position.row())
    }

    /// Mark that made this move.
    pub fn mark(&self) -> Option<Mark> {
        self.placement.map(|p| p.mark)
    }
}

/// Ordered move records plus the current position and direction.
///
/// Always holds at least the starting record.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct HistoryStore {
    /// Records in storage order.
    #[getter(skip)]
    records: Vec<MoveRecord>,
    /// Storage index of the current record.
    #[getter(skip)]
    cursor: usize,
    /// Current storage and display direction.
    direction: Direction,
}

impl HistoryStore {
    /// Creates a history holding only the empty starting record.
    #[instrument]
    pub fn new(direction: Direction) -> Self {
        Self {
            records: vec![MoveRecord::start()],
            cursor: 0,
            direction,
        }
    }

    /// Number of records (logical length).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true: the starting record is always present.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the last logical step.
    pub fn last_step(&self) -> usize {
        self.len() - 1
    }

    fn index_of(&self, step: usize) -> usize {
        storage_index(step, self.len(), self.direction)
    }

    /// Record at the given logical step.
    pub fn record_at(&self, step: usize) -> Option<&MoveRecord> {
        if step < self.len() {
            self.records.get(self.index_of(step))
        } else {
            None
        }
    }

    /// Logical step of the current record.
    pub fn current_step(&self) -> usize {
        // The mapping is its own inverse.
        storage_index(self.cursor, self.len(), self.direction)
    }

    /// The current record.
    pub fn current(&self) -> &MoveRecord {
        &self.records[self.cursor]
    }

    /// Makes `step` the current record. Returns `false` if out of range.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn seek(&mut self, step: usize) -> bool {
        if step >= self.len() {
            return false;
        }
        self.cursor = self.index_of(step);
        true
    }

    /// Discards every record after the given logical step.
    #[instrument(skip(self), fields(len = self.len(), direction = ?self.direction))]
    pub fn truncate_after(&mut self, step: usize) {
        if step >= self.last_step() {
            return;
        }
        let current = self.current_step().min(step);
        match self.direction {
            Direction::Forward => self.records.truncate(step + 1),
            Direction::Reversed => {
                let drop = self.len() - 1 - step;
                self.records.drain(..drop);
            }
        }
        debug!(kept = self.len(), "Truncated history");
        self.cursor = self.index_of(current);
    }

    /// Adds a record at the logically latest end and makes it current.
    #[instrument(skip(self, record), fields(len = self.len(), direction = ?self.direction))]
    pub fn push(&mut self, record: MoveRecord) {
        match self.direction {
            Direction::Forward => self.records.push(record),
            Direction::Reversed => self.records.insert(0, record),
        }
        self.cursor = self.index_of(self.last_step());
    }

    /// Reverses storage order and flips the direction.
    ///
    /// The cursor is remapped so the same logical step stays current.
    #[instrument(skip(self), fields(from = ?self.direction))]
    pub fn reverse(&mut self) {
        self.records.reverse();
        self.direction = self.direction.flip();
        self.cursor = self.last_step() - self.cursor;
    }

    /// Records in storage (display) order, paired with their logical step.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &MoveRecord)> {
        let len = self.len();
        let direction = self.direction;
        self.records
            .iter()
            .enumerate()
            .map(move |(index, record)| (storage_index(index, len, direction), record))
    }

    /// Records in logical order, from the starting board onwards.
    pub fn logical(&self) -> impl Iterator<Item = &MoveRecord> {
        (0..self.len()).filter_map(move |step| self.record_at(step))
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(Direction::Forward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(moves: &[Position], direction: Direction) -> HistoryStore {
        let mut store = HistoryStore::new(direction);
        for (i, pos) in moves.iter().enumerate() {
            let next = store.current().next(*pos, Mark::for_step(i));
            store.push(next);
        }
        store
    }

    fn placed(store: &HistoryStore, step: usize) -> Option<Position> {
        store
            .record_at(step)
            .and_then(|r| r.placement().map(|p| p.position))
    }

    #[test]
    fn test_storage_index_forward_is_identity() {
        for step in 0..5 {
            assert_eq!(storage_index(step, 5, Direction::Forward), step);
        }
    }

    #[test]
    fn test_storage_index_reversed_mirrors() {
        assert_eq!(storage_index(0, 5, Direction::Reversed), 4);
        assert_eq!(storage_index(4, 5, Direction::Reversed), 0);
        assert_eq!(storage_index(2, 5, Direction::Reversed), 2);
        assert_eq!(storage_index(0, 1, Direction::Reversed), 0);
    }

    #[test]
    fn test_new_store_holds_start_record() {
        let store = HistoryStore::default();
        assert_eq!(store.len(), 1);
        assert_eq!(store.current_step(), 0);
        assert_eq!(store.current(), &MoveRecord::start());
        assert!(store.current().placement().is_none());
    }

    #[test]
    fn test_push_reversed_prepends() {
        let store = store_with(&[Position::Center, Position::TopLeft], Direction::Reversed);
        assert_eq!(store.len(), 3);
        assert_eq!(store.current_step(), 2);
        assert_eq!(placed(&store, 1), Some(Position::Center));
        assert_eq!(placed(&store, 2), Some(Position::TopLeft));
        let order: Vec<usize> = store.entries().map(|(step, _)| step).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_reverse_keeps_logical_step() {
        let mut store = store_with(
            &[Position::Center, Position::TopLeft, Position::BottomRight],
            Direction::Forward,
        );
        assert!(store.seek(1));
        store.reverse();
        assert_eq!(*store.direction(), Direction::Reversed);
        assert_eq!(store.current_step(), 1);
        assert_eq!(store.current().placement().map(|p| p.position), Some(Position::Center));
        assert_eq!(placed(&store, 3), Some(Position::BottomRight));
        store.reverse();
        assert_eq!(*store.direction(), Direction::Forward);
        assert_eq!(store.current_step(), 1);
    }

    #[test]
    fn test_truncate_after_forward() {
        let mut store = store_with(
            &[Position::Center, Position::TopLeft, Position::BottomRight],
            Direction::Forward,
        );
        store.truncate_after(1);
        assert_eq!(store.len(), 2);
        assert_eq!(placed(&store, 1), Some(Position::Center));
        assert_eq!(store.current_step(), 1);
    }

    #[test]
    fn test_truncate_after_reversed_drops_head() {
        let mut store = store_with(
            &[Position::Center, Position::TopLeft, Position::BottomRight],
            Direction::Reversed,
        );
        assert!(store.seek(0));
        store.truncate_after(0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.current(), &MoveRecord::start());
        assert_eq!(store.current_step(), 0);
    }

    #[test]
    fn test_truncate_after_last_step_is_noop() {
        let mut store = store_with(&[Position::Center], Direction::Forward);
        store.truncate_after(1);
        store.truncate_after(7);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_seek_out_of_range_rejected() {
        let mut store = store_with(&[Position::Center], Direction::Forward);
        assert!(!store.seek(2));
        assert_eq!(store.current_step(), 1);
    }

    #[test]
    fn test_logical_order_independent_of_direction() {
        let moves = [Position::Center, Position::TopLeft];
        let forward: Vec<_> = store_with(&moves, Direction::Forward).logical().cloned().collect();
        let reversed: Vec<_> = store_with(&moves, Direction::Reversed).logical().cloned().collect();
        assert_eq!(forward, reversed);
    }
}
