//! History consistency invariant: step numbers match the boards.

use super::super::{HistoryStore, MoveRecord};
use super::Invariant;

/// Invariant: step 0 is the empty starting record, and the board at step
/// `n` holds exactly `n` marks.
pub struct HistoryConsistentInvariant;

impl Invariant<HistoryStore> for HistoryConsistentInvariant {
    fn holds(history: &HistoryStore) -> bool {
        let starts_empty = history.record_at(0) == Some(&MoveRecord::start());

        starts_empty
            && history
                .logical()
                .enumerate()
                .all(|(step, record)| record.board().occupied() == step)
    }

    fn description() -> &'static str {
        "History starts empty and step n holds n marks"
    }
}
