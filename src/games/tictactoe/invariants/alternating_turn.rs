//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{HistoryStore, Mark};
use super::Invariant;

/// Invariant: the move at logical step `n` was made by the mark due at
/// step `n - 1`, so X always moves first and marks alternate.
pub struct AlternatingTurnInvariant;

impl Invariant<HistoryStore> for AlternatingTurnInvariant {
    fn holds(history: &HistoryStore) -> bool {
        history
            .logical()
            .enumerate()
            .skip(1)
            .all(|(step, record)| record.mark() == Some(Mark::for_step(step - 1)))
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_alternation_holds() {
        let mut store = HistoryStore::default();
        let first = store.current().next(Position::Center, Mark::X);
        let second = first.next(Position::TopLeft, Mark::O);
        store.push(first);
        store.push(second);
        assert!(AlternatingTurnInvariant::holds(&store));
    }

    #[test]
    fn test_o_first_violates() {
        let mut store = HistoryStore::default();
        let first = store.current().next(Position::Center, Mark::O);
        store.push(first);
        assert!(!AlternatingTurnInvariant::holds(&store));
    }
}
