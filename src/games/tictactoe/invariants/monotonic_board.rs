//! Monotonic board invariant: each step fills exactly one empty square.

use super::super::{HistoryStore, Square};
use super::Invariant;

/// Invariant: consecutive records differ by exactly one square, which was
/// empty before and holds the recorded mark after.
pub struct MonotonicBoardInvariant;

impl Invariant<HistoryStore> for MonotonicBoardInvariant {
    fn holds(history: &HistoryStore) -> bool {
        let records: Vec<_> = history.logical().collect();

        records.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<usize> = (0..9)
                .filter(|&i| before.squares()[i] != after.squares()[i])
                .collect();

            match (changed.as_slice(), pair[1].placement()) {
                ([index], Some(placement)) => {
                    *index == placement.position.to_index()
                        && before.squares()[*index] == Square::Empty
                        && after.squares()[*index] == Square::Occupied(placement.mark)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Position};

    #[test]
    fn test_fresh_history_holds() {
        assert!(MonotonicBoardInvariant::holds(&HistoryStore::default()));
    }

    #[test]
    fn test_overwrite_violates() {
        let mut store = HistoryStore::default();
        let first = store.current().next(Position::Center, Mark::X);
        let second = first.next(Position::Center, Mark::O);
        store.push(first);
        store.push(second);
        assert!(!MonotonicBoardInvariant::holds(&store));
    }
}
