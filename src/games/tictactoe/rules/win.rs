//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, scanned rows first, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board for a line of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No line of three on the board.
    NoWinner,
    /// `mark` owns every square of `line`.
    Winner {
        /// The winning mark.
        mark: Mark,
        /// The three squares forming the line.
        line: [Position; 3],
    },
}

impl Outcome {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::NoWinner => None,
            Outcome::Winner { mark, .. } => Some(*mark),
        }
    }

    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::NoWinner => None,
            Outcome::Winner { line, .. } => Some(*line),
        }
    }
}

/// Evaluates the board, returning the first complete line found.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(mark) = board.get(a).mark()
            && board.get(b).mark() == Some(mark)
            && board.get(c).mark() == Some(mark)
        {
            return Outcome::Winner { mark, line };
        }
    }

    Outcome::NoWinner
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark has three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    evaluate(board).winner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), Outcome::NoWinner);
    }

    #[test]
    fn test_every_line_detected_for_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for line in LINES {
                let mut board = Board::new();
                for pos in line {
                    board.set(pos, Square::Occupied(mark));
                }
                assert_eq!(evaluate(&board), Outcome::Winner { mark, line });
            }
        }
    }

    #[test]
    fn test_winner_diagonal_indices() {
        let board = Board::new()
            .with(Position::TopRight, Mark::O)
            .with(Position::Center, Mark::O)
            .with(Position::BottomLeft, Mark::O);
        let line = evaluate(&board).line().map(|l| l.map(Position::to_index));
        assert_eq!(line, Some([2, 4, 6]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::O)
            .with(Position::TopRight, Mark::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // X fills the top row and the left column; the row is reported.
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::X)
            .with(Position::TopRight, Mark::X)
            .with(Position::MiddleLeft, Mark::X)
            .with(Position::BottomLeft, Mark::X);
        assert_eq!(evaluate(&board).line(), Some(LINES[0]));
    }
}
