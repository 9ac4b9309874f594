//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. Rules know nothing about history or
//! turn order, so the controller can evaluate any recorded snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Outcome, check_winner, evaluate};
