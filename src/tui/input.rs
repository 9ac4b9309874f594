//! Key handling for the terminal UI.

use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the UI.
    Quit,
    /// Start a new game.
    Restart,
    /// Swap focus between board and move list.
    SwitchFocus,
    /// Reverse the move list.
    ToggleDirection,
    /// Move the board cursor or the list selection.
    Navigate(KeyCode),
    /// Play the cell under the cursor, or jump to the selected entry.
    Select,
    /// Play a cell directly.
    Play(Position),
}

/// Maps a key press to a command, if it has one.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char('t') => Some(Command::ToggleDirection),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::SwitchFocus),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Select),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::Play),
        KeyCode::Char('h') => Some(Command::Navigate(KeyCode::Left)),
        KeyCode::Char('j') => Some(Command::Navigate(KeyCode::Down)),
        KeyCode::Char('k') => Some(Command::Navigate(KeyCode::Up)),
        KeyCode::Char('l') => Some(Command::Navigate(KeyCode::Right)),
        code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
            Some(Command::Navigate(code))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (col, row) = (cursor.col(), cursor.row());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|c| (c, row)),
        KeyCode::Right => Some((col + 1, row)),
        KeyCode::Up => row.checked_sub(1).map(|r| (col, r)),
        KeyCode::Down => Some((col, row + 1)),
        _ => None,
    };

    target
        .and_then(|(col, row)| Position::from_col_row(col, row))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
    }

    #[test]
    fn test_digit_keys_play_cells() {
        let key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        assert_eq!(command_for(key), Some(Command::Play(Position::Center)));
        let key = KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE);
        assert_eq!(command_for(key), None);
    }

    #[test]
    fn test_vi_keys_navigate() {
        let key = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(command_for(key), Some(Command::Navigate(KeyCode::Up)));
    }
}
