//! Application state and logic.

use crate::config::UiConfig;
use crate::games::tictactoe::{Action, Applied, GameController, Position, Snapshot};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

use super::input::{Command, Focus, move_cursor};

/// Main application state.
///
/// Holds the session and the latest snapshot; drawing only ever reads the
/// snapshot.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    snapshot: Snapshot,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    show_coordinates: bool,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: &UiConfig) -> Self {
        let controller = GameController::with_direction(config.direction());
        let snapshot = controller.snapshot();
        Self {
            controller,
            snapshot,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            show_coordinates: *config.show_coordinates(),
            notice: None,
            should_quit: false,
        }
    }

    /// Latest snapshot of the session.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Logical step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Whether empty cells show their coordinates.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Feedback about the last ignored input.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a command from the input layer.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::Restart => {
                info!("Restarting game");
                self.controller.restart();
                self.refresh(Applied::Changed);
            }
            Command::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.selected_step = *self.snapshot.current_step();
            }
            Command::ToggleDirection => self.dispatch(Action::Toggle),
            Command::Play(pos) => {
                self.cursor = pos;
                self.dispatch(Action::Cell(pos));
            }
            Command::Select => match self.focus {
                Focus::Board => self.dispatch(Action::Cell(self.cursor)),
                Focus::History => self.dispatch(Action::Jump(self.selected_step)),
            },
            Command::Navigate(key) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => self.move_selection(key),
            },
        }
    }

    fn dispatch(&mut self, action: Action) {
        let applied = self.controller.dispatch(action);
        self.refresh(applied);
    }

    fn refresh(&mut self, applied: Applied) {
        self.snapshot = self.controller.snapshot();
        self.notice = match applied {
            Applied::Changed => None,
            Applied::Ignored(reason) => {
                debug!(%reason, "Input ignored");
                Some(reason.to_string())
            }
        };
        let last = self.snapshot.steps().len().saturating_sub(1);
        if self.selected_step > last || self.focus == Focus::Board {
            self.selected_step = *self.snapshot.current_step();
        }
    }

    /// Moves the list selection one entry up or down in display order.
    fn move_selection(&mut self, key: KeyCode) {
        let steps = self.snapshot.steps();
        let Some(index) = steps.iter().position(|e| *e.step() == self.selected_step) else {
            return;
        };
        let target = match key {
            KeyCode::Up => index.checked_sub(1),
            KeyCode::Down => Some(index + 1),
            _ => None,
        };
        if let Some(entry) = target.and_then(|i| steps.get(i)) {
            self.selected_step = *entry.step();
        }
    }

    /// Display index of the selected entry.
    pub fn selected_index(&self) -> Option<usize> {
        self.snapshot
            .steps()
            .iter()
            .position(|e| *e.step() == self.selected_step())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Direction, Mark, Status};

    fn app() -> App {
        App::new(&UiConfig::default())
    }

    #[test]
    fn test_select_on_board_plays_cursor() {
        let mut app = app();
        app.handle_command(Command::Select);
        assert_eq!(app.snapshot().board().get(Position::Center).mark(), Some(Mark::X));
        assert_eq!(*app.snapshot().status(), Status::NextPlayer(Mark::O));
    }

    #[test]
    fn test_occupied_cell_sets_notice() {
        let mut app = app();
        app.handle_command(Command::Play(Position::Center));
        app.handle_command(Command::Play(Position::Center));
        assert!(app.notice().is_some());
        assert_eq!(app.snapshot().steps().len(), 2);
    }

    #[test]
    fn test_history_navigation_follows_display_order() {
        let mut app = app();
        app.handle_command(Command::Play(Position::Center));
        app.handle_command(Command::Play(Position::TopLeft));
        app.handle_command(Command::ToggleDirection);
        assert_eq!(*app.snapshot().direction(), Direction::Reversed);

        app.handle_command(Command::SwitchFocus);
        assert_eq!(app.selected_step(), 2);
        assert_eq!(app.selected_index(), Some(0));
        // Newest first, so moving down goes back in time.
        app.handle_command(Command::Navigate(KeyCode::Down));
        assert_eq!(app.selected_step(), 1);
        assert_eq!(app.selected_index(), Some(1));
        app.handle_command(Command::Select);
        assert_eq!(*app.snapshot().current_step(), 1);
        assert_eq!(*app.snapshot().to_move(), Mark::O);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_command(Command::Quit);
        assert!(app.should_quit());
    }
}
