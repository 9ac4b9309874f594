//! Terminal front end: draws snapshots and feeds key presses back to the
//! game controller.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::config::UiConfig;

use app::App;
use input::command_for;

/// Runs the interactive game until the user quits.
///
/// Tracing must already be routed away from stdout.
#[instrument(skip(config))]
pub fn run_tui(config: &UiConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = restore_on_err(enter_terminal(), restore_terminal)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Best-effort teardown for when setup fails half way.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        error!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        error!(error = %err, "Failed to leave alternate screen");
    }
}

/// Runs `restore` if `result` is an error, then hands the result back.
fn restore_on_err<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

/// Event loop: draw, wait for a key, apply it.
///
/// Input is blocking; every key is handled to completion before the next
/// one is read.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(command) = command_for(key) {
                debug!(?command, "Key mapped");
                app.handle_command(command);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let res: Result<()> = restore_on_err(Err(anyhow::anyhow!("no tty")), || restored.set(true));
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let res = restore_on_err(Ok(7), || restored.set(true));
        assert_eq!(res.unwrap(), 7);
        assert!(!restored.get());
    }
}
