//! TUI (Terminal User Interface) runtime loop.
//!
//! This module contains the terminal setup, event loop, and teardown
//! logic for the interactive indicator.

use std::io;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{debug, trace};

use crate::input;
use crate::ui;

use super::App;

/// Upper bound on how long we block waiting for input, so config file
/// edits are noticed promptly.
const MAX_POLL_WAIT: Duration = Duration::from_millis(500);

/// Sets up the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen buffer.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restores the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Entry point for running the TUI.
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when finished, even if the loop failed.
pub fn run_tui(app: App) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_tui_loop(&mut terminal, app);
    restore_terminal(&mut terminal)?;
    result
}

fn run_tui_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    let mut needs_redraw = true;

    loop {
        if app.tick() {
            debug!(label = %app.snapshot().summary_label, "Snapshot updated");
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|frame| ui::render(frame, &app))?;
            needs_redraw = false;
        }

        let poll_timeout = app.time_until_poll().min(MAX_POLL_WAIT);
        trace!(timeout_ms = poll_timeout.as_millis() as u64, "Waiting for input");

        if event::poll(poll_timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = input::handle_key(key);
                    if !app.handle_action(action) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
    }

    Ok(())
}
