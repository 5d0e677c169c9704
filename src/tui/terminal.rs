//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::{error, info};

use crate::config::settings::Settings;
use crate::navigation::Navigator;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal(mouse_enabled: bool) -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(settings: &Settings, navigator: Navigator) -> Result<()> {
    info!(
        step = navigator.current_index() + 1,
        mouse = settings.mouse_enabled,
        "starting guide"
    );

    let mut terminal = init_terminal(settings.mouse_enabled)?;
    let mut app = App::new(navigator);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    let result = event_loop(&mut terminal, &mut app, &events);
    info!(step = app.navigator.current_index() + 1, "guide closed");

    // Restore even if the loop failed
    finish(result, restore_terminal())
}

/// Combine the event loop outcome with terminal restoration.
///
/// A loop failure takes precedence; a restore failure alone is still returned.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(err), Err(restore_err)) => {
            error!("failed to restore terminal: {:#}", restore_err);
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => restored,
    }
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        match events.next()? {
            Event::Tick | Event::Resize(_, _) => {
                // Redrawn at the top of the loop
            }
            event => handle_event(app, event)?,
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
