//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::clipboard::SystemClipboard;
use crate::clock::{Clock, ZonedClock};
use crate::config::{ReportPaths, Settings};
use crate::session::ReportSession;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(settings: &Settings, paths: &ReportPaths) -> Result<()> {
    let clock: Box<dyn Clock> = Box::new(ZonedClock::new(settings.tz()?));
    let session = ReportSession::with_default_category(clock, settings.default_category);
    let mut app = App::new(session, settings, paths, Box::new(SystemClipboard::new()));

    let mut terminal = init_terminal()?;
    let events = EventHandler::default();
    tracing::info!("terminal form started");

    let result = run_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        match events.next()? {
            Event::Key(key_event) => handle_event(app, Event::Key(key_event))?,
            Event::Resize(_, _) => {}
            Event::Tick => app.notifications.remove_expired(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
