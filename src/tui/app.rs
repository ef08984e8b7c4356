//! Terminal lifecycle for TUI screens
//!
//! Owns raw mode and the alternate screen; restores both on drop.

pub mod layout;
pub mod modals;
pub mod status_footer;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::event::{Event, EventHandler};

/// TUI Application wrapper
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventHandler,
}

impl App {
    /// Create a new App instance.
    ///
    /// Sets up the terminal for TUI mode (raw mode, alternate screen).
    /// Uses explicit rollback to ensure terminal is restored on error.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;

        // If alternate screen fails, restore raw mode
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        // If terminal creation fails, restore alternate screen and raw mode
        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                let mut stdout = io::stdout();
                let _ = execute!(stdout, LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e.into());
            }
        };

        Ok(Self {
            terminal,
            events: EventHandler::new(tick_rate),
        })
    }

    /// Get the next event from the event handler.
    pub fn next_event(&self) -> Result<Event> {
        self.events.next()
    }

    /// Draw a frame using the provided closure.
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
