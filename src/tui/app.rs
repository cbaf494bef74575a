//! Terminal lifecycle wrapper
//!
//! Owns the ratatui terminal, puts the real terminal into raw mode and the
//! alternate screen on creation, and guarantees restoration on drop so a
//! panic or early return never leaves the user's shell in a broken state.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

/// Terminal wrapper with event polling at a fixed tick rate.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
}

impl App {
    /// Enter raw mode and the alternate screen.
    ///
    /// `tick_rate` bounds how long [`next_event`](Self::next_event) blocks,
    /// which is the cadence at which callers get to advance animations.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            tick_rate,
        })
    }

    /// Draw one frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to one tick for an input event.
    ///
    /// Returns `None` on tick expiry so the caller can advance timers even
    /// while the user is idle.
    pub fn next_event(&mut self) -> Result<Option<Event>> {
        if event::poll(self.tick_rate)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn restore() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        Self::restore();
    }
}
