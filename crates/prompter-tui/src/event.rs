use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Terminal events delivered to the main loop
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// No input within the tick window; redraw and poll again
    Tick,
}

/// Polls crossterm for input, falling back to a tick at the configured rate
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for the next event
    ///
    /// Key release and repeat events are swallowed; only presses reach the
    /// caller.
    pub fn next(&self) -> Result<Option<AppEvent>> {
        if !event::poll(self.tick_rate)? {
            return Ok(Some(AppEvent::Tick));
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
            Event::Resize(width, height) => Ok(Some(AppEvent::Resize(width, height))),
            _ => Ok(None),
        }
    }
}
