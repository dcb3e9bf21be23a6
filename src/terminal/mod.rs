//! Raw terminal I/O.
//!
//! The only module that touches the device. [`RawTerminal`] is a scoped
//! guard: constructing it puts the terminal into raw mode and dropping it
//! restores the previous configuration, so the terminal is recovered on
//! every exit path, including panics.
//!
//! Screen operations are queued into the stdout buffer and flushed once per
//! frame; escape-sequence ordering is preserved.

use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEvent};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{execute, queue};

/// Window size fallback when the query fails or reports zero columns.
pub const DEFAULT_ROWS: u16 = 24;
pub const DEFAULT_COLS: u16 = 80;

/// How long a key read blocks before the loop re-renders and re-polls.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Scoped raw-mode terminal.
pub struct RawTerminal {
    out: Stdout,
}

impl RawTerminal {
    /// Enter raw mode.
    ///
    /// # Errors
    ///
    /// Fails when stdin is not an interactive terminal; this is the one
    /// fatal startup condition, since the editor is unusable without it.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enter raw mode")?;
        Ok(Self { out: stdout() })
    }

    /// Window size as `(rows, cols)`, with a 24×80 fallback.
    pub fn size() -> (u16, u16) {
        match terminal::size() {
            Ok((cols, rows)) if cols > 0 => (rows, cols),
            _ => (DEFAULT_ROWS, DEFAULT_COLS),
        }
    }

    /// Poll for the next key event.
    ///
    /// Returns `Ok(None)` when no key arrives within the poll timeout or
    /// when a non-key event (resize, mouse) is drained.
    ///
    /// # Errors
    ///
    /// Propagates device read failures.
    pub fn read_key(&self) -> io::Result<Option<KeyEvent>> {
        if !event::poll(POLL_TIMEOUT)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    /// Queue a full-screen clear and home the cursor.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Queue a cursor move. Rows and columns are 0-based.
    pub fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row))
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, Hide)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, Show)
    }

    /// Queue reverse-video on or reset all attributes.
    pub fn set_reverse(&mut self, on: bool) -> io::Result<()> {
        let attribute = if on {
            Attribute::Reverse
        } else {
            Attribute::Reset
        };
        queue!(self.out, SetAttribute(attribute))
    }

    /// Queue raw text. Highlighted lines carry their own escape codes, so
    /// the text is printed as-is.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    /// Flush everything queued this frame to the device.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        // Nothing useful to do if restore fails during teardown.
        let _ = disable_raw_mode();
        let _ = execute!(self.out, Show, SetAttribute(Attribute::Reset));
    }
}
