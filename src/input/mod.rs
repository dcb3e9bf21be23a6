//! Key event translation.
//!
//! The editor core works with its own [`Key`] representation so the modal
//! state machine and plugin hooks are decoupled from the terminal backend.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A keystroke the editor core understands.
///
/// Anything outside this set (function keys, modified chords, mouse
/// events) is dropped before it reaches the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A plain character key.
    Char(char),
    Enter,
    Backspace,
    Esc,
    Up,
    Down,
}

impl Key {
    /// Translate a terminal key event, or `None` if the editor ignores it.
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        // Chords are reserved; shift is part of normal typing.
        if event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match event.code {
            KeyCode::Char(c) => Some(Self::Char(c)),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Esc => Some(Self::Esc),
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            _ => None,
        }
    }

    /// Whether this is a printable ASCII character (0x20–0x7E).
    pub const fn is_printable(self) -> bool {
        matches!(self, Self::Char(' '..='~'))
    }
}
