//! The modal input state machine.
//!
//! Two states, no re-entrancy: command execution runs to completion
//! before the next key is read.

use std::path::PathBuf;

use crate::app::{Editor, Mode};
use crate::input::Key;

impl Editor {
    /// Dispatch one keystroke through the current mode.
    pub fn handle_key(&mut self, key: Key) {
        match self.mode {
            Mode::Insert => self.handle_insert_key(key),
            Mode::Command => self.handle_command_key(key),
        }
    }

    fn handle_insert_key(&mut self, key: Key) {
        // Every insert-mode key fans out to plugins first, including `:`.
        self.plugins.notify_key_press(key);

        // While the explorer is visible it captures the selection keys.
        if self.show_explorer {
            match key {
                Key::Up => {
                    self.explorer.move_selection(-1);
                    return;
                }
                Key::Down => {
                    self.explorer.move_selection(1);
                    return;
                }
                Key::Enter => {
                    self.open_selected_entry();
                    return;
                }
                _ => {}
            }
        }

        match key {
            Key::Char(':') => {
                self.mode = Mode::Command;
                self.command.clear();
            }
            // Reserved: Esc does nothing in insert mode.
            Key::Esc => {}
            Key::Backspace => self.delete_char(),
            Key::Enter => self.insert_newline(),
            Key::Char(c) if key.is_printable() => self.insert_char(c),
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: Key) {
        match key {
            Key::Enter => {
                let command = std::mem::take(&mut self.command);
                self.mode = Mode::Insert;
                self.execute_command(&command);
            }
            Key::Esc => {
                self.mode = Mode::Insert;
                self.command.clear();
            }
            Key::Backspace => {
                self.command.pop();
            }
            Key::Char(c) => self.command.push(c),
            _ => {}
        }
    }

    fn insert_char(&mut self, c: char) {
        let (row, col) = (self.cursor_row, self.cursor_col);
        self.current_buffer_mut().insert_char(row, col, c);
        self.cursor_col += 1;
        self.plugins.notify_buffer_change();
    }

    fn delete_char(&mut self) {
        if self.cursor_col == 0 {
            return;
        }
        let (row, col) = (self.cursor_row, self.cursor_col);
        self.current_buffer_mut().delete_char(row, col);
        self.cursor_col -= 1;
        self.plugins.notify_buffer_change();
    }

    fn insert_newline(&mut self) {
        let (row, col) = (self.cursor_row, self.cursor_col);
        self.current_buffer_mut().split_line(row, col);
        self.cursor_row += 1;
        self.cursor_col = 0;
        self.plugins.notify_buffer_change();
    }

    fn open_selected_entry(&mut self) {
        let name = self.explorer.selected().to_string();
        if name.is_empty() {
            return;
        }
        self.open_file(PathBuf::from(name));
        self.show_explorer = false;
    }
}
