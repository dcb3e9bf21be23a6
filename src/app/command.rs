//! The `:` command mini-language.

use std::path::PathBuf;

use tracing::debug;

use crate::app::Editor;
use crate::editor::BufferError;

impl Editor {
    /// Execute one accumulated command line.
    ///
    /// Failures surface on the one-shot status line; nothing here errors.
    pub(super) fn execute_command(&mut self, command: &str) {
        debug!(command, "executing command");
        match command {
            "q" => self.quit(),
            "q!" => self.running = false,
            "w" => self.save_file(),
            "wq" => {
                // Save, then quit unconditionally.
                self.save_file();
                self.running = false;
            }
            "explorer" => {
                self.show_explorer = !self.show_explorer;
                self.explorer.scan_directory(".");
            }
            _ => {
                if let Some(path) = command.strip_prefix("e ") {
                    self.open_file(PathBuf::from(path));
                } else {
                    self.status = Some(format!("Unknown command: {command}"));
                }
            }
        }
    }

    fn save_file(&mut self) {
        self.status = Some(match self.current_buffer_mut().save() {
            Ok(()) => "File saved".to_string(),
            Err(BufferError::NoFileName) => "No file name".to_string(),
            Err(err) => format!("Save failed: {err}"),
        });
    }

    fn quit(&mut self) {
        if self.current_buffer().is_modified() {
            self.status = Some("Unsaved changes! Use :q! to force quit".to_string());
        } else {
            self.running = false;
        }
    }
}
