//! The render pass.
//!
//! Each loop iteration repaints the whole screen: the visible buffer rows
//! (or `~` filler past end-of-buffer), the explorer listing when visible,
//! a reverse-video status bar, and the command/status line. Everything is
//! queued and flushed once.
//!
//! Frame composition is split out from painting so the row, status, and
//! command-line content can be tested without a device.

use std::io;

use crate::app::{Editor, Mode};
use crate::terminal::RawTerminal;

impl Editor {
    /// Paint one frame and position the hardware cursor.
    pub(super) fn render(&mut self, terminal: &mut RawTerminal) -> io::Result<()> {
        terminal.hide_cursor()?;
        terminal.clear_screen()?;

        let (rows, cols) = RawTerminal::size();
        let text_rows = rows.saturating_sub(2) as usize;
        let width = cols as usize;

        for row in self.compose_rows(text_rows, width) {
            terminal.print(&row)?;
            terminal.print("\r\n")?;
        }

        if self.show_explorer {
            for (i, entry) in self.explorer.visible_entries(text_rows).iter().enumerate() {
                terminal.move_cursor(i as u16, 0)?;
                terminal.print(entry)?;
            }
        }

        terminal.move_cursor(rows.saturating_sub(2), 0)?;
        terminal.set_reverse(true)?;
        terminal.print(&self.status_line(width))?;
        terminal.set_reverse(false)?;

        terminal.move_cursor(rows.saturating_sub(1), 0)?;
        terminal.print(&self.command_line(width))?;

        let cursor_row = self.cursor_row.saturating_sub(self.row_offset);
        let cursor_col = self.cursor_col.saturating_sub(self.col_offset);
        terminal.move_cursor(cursor_row as u16, cursor_col as u16)?;
        terminal.show_cursor()?;
        terminal.flush()
    }

    /// The visible buffer rows: highlighted lines sliced by the scroll
    /// offsets, `~` filler past end-of-buffer.
    ///
    /// Slicing operates on the colorized text, so escape bytes count
    /// toward the window width. Rule compounding depends on rules seeing
    /// earlier markup, and the slice keeps the same representation.
    pub(super) fn compose_rows(&self, height: usize, width: usize) -> Vec<String> {
        let buffer = self.current_buffer();
        (0..height)
            .map(|i| {
                let file_row = i + self.row_offset;
                if file_row < buffer.line_count() {
                    let colored = self.highlighter.highlight(buffer.line(file_row));
                    colored.chars().skip(self.col_offset).take(width).collect()
                } else {
                    "~".to_string()
                }
            })
            .collect()
    }

    /// The reverse-video status bar: path (or `[untitled]`), a `[+]`
    /// modified marker, and the 1-based cursor position, padded to the
    /// window width.
    pub(super) fn status_line(&self, width: usize) -> String {
        let buffer = self.current_buffer();
        let name = buffer
            .path()
            .map_or_else(|| "[untitled]".to_string(), |p| p.display().to_string());

        let mut status = name;
        if buffer.is_modified() {
            status.push_str(" [+]");
        }
        status.push_str(&format!(
            " | {}:{}",
            self.cursor_row + 1,
            self.cursor_col + 1
        ));

        let len = status.chars().count();
        if len < width {
            status.extend(std::iter::repeat_n(' ', width - len));
        } else {
            status = status.chars().take(width).collect();
        }
        status
    }

    /// The bottom line: the command being typed, or the one-shot status
    /// message. Displaying the status consumes it — it is a single-frame
    /// toast, not a persistent banner.
    pub(super) fn command_line(&mut self, width: usize) -> String {
        let text = if self.mode == Mode::Command {
            format!(":{}", self.command)
        } else {
            self.status.take().unwrap_or_default()
        };
        text.chars().take(width).collect()
    }
}
