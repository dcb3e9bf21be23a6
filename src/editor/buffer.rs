use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Buffer persistence failure.
#[derive(Debug, Error)]
pub enum BufferError {
    /// The buffer is untitled; saving needs a path first.
    #[error("no file name")]
    NoFileName,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A text buffer: an ordered sequence of lines, an optional file path,
/// and a modified flag.
///
/// Invariant: the line sequence is never empty — there is always at least
/// one (possibly empty) line, so a cursor row of 0 is always valid.
///
/// Out-of-range rows and columns are tolerated as no-ops rather than
/// failures. The caller's cursor is trusted to stay roughly in sync, but
/// the bounds are still enforced here so a stale cursor can never corrupt
/// the buffer or panic.
#[derive(Debug, Clone)]
pub struct Buffer {
    lines: Vec<String>,
    path: Option<PathBuf>,
    modified: bool,
}

impl Buffer {
    /// An untitled buffer holding a single empty line.
    pub fn empty() -> Self {
        Self {
            lines: vec![String::new()],
            path: None,
            modified: false,
        }
    }

    /// A buffer bound to `path`, loaded with new-file semantics: a missing
    /// or unreadable file yields a single empty line, not an error.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let mut buffer = Self {
            lines: Vec::new(),
            path: Some(path.into()),
            modified: false,
        };
        buffer.load();
        buffer
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line text, or an empty string when `row` is out of range.
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map_or("", String::as_str)
    }

    /// Insert one character at `col` in line `row`. No-op when `row` is
    /// out of range; `col` is clamped to the line length.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let col = col.min(line.len());
        if !line.is_char_boundary(col) {
            return;
        }
        line.insert(col, ch);
        self.modified = true;
    }

    /// Remove the character immediately before `col` (backspace
    /// semantics). No-op when `row` is out of range or `col` is 0.
    pub fn delete_char(&mut self, row: usize, col: usize) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let col = col.min(line.len());
        if col == 0 || !line.is_char_boundary(col) {
            return;
        }
        let Some((start, _)) = line[..col].char_indices().next_back() else {
            return;
        };
        line.remove(start);
        self.modified = true;
    }

    /// Insert a new empty line immediately after `row`. No-op when `row`
    /// is out of range.
    pub fn insert_line(&mut self, row: usize) {
        if row >= self.lines.len() {
            return;
        }
        self.lines.insert(row + 1, String::new());
        self.modified = true;
    }

    /// Remove line `row`. Refuses (no-op) when the buffer would become
    /// empty, preserving the never-empty invariant.
    pub fn delete_line(&mut self, row: usize) {
        if self.lines.len() <= 1 || row >= self.lines.len() {
            return;
        }
        self.lines.remove(row);
        self.modified = true;
    }

    /// Split line `row` at `col`: the tail moves to a new line inserted
    /// immediately after. No-op when `row` is out of range; `col` is
    /// clamped to the line length.
    pub fn split_line(&mut self, row: usize, col: usize) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let col = col.min(line.len());
        if !line.is_char_boundary(col) {
            return;
        }
        let tail = line.split_off(col);
        self.lines.insert(row + 1, tail);
        self.modified = true;
    }

    /// Write every line, newline-terminated, to the buffer's path and
    /// clear the modified flag.
    ///
    /// # Errors
    ///
    /// `NoFileName` for untitled buffers, otherwise the underlying I/O
    /// error. The modified flag is left set on failure.
    pub fn save(&mut self) -> Result<(), BufferError> {
        let Some(path) = self.path.as_deref() else {
            return Err(BufferError::NoFileName);
        };
        let mut contents = String::new();
        for line in &self.lines {
            contents.push_str(line);
            contents.push('\n');
        }
        fs::write(path, contents)?;
        debug!(path = %path.display(), lines = self.lines.len(), "buffer saved");
        self.modified = false;
        Ok(())
    }

    /// Replace all lines by re-reading the buffer's path. A missing or
    /// unreadable file (or no path at all) resets to a single empty line.
    /// Clears the modified flag.
    pub fn load(&mut self) {
        self.lines = match self.path.as_deref().map(fs::read_to_string) {
            Some(Ok(text)) => {
                let lines: Vec<String> = text.lines().map(ToOwned::to_owned).collect();
                if lines.is_empty() {
                    vec![String::new()]
                } else {
                    lines
                }
            }
            _ => vec![String::new()],
        };
        self.modified = false;
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // --- Construction ---

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buffer = Buffer::empty();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), "");
        assert!(buffer.path().is_none());
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_from_path_nonexistent_is_a_new_file() {
        let buffer = Buffer::from_path("nonexistent.txt");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), "");
        assert_eq!(buffer.path(), Some(Path::new("nonexistent.txt")));
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_from_path_reads_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "alpha\nbeta\n").unwrap();

        let buffer = Buffer::from_path(&path);
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line(0), "alpha");
        assert_eq!(buffer.line(1), "beta");
    }

    #[test]
    fn test_load_empty_file_keeps_invariant() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let buffer = Buffer::from_path(&path);
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), "");
    }

    // --- Character operations ---

    #[test]
    fn test_insert_char() {
        let mut buffer = Buffer::empty();
        buffer.insert_char(0, 0, 'h');
        buffer.insert_char(0, 1, 'i');
        assert_eq!(buffer.line(0), "hi");
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_insert_char_out_of_range_row_is_noop() {
        let mut buffer = Buffer::empty();
        buffer.insert_char(5, 0, 'x');
        assert_eq!(buffer.line(0), "");
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_insert_char_clamps_col() {
        let mut buffer = Buffer::empty();
        buffer.insert_char(0, 99, 'x');
        assert_eq!(buffer.line(0), "x");
    }

    #[test]
    fn test_delete_char_backspace_semantics() {
        let mut buffer = Buffer::empty();
        buffer.insert_char(0, 0, 'a');
        buffer.insert_char(0, 1, 'b');
        // removes the character *before* col
        buffer.delete_char(0, 1);
        assert_eq!(buffer.line(0), "b");
    }

    #[test]
    fn test_delete_char_at_col_zero_is_noop() {
        let mut buffer = Buffer::empty();
        buffer.insert_char(0, 0, 'a');
        buffer.delete_char(0, 0);
        assert_eq!(buffer.line(0), "a");
    }

    #[test]
    fn test_insert_then_delete_restores_line() {
        let mut buffer = Buffer::empty();
        for (i, ch) in "hello".chars().enumerate() {
            buffer.insert_char(0, i, ch);
        }
        buffer.insert_char(0, 2, 'X');
        buffer.delete_char(0, 3);
        assert_eq!(buffer.line(0), "hello");
    }

    // --- Line operations ---

    #[test]
    fn test_insert_line_after_row() {
        let mut buffer = Buffer::empty();
        buffer.insert_char(0, 0, 'a');
        buffer.insert_line(0);
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line(0), "a");
        assert_eq!(buffer.line(1), "");
    }

    #[test]
    fn test_insert_line_out_of_range_is_noop() {
        let mut buffer = Buffer::empty();
        buffer.insert_line(1);
        assert_eq!(buffer.line_count(), 1);
    }

    #[test]
    fn test_delete_line_refuses_to_empty_buffer() {
        let mut buffer = Buffer::empty();
        buffer.delete_line(0);
        assert_eq!(buffer.line_count(), 1);
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_delete_line_removes_row() {
        let mut buffer = Buffer::empty();
        buffer.insert_line(0);
        buffer.insert_char(1, 0, 'b');
        buffer.delete_line(0);
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), "b");
    }

    #[test]
    fn test_split_line_moves_tail() {
        let mut buffer = Buffer::empty();
        for (i, ch) in "hello world".chars().enumerate() {
            buffer.insert_char(0, i, ch);
        }
        buffer.split_line(0, 5);
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line(0), "hello");
        assert_eq!(buffer.line(1), " world");
    }

    #[test]
    fn test_split_line_at_end_creates_empty_line() {
        let mut buffer = Buffer::empty();
        buffer.insert_char(0, 0, 'a');
        buffer.split_line(0, 1);
        assert_eq!(buffer.line(0), "a");
        assert_eq!(buffer.line(1), "");
    }

    #[test]
    fn test_line_out_of_range_soft_fails() {
        let buffer = Buffer::empty();
        assert_eq!(buffer.line(42), "");
    }

    // --- Persistence ---

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round.txt");

        let mut buffer = Buffer::from_path(&path);
        for (i, ch) in "one".chars().enumerate() {
            buffer.insert_char(0, i, ch);
        }
        buffer.split_line(0, 3);
        for (i, ch) in "two".chars().enumerate() {
            buffer.insert_char(1, i, ch);
        }
        buffer.save().unwrap();
        assert!(!buffer.is_modified());

        let reloaded = Buffer::from_path(&path);
        assert_eq!(reloaded.line_count(), 2);
        assert_eq!(reloaded.line(0), "one");
        assert_eq!(reloaded.line(1), "two");
        assert!(!reloaded.is_modified());
    }

    #[test]
    fn test_save_terminates_every_line_with_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nl.txt");

        let mut buffer = Buffer::from_path(&path);
        buffer.insert_char(0, 0, 'x');
        buffer.save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "x\n");
    }

    #[test]
    fn test_save_untitled_reports_no_file_name() {
        let mut buffer = Buffer::empty();
        buffer.insert_char(0, 0, 'x');
        let err = buffer.save().unwrap_err();
        assert!(matches!(err, BufferError::NoFileName));
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_save_failure_keeps_modified_flag() {
        let mut buffer = Buffer::from_path("/no/such/dir/file.txt");
        buffer.insert_char(0, 0, 'x');
        assert!(buffer.save().is_err());
        assert!(buffer.is_modified());
    }

    // --- Invariant ---

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn line_count_never_drops_below_one(
                ops in prop::collection::vec((any::<bool>(), 0..32usize), 0..64),
            ) {
                let mut buffer = Buffer::empty();
                for (insert, row) in ops {
                    if insert {
                        buffer.insert_line(row);
                    } else {
                        buffer.delete_line(row);
                    }
                    prop_assert!(buffer.line_count() >= 1);
                }
            }

            #[test]
            fn insert_then_delete_is_identity(
                text in "[ -~]{0,24}",
                col in 0..32usize,
                ch in prop::char::range(' ', '~'),
            ) {
                let mut buffer = Buffer::empty();
                for (i, c) in text.chars().enumerate() {
                    buffer.insert_char(0, i, c);
                }
                let before = buffer.line(0).to_string();
                let col = col.min(before.len());
                buffer.insert_char(0, col, ch);
                buffer.delete_char(0, col + 1);
                prop_assert_eq!(buffer.line(0), before);
            }

            #[test]
            fn out_of_range_ops_never_panic(
                row in 0..1000usize,
                col in 0..1000usize,
            ) {
                let mut buffer = Buffer::empty();
                buffer.insert_char(row, col, 'x');
                buffer.delete_char(row, col);
                buffer.split_line(row, col);
                buffer.delete_line(row);
                prop_assert!(buffer.line_count() >= 1);
            }
        }
    }
}
