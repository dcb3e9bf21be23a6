//! Directory listing collaborator.
//!
//! A thin wrapper over filesystem enumeration: the editor asks it for a
//! selected entry name and splices that into its open-file path. Any
//! enumeration failure yields an empty listing, never an error.

use std::io;
use std::path::Path;

use tracing::debug;

/// Marker prefixes for rendered entries.
const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";

/// A directory listing with a single clamped selection.
#[derive(Debug, Default)]
pub struct FileExplorer {
    entries: Vec<String>,
    selected: usize,
}

impl FileExplorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the listing with the entries of `path`, sorted by name for
    /// a deterministic order. Failures yield an empty listing.
    pub fn scan_directory(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.entries = read_entry_names(path).unwrap_or_default();
        self.entries.sort();
        self.selected = 0;
        debug!(path = %path.display(), entries = self.entries.len(), "scanned directory");
    }

    /// Move the selection by `delta`, clamped into `[0, count - 1]`.
    pub fn move_selection(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        let max = self.entries.len() - 1;
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, max as isize) as usize;
    }

    /// The selected entry name, or an empty string when there is none.
    pub fn selected(&self) -> &str {
        self.entries.get(self.selected).map_or("", String::as_str)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Up to `height` rendered rows from the top of the listing, the
    /// selected entry marked with `> `.
    pub fn visible_entries(&self, height: usize) -> Vec<String> {
        self.entries
            .iter()
            .take(height)
            .enumerate()
            .map(|(i, name)| {
                let marker = if i == self.selected {
                    SELECTED_MARKER
                } else {
                    UNSELECTED_MARKER
                };
                format!("{marker}{name}")
            })
            .collect()
    }
}

fn read_entry_names(path: &Path) -> io::Result<Vec<String>> {
    Ok(std::fs::read_dir(path)?
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn explorer_for(names: &[&str]) -> (tempfile::TempDir, FileExplorer) {
        let dir = tempdir().unwrap();
        for name in names {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        let mut explorer = FileExplorer::new();
        explorer.scan_directory(dir.path());
        (dir, explorer)
    }

    #[test]
    fn test_scan_sorts_entries() {
        let (_dir, explorer) = explorer_for(&["c.txt", "a.txt", "b.txt"]);
        assert_eq!(explorer.entry_count(), 3);
        assert_eq!(explorer.selected(), "a.txt");
    }

    #[test]
    fn test_scan_failure_yields_empty_listing() {
        let mut explorer = FileExplorer::new();
        explorer.scan_directory("/no/such/directory");
        assert!(explorer.is_empty());
        assert_eq!(explorer.selected(), "");
    }

    #[test]
    fn test_move_selection_clamps() {
        let (_dir, mut explorer) = explorer_for(&["a", "b", "c"]);
        explorer.move_selection(-5);
        assert_eq!(explorer.selected(), "a");
        explorer.move_selection(99);
        assert_eq!(explorer.selected(), "c");
        explorer.move_selection(-1);
        assert_eq!(explorer.selected(), "b");
    }

    #[test]
    fn test_move_selection_on_empty_listing_is_noop() {
        let mut explorer = FileExplorer::new();
        explorer.move_selection(1);
        assert_eq!(explorer.selected(), "");
    }

    #[test]
    fn test_rescan_resets_selection() {
        let (dir, mut explorer) = explorer_for(&["a", "b", "c"]);
        explorer.move_selection(2);
        explorer.scan_directory(dir.path());
        assert_eq!(explorer.selected(), "a");
    }

    #[test]
    fn test_visible_entries_marks_selection() {
        let (_dir, mut explorer) = explorer_for(&["a", "b"]);
        explorer.move_selection(1);
        assert_eq!(explorer.visible_entries(10), ["  a", "> b"]);
    }

    #[test]
    fn test_visible_entries_truncates_to_height() {
        let (_dir, explorer) = explorer_for(&["a", "b", "c", "d"]);
        assert_eq!(explorer.visible_entries(2).len(), 2);
    }
}
