//! Editor orchestration and the main loop.
//!
//! [`Editor`] owns the buffer arena, cursor and scroll state, the
//! highlighter, the plugin registry, and the explorer, and drives the
//! blocking render → read → dispatch loop. Input handling lives in
//! `input`, the command mini-language in `command`, and the render pass
//! in `render`.

mod command;
mod input;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::editor::Buffer;
use crate::explorer::FileExplorer;
use crate::highlight::SyntaxHighlighter;
use crate::input::Key;
use crate::plugin::{Plugin, PluginManager};
use crate::terminal::RawTerminal;

/// Input mode: the same keystrokes mean different things in each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keys mutate the buffer; `:` enters command mode.
    Insert,
    /// Keys accumulate into a command line executed on Enter.
    Command,
}

/// The editor: all state for one editing session.
pub struct Editor {
    // Buffer arena; `current` indexes into it and never outlives it.
    buffers: Vec<Buffer>,
    current: usize,

    // Cursor in buffer coordinates; scroll offsets position the viewport.
    // The offsets are never updated by any operation here: scroll-into-view
    // is deliberately out of scope.
    cursor_row: usize,
    cursor_col: usize,
    row_offset: usize,
    col_offset: usize,

    mode: Mode,
    command: String,
    /// One-shot status line, consumed the first time it is painted.
    status: Option<String>,
    running: bool,

    highlighter: SyntaxHighlighter,
    plugins: PluginManager,
    explorer: FileExplorer,
    show_explorer: bool,
}

impl Editor {
    /// An editor with a single untitled buffer and no highlight rules.
    pub fn new() -> Self {
        Self {
            buffers: vec![Buffer::empty()],
            current: 0,
            cursor_row: 0,
            cursor_col: 0,
            row_offset: 0,
            col_offset: 0,
            mode: Mode::Insert,
            command: String::new(),
            status: None,
            running: true,
            highlighter: SyntaxHighlighter::new(),
            plugins: PluginManager::new(),
            explorer: FileExplorer::new(),
            show_explorer: false,
        }
    }

    /// Use the given highlighter for rendering.
    pub fn with_highlighter(mut self, highlighter: SyntaxHighlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Start with the explorer visible, scanning the current directory.
    pub fn with_explorer_visible(mut self, visible: bool) -> Self {
        if visible {
            self.show_explorer = true;
            self.explorer.scan_directory(".");
        }
        self
    }

    /// Open `path` as a new buffer and switch to it; the cursor resets to
    /// the origin. The file need not exist (new-file semantics).
    pub fn open_file(&mut self, path: PathBuf) {
        self.buffers.push(Buffer::from_path(path));
        self.current = self.buffers.len() - 1;
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    /// Register a plugin; its load hook runs before this returns.
    pub fn load_plugin(&mut self, plugin: Box<dyn Plugin>) {
        self.plugins.load_plugin(plugin);
    }

    pub fn current_buffer(&self) -> &Buffer {
        &self.buffers[self.current]
    }

    fn current_buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffers[self.current]
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Cursor position as (row, col), 0-based buffer coordinates.
    pub const fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Run until a quit command clears the running flag.
    ///
    /// # Errors
    ///
    /// Fails when the terminal cannot enter raw mode or on a device I/O
    /// error; user input and filesystem irregularities never error here.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = RawTerminal::new()
            .context("failed to initialize terminal — slate requires an interactive terminal")?;

        while self.running {
            self.render(&mut terminal)?;
            // An empty poll just re-renders and re-polls.
            if let Some(event) = terminal.read_key()?
                && let Some(key) = Key::from_event(&event)
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
