// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. plugin::PluginManager)
    clippy::module_name_repetitions
)]

//! # Slate
//!
//! A modal terminal text editor.
//!
//! Slate edits plain text files in the terminal with:
//! - Two-state modal input (insert mode, `:` command mode)
//! - Regex-rule syntax highlighting
//! - Plugin hooks for key presses and buffer changes
//! - A directory listing for opening files
//!
//! ## Architecture
//!
//! One thread runs a blocking render → read → dispatch loop:
//! - **Terminal**: raw-mode guard and screen primitives
//! - **Buffer**: line-based text storage with file round-tripping
//! - **Editor**: the modal state machine and render pass
//!
//! ## Modules
//!
//! - [`app`]: Editor orchestration and the main loop
//! - [`editor`]: Text buffer and mutation operations
//! - [`highlight`]: Syntax highlighting rules
//! - [`input`]: Key event translation
//! - [`plugin`]: Plugin capability interface and fan-out
//! - [`explorer`]: Directory listing collaborator
//! - [`terminal`]: Raw terminal I/O

pub mod app;
pub mod config;
pub mod editor;
pub mod explorer;
pub mod highlight;
pub mod input;
pub mod plugin;
pub mod terminal;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{Editor, Mode};
    pub use crate::editor::Buffer;
    pub use crate::highlight::SyntaxHighlighter;
    pub use crate::input::Key;
    pub use crate::plugin::{Plugin, PluginManager};
}
