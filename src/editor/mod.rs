//! Text buffer for line-based editing.
//!
//! Provides the line storage, mutation operations, and file
//! round-tripping behind the editor's insert mode.

mod buffer;

pub use buffer::{Buffer, BufferError};
