//! Slate - a modal terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! slate notes.txt
//! slate --explorer
//! slate --no-highlight notes.txt
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use slate::app::Editor;
use slate::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use slate::highlight::SyntaxHighlighter;

/// A modal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "slate", version, about, long_about = None)]
struct Cli {
    /// File to edit (created on save if it does not exist)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Start with the file explorer visible
    #[arg(long)]
    explorer: bool,

    /// Disable syntax highlighting
    #[arg(long)]
    no_highlight: bool,

    /// Write tracing output to a file (stderr would corrupt the screen)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults in .slaterc
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in .slaterc
    #[arg(long)]
    clear: bool,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    // No log file, no subscriber: the raw screen owns stdout/stderr.
    if let Some(path) = &effective.log_file {
        init_logging(path)?;
    }

    let highlighter = if effective.no_highlight {
        SyntaxHighlighter::new()
    } else {
        SyntaxHighlighter::with_default_rules().context("default highlight rules")?
    };

    let mut editor = Editor::new()
        .with_highlighter(highlighter)
        .with_explorer_visible(effective.explorer);
    if let Some(file) = cli.file {
        editor.open_file(file);
    }

    editor.run().context("Editor error")
}
