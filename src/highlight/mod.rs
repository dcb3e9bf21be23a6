//! Regex-rule syntax highlighting.
//!
//! A [`SyntaxHighlighter`] owns an ordered list of (pattern, color) rules.
//! [`highlight`](SyntaxHighlighter::highlight) is a fold over the rules:
//! each pass scans the output of the previous pass left to right for
//! non-overlapping matches and wraps them in `<color><match><reset>`.
//!
//! Because later passes operate on already-colorized text, a match from a
//! later rule can contain the escape codes an earlier rule inserted. Rule
//! ordering relies on this compounding, so patterns must avoid matching
//! escape-code bytes. This quirk is deliberate and covered by tests.

use regex::Regex;
use thiserror::Error;

/// ANSI color escape codes for highlight rules.
pub mod color {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BRIGHT_BLACK: &str = "\x1b[90m";
}

/// Rule registration failure. Pattern compilation is a configuration
/// error reported when the rule is added, never at highlight time.
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("invalid highlight pattern `{pattern}`: {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },
}

/// An immutable (pattern, color) pair.
#[derive(Debug, Clone)]
pub struct HighlightRule {
    pattern: Regex,
    color: String,
}

/// Ordered rule list; registration order is application order.
#[derive(Debug, Clone, Default)]
pub struct SyntaxHighlighter {
    rules: Vec<HighlightRule>,
}

impl SyntaxHighlighter {
    /// A highlighter with no rules; `highlight` is the identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// A highlighter with the built-in rule set: keywords blue,
    /// double-quoted strings green, `//` comments dimmed.
    ///
    /// # Errors
    ///
    /// Returns `HighlightError` if a built-in pattern fails to compile.
    pub fn with_default_rules() -> Result<Self, HighlightError> {
        let mut highlighter = Self::new();
        highlighter.add_rule(
            r"\b(if|else|for|while|return|fn|let|mut|struct|enum|impl|use|pub|match|int|void|class)\b",
            color::BLUE,
        )?;
        highlighter.add_rule(r#"".*?""#, color::GREEN)?;
        highlighter.add_rule(r"//.*", color::BRIGHT_BLACK)?;
        Ok(highlighter)
    }

    /// Register a rule. Rules apply in registration order.
    ///
    /// # Errors
    ///
    /// Returns `HighlightError::BadPattern` when the pattern does not
    /// compile.
    pub fn add_rule(&mut self, pattern: &str, color: &str) -> Result<(), HighlightError> {
        let compiled = Regex::new(pattern).map_err(|source| HighlightError::BadPattern {
            pattern: pattern.to_string(),
            source: Box::new(source),
        })?;
        self.rules.push(HighlightRule {
            pattern: compiled,
            color: color.to_string(),
        });
        Ok(())
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Colorize one line of text.
    pub fn highlight(&self, line: &str) -> String {
        let mut result = line.to_string();
        for rule in &self.rules {
            let mut pass = String::with_capacity(result.len());
            let mut last = 0;
            for found in rule.pattern.find_iter(&result) {
                pass.push_str(&result[last..found.start()]);
                pass.push_str(&rule.color);
                pass.push_str(found.as_str());
                pass.push_str(color::RESET);
                last = found.end();
            }
            pass.push_str(&result[last..]);
            result = pass;
        }
        result
    }
}
