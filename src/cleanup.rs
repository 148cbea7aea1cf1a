//! Output normalization pass.
//!
//! Emitters join many independently formatted fragments, which leaves runs
//! of blank lines and trailing whitespace behind. This pass tidies the
//! final document without touching its content.

use regex::Regex;
use std::sync::LazyLock;

static RE_TRAILING_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+\n").unwrap());
static RE_BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Cleanup configuration options.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Collapse runs of three or more newlines to a single blank line.
    pub collapse_blank_lines: bool,
    /// Strip trailing spaces and tabs from every line.
    pub trim_trailing_whitespace: bool,
    /// End the document with exactly one newline.
    pub ensure_final_newline: bool,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            collapse_blank_lines: true,
            trim_trailing_whitespace: true,
            ensure_final_newline: true,
        }
    }
}

impl CleanupOptions {
    /// Creates options that only fix the final newline.
    pub fn minimal() -> Self {
        Self {
            collapse_blank_lines: false,
            trim_trailing_whitespace: false,
            ensure_final_newline: true,
        }
    }
}

/// Applies the cleanup pass to rendered output.
pub fn cleanup(text: &str, options: &CleanupOptions) -> String {
    let mut result = text.to_string();

    if options.trim_trailing_whitespace {
        result = RE_TRAILING_WS.replace_all(&result, "\n").into_owned();
    }

    if options.collapse_blank_lines {
        result = RE_BLANK_RUNS.replace_all(&result, "\n\n").into_owned();
    }

    if options.ensure_final_newline && !result.is_empty() {
        let trimmed = result.trim_end_matches('\n').len();
        result.truncate(trimmed);
        result.push('\n');
    }

    result
}
