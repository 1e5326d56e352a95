//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Render a section header.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// Render a label column, dimmed when colors are enabled.
#[must_use]
pub fn label(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).dim().to_string()
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
