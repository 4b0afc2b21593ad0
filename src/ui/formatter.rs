//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the styled line; `display_*` functions print it.
//! Styling comes from `console`, which drops colors when the stream is not a
//! terminal or `NO_COLOR` is set.

use console::style;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message.trim_end())
}

/// Format a success message with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format a status message with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{}", format_status(message));
}

/// Print captured command output verbatim.
///
/// Empty output prints nothing so quiet commands don't leave blank lines.
pub fn display_output(text: &str) {
    let text = text.trim_end();
    if !text.is_empty() {
        println!("{}", text);
    }
}
