//! User interface module - where the undo workflow reports to the user.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - The [OutputSink] seam and its implementations

use std::sync::Mutex;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{display_error, display_output, display_status, display_success};

/// Destination for user-facing lines
pub trait OutputSink: Send + Sync {
    /// Informational line (what is about to happen)
    fn info(&self, message: &str);

    /// Problem report; does not abort anything by itself
    fn error(&self, message: &str);

    /// Final positive outcome
    fn success(&self, message: &str);

    /// Raw text such as captured command output
    fn write(&self, text: &str);
}

/// Writes styled lines to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleOutput;

impl OutputSink for ConsoleOutput {
    fn info(&self, message: &str) {
        display_status(message);
    }

    fn error(&self, message: &str) {
        display_error(message);
    }

    fn success(&self, message: &str) {
        display_success(message);
    }

    fn write(&self, text: &str) {
        display_output(text);
    }
}

/// One line captured by [RecordingOutput]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Info(String),
    Error(String),
    Success(String),
    Write(String),
}

/// Keeps every line in memory, in the order it was emitted
#[derive(Debug, Default)]
pub struct RecordingOutput {
    lines: Mutex<Vec<OutputLine>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<OutputLine> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Text of all info lines
    pub fn infos(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                OutputLine::Info(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    fn push(&self, line: OutputLine) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl OutputSink for RecordingOutput {
    fn info(&self, message: &str) {
        self.push(OutputLine::Info(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(OutputLine::Error(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.push(OutputLine::Success(message.to_string()));
    }

    fn write(&self, text: &str) {
        self.push(OutputLine::Write(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_keeps_order() {
        let out = RecordingOutput::new();
        out.info("a");
        out.error("b");
        out.write("c");
        out.success("d");

        assert_eq!(
            out.lines(),
            vec![
                OutputLine::Info("a".to_string()),
                OutputLine::Error("b".to_string()),
                OutputLine::Write("c".to_string()),
                OutputLine::Success("d".to_string()),
            ]
        );
        assert_eq!(out.infos(), vec!["a".to_string()]);
    }
}
