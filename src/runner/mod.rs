//! Command execution layer
//!
//! The undo workflow hands a complete shell command line to a
//! [CommandRunner] and only looks at the captured output afterwards.
//!
//! - [shell::ShellRunner]: Runs the command through a system shell
//! - [mock::MockRunner]: Records commands and replies with scripted output

pub mod mock;
pub mod shell;

pub use mock::MockRunner;
pub use shell::ShellRunner;

use crate::error::Result;

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` if the process was killed by a signal
    pub status: Option<i32>,
}

impl CommandOutput {
    /// Create an output with the given streams and a zero exit code
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        CommandOutput {
            stdout: stdout.into(),
            stderr: stderr.into(),
            status: Some(0),
        }
    }

    /// Whether the command wrote anything to stderr, whitespace included
    pub fn has_stderr(&self) -> bool {
        !self.stderr.is_empty()
    }
}

/// Synchronous command execution
///
/// `run` blocks until the command has finished. A non-zero exit status is
/// not an error at this level; only failing to start the command is.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &str) -> Result<CommandOutput>;
}
