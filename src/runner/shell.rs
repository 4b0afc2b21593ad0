use crate::error::{Result, UndoError};
use crate::runner::{CommandOutput, CommandRunner};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Runs commands as `<shell> -c <command>`
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    current_dir: Option<PathBuf>,
}

impl ShellRunner {
    /// Create a runner using the given shell (e.g. "sh", "bash")
    pub fn new(shell: impl Into<String>) -> Self {
        ShellRunner {
            shell: shell.into(),
            current_dir: None,
        }
    }

    /// Run commands from `dir` instead of the process working directory
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        ShellRunner::new("sh")
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandOutput> {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command);

        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        debug!(shell = %self.shell, command, "running command");

        let output = cmd.output().map_err(|e| {
            UndoError::command(format!(
                "Failed to run '{}' with {}: {}",
                command, self.shell, e
            ))
        })?;

        debug!(status = ?output.status.code(), "command finished");

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_both_streams() {
        let output = ShellRunner::default()
            .run("echo out; echo err 1>&2")
            .unwrap();

        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
        assert_eq!(output.status, Some(0));
    }

    #[test]
    fn test_non_zero_exit_is_not_an_error() {
        let output = ShellRunner::default().run("exit 3").unwrap();
        assert_eq!(output.status, Some(3));
    }

    #[test]
    fn test_missing_shell_fails() {
        let result = ShellRunner::new("/nonexistent/shell").run("true");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Command execution failed"));
    }

    #[test]
    fn test_current_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = ShellRunner::default()
            .current_dir(dir.path())
            .run("pwd")
            .unwrap();

        let expected = dir.path().canonicalize().unwrap();
        let actual = std::path::Path::new(output.stdout.trim())
            .canonicalize()
            .unwrap();
        assert_eq!(actual, expected);
    }
}
