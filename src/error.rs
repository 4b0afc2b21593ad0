use thiserror::Error;

/// Unified error type for cz-undo operations
#[derive(Error, Debug)]
pub enum UndoError {
    #[error(
        "One and only one argument is required for the undo command! \
         See 'cz-undo --help' for more information"
    )]
    MissingArgument,

    #[error(
        "--bump and --commit cannot be used together! \
         See 'cz-undo --help' for more information"
    )]
    AmbiguousArguments,

    #[error("There is no tag or commit to undo")]
    NoTagOrCommit,

    #[error(
        "The revision of the latest tag is not equal to the latest commit, \
         use cz-undo --commit instead\n\n\
         Latest Tag: {tag_name}, {tag_rev}, {tag_date}\n\
         Latest Commit: {commit_title}, {commit_rev}"
    )]
    TagCommitMismatch {
        tag_name: String,
        tag_rev: String,
        tag_date: String,
        commit_title: String,
        commit_rev: String,
    },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command execution failed: {0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in cz-undo
pub type Result<T> = std::result::Result<T, UndoError>;

impl UndoError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        UndoError::Config(msg.into())
    }

    /// Create a command execution error with context
    pub fn command(msg: impl Into<String>) -> Self {
        UndoError::Command(msg.into())
    }

    /// True for errors caused by how the tool was invoked or by repository
    /// state the user can correct, as opposed to system faults.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            UndoError::MissingArgument
                | UndoError::AmbiguousArguments
                | UndoError::NoTagOrCommit
                | UndoError::TagCommitMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UndoError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: UndoError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_missing_argument_points_to_help() {
        let msg = UndoError::MissingArgument.to_string();
        assert!(msg.contains("One and only one argument"));
        assert!(msg.contains("--help"));
    }

    #[test]
    fn test_mismatch_carries_diagnostics() {
        let err = UndoError::TagCommitMismatch {
            tag_name: "v1.2.0".to_string(),
            tag_rev: "abc".to_string(),
            tag_date: "2024-03-01".to_string(),
            commit_title: "fix: typo".to_string(),
            commit_rev: "xyz".to_string(),
        };
        let msg = err.to_string();

        assert!(msg.contains("--commit"));
        assert!(msg.contains("Latest Tag: v1.2.0, abc, 2024-03-01"));
        assert!(msg.contains("Latest Commit: fix: typo, xyz"));
    }

    #[test]
    fn test_user_errors_are_classified() {
        assert!(UndoError::MissingArgument.is_user_error());
        assert!(UndoError::AmbiguousArguments.is_user_error());
        assert!(UndoError::NoTagOrCommit.is_user_error());
        assert!(!UndoError::command("spawn failed").is_user_error());
        assert!(!UndoError::config("bad toml").is_user_error());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (UndoError::config("x"), "Configuration error"),
            (UndoError::command("x"), "Command execution failed"),
            (UndoError::NoTagOrCommit, "There is no tag or commit"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
