//! Undo workflow
//!
//! Reverts either the latest version bump (the bump commit and its tag) or
//! the latest plain commit by building a git command line and handing it to
//! a [CommandRunner]. All validation happens before anything is dispatched,
//! so a failed check never leaves the repository half rewritten.

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, UndoError};
use crate::git::Repository;
use crate::runner::CommandRunner;
use crate::ui::OutputSink;

/// Moves the branch back one commit and leaves that commit's changes in the
/// working tree.
pub const COMMIT_UNDO_COMMAND: &str = "git reset HEAD~";

/// Printed once the command has been dispatched, whatever its stderr says
pub const SUCCESS_MESSAGE: &str = "Undo successful!";

/// Arguments for the undo workflow
///
/// Mirrors the CLI flags without depending on clap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UndoArgs {
    /// Undo the latest version bump (tag and bump commit)
    pub bump: bool,

    /// Undo the latest commit
    pub commit: bool,

    /// Report the command without running it
    pub dry_run: bool,
}

/// What the workflow is asked to undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoMode {
    Bump,
    Commit,
}

impl UndoMode {
    /// Pick the mode from the flags; exactly one of them must be set
    pub fn from_args(args: &UndoArgs) -> Result<Self> {
        match (args.bump, args.commit) {
            (true, false) => Ok(UndoMode::Bump),
            (false, true) => Ok(UndoMode::Commit),
            (true, true) => Err(UndoError::AmbiguousArguments),
            (false, false) => Err(UndoError::MissingArgument),
        }
    }
}

/// Result of a successful undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoOutcome {
    pub mode: UndoMode,

    /// The command line that was (or, on a dry run, would have been) run
    pub command: String,

    /// False on dry runs
    pub dispatched: bool,
}

/// Builds the command line that deletes `tag` and drops the commit it marks.
///
/// `tag` must already be a single shell word (see [crate::domain::Tag::shell_word]).
pub fn bump_undo_command(tag: &str) -> String {
    format!(
        "git tag --delete {} && git reset HEAD~ && git reset --hard HEAD",
        tag
    )
}

/// The undo workflow, wired to its collaborators
pub struct UndoCommand<'a, R, C, O> {
    config: &'a Config,
    repo: &'a R,
    runner: &'a C,
    out: &'a O,
}

impl<'a, R, C, O> UndoCommand<'a, R, C, O>
where
    R: Repository,
    C: CommandRunner,
    O: OutputSink,
{
    pub fn new(config: &'a Config, repo: &'a R, runner: &'a C, out: &'a O) -> Self {
        UndoCommand {
            config,
            repo,
            runner,
            out,
        }
    }

    /// Build the command that reverts the latest version bump.
    ///
    /// The latest tag must sit on the latest commit; otherwise commits were
    /// made after the bump and only `--commit` is safe.
    ///
    /// # Returns
    /// * `Ok(String)` - The composite tag-delete and reset command
    /// * `Err(NoTagOrCommit)` - If the repository has no tag or no commit
    /// * `Err(TagCommitMismatch)` - If the tag does not point at HEAD
    pub fn bump_command(&self) -> Result<String> {
        let tag = self.repo.latest_tag()?;
        let commits = self.repo.latest_commits(1)?;

        let (tag, head) = match (tag, commits.into_iter().next()) {
            (Some(tag), Some(head)) => (tag, head),
            _ => return Err(UndoError::NoTagOrCommit),
        };

        debug!(tag = %tag.name, tag_rev = %tag.rev, head_rev = %head.rev, "checking bump");

        if tag.rev != head.rev {
            return Err(UndoError::TagCommitMismatch {
                tag_date: tag.short_date(),
                tag_name: tag.name,
                tag_rev: tag.rev,
                commit_title: head.title,
                commit_rev: head.rev,
            });
        }

        let tag_word = tag.shell_word();
        let command = bump_undo_command(&tag_word);

        self.out.info("Reverting version bump, running:");
        self.out.info(&command);
        self.out.info(&format!(
            "The tag can be removed from a remote by running `git push {} :{}`",
            self.config.remote, tag_word
        ));

        Ok(command)
    }

    /// Build the command that reverts the latest commit.
    pub fn commit_command(&self) -> String {
        COMMIT_UNDO_COMMAND.to_string()
    }

    /// Run the undo selected by `args`.
    ///
    /// Errors are only returned before the command is dispatched. Once it has
    /// run, anything on stderr is reported through [OutputSink::error] and
    /// the undo still counts as done.
    pub fn execute(&self, args: &UndoArgs) -> Result<UndoOutcome> {
        let mode = UndoMode::from_args(args)?;

        let command = match mode {
            UndoMode::Bump => self.bump_command()?,
            UndoMode::Commit => self.commit_command(),
        };

        if args.dry_run {
            self.out.info(&format!("Dry run, not running: {}", command));
            return Ok(UndoOutcome {
                mode,
                command,
                dispatched: false,
            });
        }

        let output = self.runner.run(&command)?;
        debug!(status = ?output.status, "undo command returned");

        if output.has_stderr() {
            self.out.error(&output.stderr);
        }

        self.out.write(&output.stdout);
        self.out.success(SUCCESS_MESSAGE);

        Ok(UndoOutcome {
            mode,
            command,
            dispatched: true,
        })
    }
}
