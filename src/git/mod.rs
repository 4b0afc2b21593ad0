//! Repository inspection layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries the undo workflow needs, so the workflow can run against a real
//! repository or a mock in tests.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use cz_undo::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> cz_undo::Result<()> {
//! let tag = repo.latest_tag()?;
//! let commits = repo.latest_commits(1)?;
//! if let (Some(tag), Some(head)) = (tag, commits.first()) {
//!     println!("{} tagged at {}, HEAD is {}", tag.name, tag.rev, head.rev);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{Commit, Tag};
use crate::error::Result;

/// Read-only repository queries used by the undo workflow
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync`.
///
/// ## Error Handling
///
/// Implementations map underlying errors (like `git2::Error`) to
/// [crate::error::UndoError]. An empty repository is not an error: it yields
/// `Ok(None)` / an empty vector.
pub trait Repository: Send + Sync {
    /// Get the most recent tag reachable from HEAD
    ///
    /// # Returns
    /// * `Ok(Some(Tag))` - The tag closest to HEAD; when several tags point at
    ///   the same commit, the most recently created one
    /// * `Ok(None)` - If no tag is reachable or the repository has no commits
    /// * `Err` - If there's a Git error
    fn latest_tag(&self) -> Result<Option<Tag>>;

    /// Get up to `limit` commits reachable from HEAD, most recent first
    ///
    /// # Returns
    /// * `Ok(Vec<Commit>)` - Commits newest first; empty for an unborn HEAD
    /// * `Err` - If there's a Git error
    fn latest_commits(&self, limit: usize) -> Result<Vec<Commit>>;
}
