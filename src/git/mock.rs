use crate::domain::{Commit, Tag};
use crate::error::Result;
use crate::git::Repository;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock repository for testing without actual git operations
#[derive(Default)]
pub struct MockRepository {
    tag: Option<Tag>,
    /// Newest first, like a revwalk from HEAD
    commits: Vec<Commit>,
    queries: AtomicUsize,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the latest tag
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Add a commit on top of the existing history
    pub fn with_commit(mut self, commit: Commit) -> Self {
        self.commits.insert(0, commit);
        self
    }

    /// Number of queries made through the [Repository] trait
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Repository for MockRepository {
    fn latest_tag(&self) -> Result<Option<Tag>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.tag.clone())
    }

    fn latest_commits(&self, limit: usize) -> Result<Vec<Commit>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.commits.iter().take(limit).cloned().collect())
    }
}
