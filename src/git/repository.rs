use crate::domain::{Commit, Tag};
use crate::error::Result;
use chrono::{DateTime, TimeZone, Utc};
use git2::{ErrorCode, Oid, Repository as Git2Repo, Sort};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        debug!(path = %repo.path().display(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Working directory of the repository, if it is not bare
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// HEAD commit id, or `None` when HEAD is unborn
    fn head_oid(&self) -> Result<Option<Oid>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?.id())),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Map every commit that carries at least one tag to its tags
    fn tags_by_commit(&self) -> Result<HashMap<Oid, Vec<Tag>>> {
        let mut by_commit: HashMap<Oid, Vec<Tag>> = HashMap::new();
        let names = self.repo.tag_names(None)?;

        for name in names.iter().flatten() {
            let reference = match self.repo.find_reference(&format!("refs/tags/{}", name)) {
                Ok(reference) => reference,
                Err(_) => continue,
            };

            // Tags on trees or blobs cannot be undone as a bump
            let commit = match reference.peel_to_commit() {
                Ok(commit) => commit,
                Err(_) => {
                    debug!(tag = name, "skipping tag that does not point at a commit");
                    continue;
                }
            };

            let seconds = match reference.peel_to_tag() {
                Ok(annotated) => annotated
                    .tagger()
                    .map(|sig| sig.when().seconds())
                    .unwrap_or_else(|| commit.time().seconds()),
                Err(_) => commit.time().seconds(),
            };

            by_commit
                .entry(commit.id())
                .or_default()
                .push(Tag::new(name, commit.id().to_string(), to_utc(seconds)));
        }

        Ok(by_commit)
    }
}

fn to_utc(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .unwrap_or_default()
}

impl super::Repository for Git2Repository {
    fn latest_tag(&self) -> Result<Option<Tag>> {
        let Some(head) = self.head_oid()? else {
            return Ok(None);
        };

        let mut tags = self.tags_by_commit()?;
        if tags.is_empty() {
            return Ok(None);
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head)?;

        for oid in revwalk {
            let oid = oid?;
            if let Some(candidates) = tags.remove(&oid) {
                let latest = candidates
                    .into_iter()
                    .max_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
                debug!(tag = ?latest.as_ref().map(|t| &t.name), "found latest tag");
                return Ok(latest);
            }
        }

        Ok(None)
    }

    fn latest_commits(&self, limit: usize) -> Result<Vec<Commit>> {
        let Some(head) = self.head_oid()? else {
            return Ok(Vec::new());
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head)?;

        let mut commits = Vec::new();

        for oid in revwalk.take(limit) {
            let commit = self.repo.find_commit(oid?)?;

            let message = commit.message().unwrap_or("");
            commits.push(Commit::from_message(commit.id().to_string(), message));
        }

        Ok(commits)
    }
}

// SAFETY: git2::Repository is Send but not Sync. The Repository trait needs
// Sync, and the binary only ever touches a Git2Repository from the main
// thread, so the handle is never shared across threads.
unsafe impl Sync for Git2Repository {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;
    use tempfile::TempDir;

    #[test]
    fn test_empty_repository_has_nothing_to_undo() {
        let dir = TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();

        let repo = Git2Repository::open(dir.path()).unwrap();
        assert_eq!(repo.latest_tag().unwrap(), None);
        assert!(repo.latest_commits(1).unwrap().is_empty());
    }

    #[test]
    fn test_open_missing_path_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let result = Git2Repository::open(&missing);

        assert!(result.is_err());
        assert!(result
            .err()
            .unwrap()
            .to_string()
            .contains("Git operation failed"));
    }

    #[test]
    fn test_to_utc() {
        assert_eq!(to_utc(0), DateTime::<Utc>::default());
        assert_eq!(to_utc(86_400).format("%Y-%m-%d").to_string(), "1970-01-02");
    }
}
