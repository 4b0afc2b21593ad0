/// A commit as seen by the undo workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full hex id of the commit
    pub rev: String,
    /// First line of the commit message
    pub title: String,
}

impl Commit {
    /// Build a commit from its raw message, keeping only the title line
    pub fn from_message(rev: impl Into<String>, message: &str) -> Self {
        let title = message.lines().next().unwrap_or("");

        Commit {
            rev: rev.into(),
            title: title.trim().to_string(),
        }
    }
}
