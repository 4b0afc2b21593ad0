use chrono::{DateTime, Utc};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Names made only of these characters go on a shell line unquoted.
const PLAIN_TAG: &str = r"^[A-Za-z0-9._/+@=,-]+$";

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    /// Full hex id of the commit the tag points to
    pub rev: String,
    pub date: DateTime<Utc>,
}

impl Tag {
    /// Create a new tag
    pub fn new(name: impl Into<String>, rev: impl Into<String>, date: DateTime<Utc>) -> Self {
        Tag {
            name: name.into(),
            rev: rev.into(),
            date,
        }
    }

    /// Tag date as shown to users (e.g. "2024-03-01")
    pub fn short_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Check whether the name can be used verbatim on a shell command line
    pub fn is_plain(&self) -> bool {
        static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

        PATTERN
            .get_or_init(|| Regex::new(PLAIN_TAG).ok())
            .as_ref()
            .is_some_and(|re| re.is_match(&self.name))
    }

    /// The name as a single shell word: unchanged when plain, otherwise
    /// single-quoted with embedded quotes written as `'\''`.
    pub fn shell_word(&self) -> Cow<'_, str> {
        if self.is_plain() {
            Cow::Borrowed(&self.name)
        } else {
            Cow::Owned(format!("'{}'", self.name.replace('\'', r"'\''")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tag(name: &str) -> Tag {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        Tag::new(name, "abc123", date)
    }

    #[test]
    fn test_tag_new() {
        let tag = tag("v1.2.3");
        assert_eq!(tag.name, "v1.2.3");
        assert_eq!(tag.rev, "abc123");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(tag("v1.2.3").short_date(), "2024-03-01");
    }

    #[test]
    fn test_common_tag_names_are_left_alone() {
        for name in ["v1.2.3", "1.0.0-rc.1", "release/2024.03", "pkg@1.0.0+build.5"] {
            assert!(tag(name).is_plain(), "{} should be plain", name);
            assert_eq!(tag(name).shell_word(), name);
        }
    }

    #[test]
    fn test_other_names_are_quoted() {
        assert_eq!(tag("v1!").shell_word(), "'v1!'");
        assert_eq!(tag("v1.0-é").shell_word(), "'v1.0-é'");
        assert_eq!(tag("$(whoami)").shell_word(), "'$(whoami)'");
        assert_eq!(tag("v1;rm -rf ~").shell_word(), "'v1;rm -rf ~'");
    }

    #[test]
    fn test_embedded_quote_is_escaped() {
        assert_eq!(tag("it's").shell_word(), r"'it'\''s'");
    }
}
