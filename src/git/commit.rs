//! Commit records read from history.

/// A commit as seen by the release tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full SHA-1 hash of the commit
    pub hash: String,
    /// The full commit message, subject and body
    pub message: String,
}

impl Commit {
    /// Creates a commit record.
    pub fn new(hash: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
        }
    }

    /// Creates a commit record from a `git2::Commit`.
    pub fn from_git_commit(commit: &git2::Commit<'_>) -> Self {
        Self {
            hash: commit.id().to_string(),
            message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
        }
    }
}
