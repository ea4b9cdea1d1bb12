//! Git history access for release drafting.

use anyhow::Result;

pub mod commit;
pub mod remote;
pub mod repository;

pub use commit::Commit;
pub use remote::RemoteInfo;
pub use repository::GitRepository;

/// Number of hex characters to show in abbreviated commit hashes.
pub const SHORT_HASH_LEN: usize = 8;

/// Read access to version-controlled history.
///
/// The release driver only needs two queries: the commits in a range and the
/// content of a file at a given revision. [`GitRepository`] implements this
/// on top of `git2`; tests substitute an in-memory history.
pub trait VersionControl {
    /// Returns the commits from `from` (inclusive) to `to`, oldest first.
    fn list_commits(&self, from: &str, to: &str) -> Result<Vec<Commit>>;

    /// Returns the content of `path` as of `commitish`.
    fn get_file(&self, commitish: &str, path: &str) -> Result<String>;
}

/// Abbreviates a commit hash for display.
pub fn short_hash(hash: &str) -> &str {
    hash.get(..SHORT_HASH_LEN).unwrap_or(hash)
}
