//! Splitting commit history into version groups.

use std::collections::HashSet;

use crate::git::Commit;

/// Commits leading up to, and including, the first commit at a new version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionGroup {
    /// Group key, e.g. `v3`.
    pub version: String,
    /// Commits in ascending order; the last one introduced `version`.
    pub changes: Vec<Commit>,
}

impl VersionGroup {
    /// The commit the release for this group should point at.
    pub fn target(&self) -> Option<&Commit> {
        self.changes.last()
    }
}

/// Result of grouping a commit range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    /// Closed groups in the order their versions first appeared.
    pub groups: Vec<VersionGroup>,
    /// Trailing commits that did not introduce a new version.
    pub pending: Vec<Commit>,
}

impl Grouping {
    /// Groups after the first one, which is the already released baseline.
    pub fn releases(&self) -> &[VersionGroup] {
        self.groups.get(1..).unwrap_or(&[])
    }
}

/// Folds `(commit, version key)` pairs, oldest first, into version groups.
///
/// Each commit joins the current batch. The first time a key is seen the
/// batch is closed as a group for that key and a new batch starts. Keys seen
/// before (including a return to an older major version) never close a
/// group.
pub fn group_by_version<I>(commits: I) -> Grouping
where
    I: IntoIterator<Item = (Commit, String)>,
{
    let (grouping, _) = commits.into_iter().fold(
        (Grouping::default(), HashSet::new()),
        |(mut grouping, mut seen), (commit, version)| {
            grouping.pending.push(commit);
            if seen.insert(version.clone()) {
                grouping.groups.push(VersionGroup {
                    version,
                    changes: std::mem::take(&mut grouping.pending),
                });
            }
            (grouping, seen)
        },
    );
    grouping
}
