//! Git repository operations

use std::path::Path;

use anyhow::{Context, Result};
use git2::{Oid, Repository, Sort};
use tracing::debug;

use crate::git::{Commit, VersionControl};

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the repository containing the specified path
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path)
            .with_context(|| format!("Failed to open git repository at {}", path.display()))?;

        Ok(Self { repo })
    }

    /// Get access to the underlying git2::Repository
    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Resolve a revision (hash, branch, tag, `HEAD~2`, ...) to a commit id
    pub fn resolve_commit(&self, spec: &str) -> Result<Oid> {
        let commit = self
            .repo
            .revparse_single(spec)
            .with_context(|| format!("Failed to parse revision: {spec}"))?
            .peel_to_commit()
            .with_context(|| format!("Revision does not point at a commit: {spec}"))?;

        Ok(commit.id())
    }

    /// Parse a `FROM..TO` range, or a single `FROM` meaning `FROM..HEAD`, and
    /// return the commits after `FROM` up to `TO`, oldest first
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<Commit>> {
        let (from, to) = match range.split_once("..") {
            Some((from, to)) => (from, if to.is_empty() { "HEAD" } else { to }),
            None => (range, "HEAD"),
        };
        if from.is_empty() {
            anyhow::bail!("Invalid range format: {range}");
        }

        self.walk(from, to, false)
    }

    fn walk(&self, from: &str, to: &str, include_from: bool) -> Result<Vec<Commit>> {
        let from_id = self.resolve_commit(from)?;
        let to_id = self.resolve_commit(to)?;

        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME | Sort::REVERSE)
            .context("Failed to set revwalk sorting")?;
        walker.push(to_id).context("Failed to push end commit")?;

        if include_from {
            let from_commit = self
                .repo
                .find_commit(from_id)
                .context("Failed to find start commit")?;
            for parent_id in from_commit.parent_ids() {
                walker
                    .hide(parent_id)
                    .context("Failed to hide parent of start commit")?;
            }
        } else {
            walker.hide(from_id).context("Failed to hide start commit")?;
        }

        let mut commits = Vec::new();
        for oid in walker {
            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self
                .repo
                .find_commit(oid)
                .context("Failed to find commit")?;
            commits.push(Commit::from_git_commit(&commit));
        }

        debug!(
            from = %from,
            to = %to,
            include_from,
            commit_count = commits.len(),
            "Walked commit range"
        );

        Ok(commits)
    }
}

impl VersionControl for GitRepository {
    fn list_commits(&self, from: &str, to: &str) -> Result<Vec<Commit>> {
        self.walk(from, to, true)
    }

    fn get_file(&self, commitish: &str, path: &str) -> Result<String> {
        let tree = self
            .repo
            .revparse_single(commitish)
            .with_context(|| format!("Failed to parse revision: {commitish}"))?
            .peel_to_tree()
            .with_context(|| format!("Failed to get tree for {commitish}"))?;

        let entry = tree
            .get_path(Path::new(path))
            .with_context(|| format!("{path} does not exist at {commitish}"))?;
        let blob = entry
            .to_object(&self.repo)
            .and_then(|object| object.peel_to_blob())
            .with_context(|| format!("{path} is not a file at {commitish}"))?;

        String::from_utf8(blob.content().to_vec())
            .with_context(|| format!("{path} at {commitish} is not valid UTF-8"))
    }
}
