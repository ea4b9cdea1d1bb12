//! Release run orchestration.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::git::{short_hash, VersionControl};
use crate::github::{DraftRelease, ReleaseHost};
use crate::notes::create_release_notes;
use crate::release::grouping::{group_by_version, Grouping, VersionGroup};
use crate::release::manifest::parse_manifest_version;
use crate::release::ReleaseError;

/// Manifest tracked when none is configured.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Settings for one release run.
#[derive(Debug, Clone)]
pub struct ReleaseOptions {
    /// Manifest path relative to the repository root.
    pub manifest_path: String,
    /// Project name used in release titles.
    pub project_name: String,
    /// Revision the run ends at.
    pub head: String,
}

impl ReleaseOptions {
    /// Options for `project_name` with the default manifest, ending at `HEAD`.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            manifest_path: DEFAULT_MANIFEST.to_string(),
            project_name: project_name.into(),
            head: "HEAD".to_string(),
        }
    }

    /// Title of the release for `version`.
    pub fn release_name(&self, version: &str) -> String {
        format!("{} {}", self.project_name, version)
    }
}

/// Outcome of one submitted draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftedRelease {
    /// Version key, e.g. `v3`.
    pub version: String,
    /// URL of the created draft.
    pub url: String,
}

/// Walks history since the latest release and drafts one release per new
/// major version.
pub struct ReleaseDriver<'a> {
    vcs: &'a dyn VersionControl,
    host: &'a dyn ReleaseHost,
    options: ReleaseOptions,
}

impl<'a> ReleaseDriver<'a> {
    /// Creates a driver over the given history and release host.
    pub fn new(
        vcs: &'a dyn VersionControl,
        host: &'a dyn ReleaseHost,
        options: ReleaseOptions,
    ) -> Self {
        Self { vcs, host, options }
    }

    /// Groups the commits from `from` to the configured head by manifest
    /// major version.
    ///
    /// Every manifest is validated before anything is returned, so a bad
    /// version anywhere in the range fails the whole run.
    pub fn collect_groups(&self, from: &str) -> Result<Grouping> {
        let commits = self
            .vcs
            .list_commits(from, &self.options.head)
            .with_context(|| format!("Failed to list commits from {from}"))?;
        info!(from = %from, commit_count = commits.len(), "Scanning commits");

        let path = self.options.manifest_path.as_str();
        let mut keyed = Vec::with_capacity(commits.len());
        for commit in commits {
            let content = self.vcs.get_file(&commit.hash, path).map_err(|e| {
                ReleaseError::ManifestRead {
                    path: path.to_string(),
                    commit: commit.hash.clone(),
                    reason: format!("{e:#}"),
                }
            })?;
            let version = parse_manifest_version(&content, path, &commit.hash)?;
            debug!(
                commit = %short_hash(&commit.hash),
                version = %version.raw,
                key = %version.key(),
                "Read manifest version"
            );
            keyed.push((commit, version.key()));
        }

        let grouping = group_by_version(keyed);
        for group in &grouping.groups {
            debug!(
                version = %group.version,
                commit_count = group.changes.len(),
                "Closed version group"
            );
        }

        Ok(grouping)
    }

    /// Builds the draft for a version group.
    pub fn draft_for(&self, group: &VersionGroup) -> Option<DraftRelease> {
        let target = group.target()?;
        Some(DraftRelease {
            tag_name: group.version.clone(),
            target_commitish: target.hash.clone(),
            name: self.options.release_name(&group.version),
            body: create_release_notes(&group.changes),
        })
    }

    /// Computes the drafts a run would submit, without submitting them.
    pub async fn plan(&self) -> Result<Vec<DraftRelease>> {
        let from = self
            .host
            .get_latest_release()
            .await
            .context("Failed to look up the latest release")?;
        info!(from = %from, "Latest published release");

        let grouping = self.collect_groups(&from)?;
        if !grouping.pending.is_empty() {
            info!(
                commit_count = grouping.pending.len(),
                "Commits after the last version bump are not part of any release"
            );
        }

        Ok(grouping
            .releases()
            .iter()
            .filter_map(|group| self.draft_for(group))
            .collect())
    }

    /// Submits every planned draft in order, calling `report` after each one.
    ///
    /// Drafts submitted before a failure are not rolled back.
    pub async fn run<F>(&self, mut report: F) -> Result<Vec<DraftedRelease>>
    where
        F: FnMut(&DraftedRelease),
    {
        let drafts = self.plan().await?;
        let mut drafted = Vec::with_capacity(drafts.len());

        for draft in &drafts {
            let url = self
                .host
                .draft_release(draft)
                .await
                .with_context(|| format!("Failed to draft release {}", draft.tag_name))?;
            let release = DraftedRelease {
                version: draft.tag_name.clone(),
                url,
            };
            info!(version = %release.version, url = %release.url, "Drafted release");
            report(&release);
            drafted.push(release);
        }

        Ok(drafted)
    }
}
