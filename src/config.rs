//! Run configuration for drafting releases.
//!
//! Every value resolves as command-line flag, then environment variable,
//! then the `env` map in `~/.draft-releases/settings.json`, then a default.

use anyhow::{Context, Result};
use tracing::debug;

use crate::git::{GitRepository, RemoteInfo};
use crate::github::{RepoSlug, DEFAULT_API_URL};
use crate::release::{ReleaseOptions, DEFAULT_MANIFEST};
use crate::utils::settings::get_env_var;

/// Repository to draft releases for (`OWNER/NAME`).
pub const REPO_VAR: &str = "DRAFT_RELEASES_REPO";
/// Manifest path relative to the repository root.
pub const MANIFEST_VAR: &str = "DRAFT_RELEASES_MANIFEST";
/// Project name used in release titles.
pub const PROJECT_VAR: &str = "DRAFT_RELEASES_PROJECT";
/// GitHub API base URL, for GitHub Enterprise.
pub const API_URL_VAR: &str = "GITHUB_API_URL";
/// User agent sent to the API.
pub const USER_AGENT_VAR: &str = "DRAFT_RELEASES_USER_AGENT";

/// Remote used to infer the repository when none is configured.
const DEFAULT_REMOTE: &str = "origin";

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--repo`
    pub repo: Option<String>,
    /// `--manifest`
    pub manifest: Option<String>,
    /// `--project`
    pub project: Option<String>,
    /// `--api-url`
    pub api_url: Option<String>,
}

/// Fully resolved configuration for a `draft` run.
#[derive(Debug, Clone)]
pub struct DraftConfig {
    /// API token.
    pub token: String,
    /// Target repository.
    pub repo: RepoSlug,
    /// Manifest path relative to the repository root.
    pub manifest_path: String,
    /// Project name used in release titles.
    pub project_name: String,
    /// GitHub API base URL.
    pub api_url: String,
    /// User agent sent to the API.
    pub user_agent: String,
}

impl DraftConfig {
    /// Resolves the configuration, reading the `origin` remote of `git` when
    /// no repository is configured.
    pub fn resolve(token: String, overrides: ConfigOverrides, git: &GitRepository) -> Result<Self> {
        Self::resolve_with(token, overrides, git, |key| get_env_var(key).ok())
    }

    /// Resolves the configuration with `lookup` standing in for the
    /// environment and settings file.
    pub fn resolve_with<F>(
        token: String,
        overrides: ConfigOverrides,
        git: &GitRepository,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let repo = match overrides.repo.or_else(|| lookup(REPO_VAR)) {
            Some(repo) => repo.parse::<RepoSlug>()?,
            None => RemoteInfo::find(git.repository(), DEFAULT_REMOTE)
                .and_then(|remote| remote.github_repo_name())
                .context("Could not infer the GitHub repository; pass --repo OWNER/NAME")?
                .parse::<RepoSlug>()?,
        };

        let manifest_path = overrides
            .manifest
            .or_else(|| lookup(MANIFEST_VAR))
            .unwrap_or_else(|| DEFAULT_MANIFEST.to_string());

        let project_name = overrides
            .project
            .or_else(|| lookup(PROJECT_VAR))
            .unwrap_or_else(|| repo.name.clone());

        let api_url = overrides
            .api_url
            .or_else(|| lookup(API_URL_VAR))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let user_agent = lookup(USER_AGENT_VAR)
            .unwrap_or_else(|| format!("draft-releases/{}", crate::VERSION));

        let config = Self {
            token,
            repo,
            manifest_path,
            project_name,
            api_url,
            user_agent,
        };
        debug!(
            repo = %config.repo,
            manifest = %config.manifest_path,
            project = %config.project_name,
            api_url = %config.api_url,
            "Resolved configuration"
        );

        Ok(config)
    }

    /// Driver options for this configuration.
    pub fn release_options(&self) -> ReleaseOptions {
        ReleaseOptions {
            manifest_path: self.manifest_path.clone(),
            ..ReleaseOptions::new(self.project_name.clone())
        }
    }
}
