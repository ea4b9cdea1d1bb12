//! GitHub releases API access.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

pub mod client;
pub mod error;

pub use client::{GitHubClient, DEFAULT_API_URL};
pub use error::GitHubError;

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    /// User or organization owning the repository.
    pub owner: String,
    /// Repository name.
    pub name: String,
}

impl FromStr for RepoSlug {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => anyhow::bail!("Invalid repository '{s}'. Expected OWNER/NAME"),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A release to be created as a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftRelease {
    /// Tag the release will create on publish, e.g. `v3`.
    pub tag_name: String,
    /// Commit the tag will point at.
    pub target_commitish: String,
    /// Release title.
    pub name: String,
    /// Markdown release notes.
    pub body: String,
}

/// Hosted repository that publishes releases.
pub trait ReleaseHost: Send + Sync {
    /// Returns the target commitish of the latest published release.
    fn get_latest_release<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

    /// Creates a draft release and returns its URL.
    fn draft_release<'a>(
        &'a self,
        release: &'a DraftRelease,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}
