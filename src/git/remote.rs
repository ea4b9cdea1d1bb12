//! Git remote operations

use anyhow::{Context, Result};
use git2::Repository;

/// Remote repository information
#[derive(Debug, Clone)]
pub struct RemoteInfo {
    /// Name of the remote (e.g., "origin", "upstream")
    pub name: String,
    /// URI of the remote repository
    pub uri: String,
}

impl RemoteInfo {
    /// Get all remotes for a repository
    pub fn get_all_remotes(repo: &Repository) -> Result<Vec<Self>> {
        let mut remotes = Vec::new();
        let remote_names = repo.remotes().context("Failed to get remote names")?;

        for name in remote_names.iter().flatten() {
            if let Ok(remote) = repo.find_remote(name) {
                remotes.push(Self {
                    name: name.to_string(),
                    uri: remote.url().unwrap_or("").to_string(),
                });
            }
        }

        Ok(remotes)
    }

    /// Find a remote by name
    pub fn find(repo: &Repository, name: &str) -> Result<Self> {
        Self::get_all_remotes(repo)?
            .into_iter()
            .find(|remote| remote.name == name)
            .with_context(|| format!("No git remote named '{name}'"))
    }

    /// The `owner/repo` this remote points at on GitHub
    pub fn github_repo_name(&self) -> Result<String> {
        extract_github_repo_name(&self.uri)
    }
}

/// Extract GitHub repository name (`owner/repo`) from a remote URI
pub fn extract_github_repo_name(uri: &str) -> Result<String> {
    // Handle both SSH and HTTPS GitHub URIs
    let repo_name = if let Some(rest) = uri.strip_prefix("git@github.com:") {
        // SSH format: git@github.com:owner/repo.git
        rest
    } else if let Some((_, rest)) = uri.split_once("github.com/") {
        // HTTPS format: https://github.com/owner/repo.git
        rest
    } else {
        anyhow::bail!("Not a GitHub URI: {}", uri);
    };
    let repo_name = repo_name.trim_end_matches('/');
    let repo_name = repo_name.strip_suffix(".git").unwrap_or(repo_name);

    if repo_name.split('/').count() != 2 || repo_name.split('/').any(str::is_empty) {
        anyhow::bail!("Invalid GitHub repository format: {}", repo_name);
    }

    Ok(repo_name.to_string())
}
