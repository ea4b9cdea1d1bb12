//! Preflight validation checks for early failure detection
//!
//! Commands call these before touching the network so that a missing token
//! or a wrong working directory fails fast with a clear message.

use std::path::Path;

use anyhow::{Context, Result};

use crate::release::ReleaseError;
use crate::utils::settings::get_env_var;

/// Environment variable holding the GitHub API token.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Looks up the GitHub token from the environment or settings file
pub fn configured_github_token() -> Option<String> {
    get_env_var(GITHUB_TOKEN_VAR).ok()
}

/// Validate that a GitHub token was found and return it
pub fn check_github_token(token: Option<String>) -> Result<String> {
    token
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| ReleaseError::MissingToken.into())
}

/// Validate that `path` is inside a git repository
pub fn check_git_repository(path: &Path) -> Result<()> {
    git2::Repository::discover(path).with_context(|| {
        format!(
            "Not in a git repository: {}. Run from the library checkout or pass --path",
            path.display()
        )
    })?;
    Ok(())
}
