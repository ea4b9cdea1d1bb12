//! GitHub API error handling.

use thiserror::Error;

/// GitHub REST API errors.
#[derive(Error, Debug)]
pub enum GitHubError {
    /// The repository has no published (non-draft, non-prerelease) release.
    #[error("{0} has no published release to start from")]
    NoPublishedRelease(String),

    /// API request failed with a non-success status.
    #[error("GitHub API request failed: {0}")]
    ApiRequestFailed(String),

    /// Response body did not have the expected shape.
    #[error("Invalid response format from GitHub API: {0}")]
    InvalidResponseFormat(String),

    /// Network connectivity error.
    #[error("Network error: {0}")]
    NetworkError(String),
}
