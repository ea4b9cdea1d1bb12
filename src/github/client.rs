//! GitHub REST client for the releases endpoints.

use std::future::Future;
use std::pin::Pin;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use super::{DraftRelease, GitHubError, ReleaseHost, RepoSlug};

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version pinned in every request.
const API_VERSION: &str = "2022-11-28";

/// Subset of the release object returned by `GET /releases/latest`.
#[derive(Deserialize, Debug)]
struct LatestRelease {
    target_commitish: String,
    #[serde(default)]
    tag_name: Option<String>,
}

/// Subset of the release object returned by `POST /releases`.
#[derive(Deserialize, Debug)]
struct CreatedRelease {
    html_url: String,
}

/// Request body for `POST /releases`.
#[derive(Serialize, Debug)]
struct CreateReleaseRequest<'a> {
    #[serde(flatten)]
    release: &'a DraftRelease,
    draft: bool,
}

/// Client for a single repository's releases.
pub struct GitHubClient {
    /// HTTP client for API requests
    client: Client,
    /// API token sent as a bearer token
    token: String,
    /// Repository the releases belong to
    repo: RepoSlug,
    /// Base URL for the API, without trailing slash
    base_url: String,
}

impl GitHubClient {
    /// Creates a client for `repo` against the API at `base_url`.
    pub fn new(repo: RepoSlug, token: String, base_url: &str, user_agent: &str) -> Result<Self> {
        Url::parse(base_url).with_context(|| format!("Invalid GitHub API URL: {base_url}"))?;

        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            token,
            repo,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            self.base_url, self.repo.owner, self.repo.name
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .bearer_auth(&self.token)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GitHubError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| GitHubError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GitHubError::ApiRequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        Ok(response)
    }

    async fn fetch_latest_release(&self) -> Result<String> {
        let url = format!("{}/latest", self.releases_url());
        info!(url = %url, "Fetching latest published release");

        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .map_err(|e| GitHubError::NetworkError(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GitHubError::NoPublishedRelease(self.repo.to_string()).into());
        }
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(
                GitHubError::ApiRequestFailed(format!("HTTP {status}: {error_text}")).into(),
            );
        }

        let release: LatestRelease = response
            .json()
            .await
            .map_err(|e| GitHubError::InvalidResponseFormat(e.to_string()))?;

        debug!(
            tag = ?release.tag_name,
            target_commitish = %release.target_commitish,
            "Latest published release"
        );

        Ok(release.target_commitish)
    }

    async fn create_draft(&self, release: &DraftRelease) -> Result<String> {
        let url = self.releases_url();
        info!(url = %url, tag = %release.tag_name, "Creating draft release");

        let payload = CreateReleaseRequest {
            release,
            draft: true,
        };
        let response = self.send(self.client.post(&url).json(&payload)).await?;

        let created: CreatedRelease = response
            .json()
            .await
            .map_err(|e| GitHubError::InvalidResponseFormat(e.to_string()))?;

        debug!(html_url = %created.html_url, "Draft release created");

        Ok(created.html_url)
    }
}

impl ReleaseHost for GitHubClient {
    fn get_latest_release<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(self.fetch_latest_release())
    }

    fn draft_release<'a>(
        &'a self,
        release: &'a DraftRelease,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(self.create_draft(release))
    }
}
