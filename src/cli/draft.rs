//! Draft command: creates draft releases on GitHub.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config::{ConfigOverrides, DraftConfig};
use crate::git::{short_hash, GitRepository};
use crate::github::GitHubClient;
use crate::release::ReleaseDriver;
use crate::utils::{check_git_repository, check_github_token, configured_github_token};

/// Draft command options.
#[derive(Parser)]
pub struct DraftCommand {
    /// GitHub repository as OWNER/NAME (defaults to the origin remote).
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Path inside the library checkout.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Manifest whose version field defines releases (defaults to package.json).
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<String>,

    /// Project name used in release titles (defaults to the repository name).
    #[arg(long)]
    pub project: Option<String>,

    /// GitHub API base URL (defaults to https://api.github.com).
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Prints the releases that would be drafted without creating them.
    #[arg(long)]
    pub dry_run: bool,
}

impl DraftCommand {
    /// Executes the draft command.
    pub async fn execute(self) -> Result<()> {
        let token = configured_github_token();
        self.execute_with_token(token).await
    }

    async fn execute_with_token(self, token: Option<String>) -> Result<()> {
        // Credentials first so a missing token fails before any other work
        let token = check_github_token(token)?;
        check_git_repository(&self.path)?;

        let git = GitRepository::open_at(&self.path)?;
        let config = DraftConfig::resolve(
            token,
            ConfigOverrides {
                repo: self.repo,
                manifest: self.manifest,
                project: self.project,
                api_url: self.api_url,
            },
            &git,
        )?;

        let client = GitHubClient::new(
            config.repo.clone(),
            config.token.clone(),
            &config.api_url,
            &config.user_agent,
        )
        .context("Failed to create GitHub client")?;
        let driver = ReleaseDriver::new(&git, &client, config.release_options());

        if self.dry_run {
            let drafts = driver.plan().await?;
            if drafts.is_empty() {
                println!("No new versions since the latest release of {}", config.repo);
            }
            for draft in drafts {
                println!(
                    "Would draft {} ({}) at {}",
                    draft.name,
                    draft.tag_name,
                    short_hash(&draft.target_commitish)
                );
                println!("{}", draft.body.trim_end());
                println!();
            }
            return Ok(());
        }

        let drafted = driver
            .run(|release| {
                println!("Drafted release for {} at {}", release.version, release.url);
            })
            .await?;
        info!(count = drafted.len(), repo = %config.repo, "Finished drafting releases");

        Ok(())
    }
}
