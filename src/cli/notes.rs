//! Notes command: previews release notes for a commit range.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::git::GitRepository;
use crate::notes::create_release_notes;
use crate::utils::check_git_repository;

/// Notes command options.
#[derive(Parser)]
pub struct NotesCommand {
    /// Commit range (e.g., v2..HEAD, abc123..def456); a single revision means REV..HEAD.
    #[arg(value_name = "COMMIT_RANGE")]
    pub commit_range: String,

    /// Path inside the library checkout.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

impl NotesCommand {
    /// Executes the notes command.
    pub fn execute(self) -> Result<()> {
        println!("{}", self.render()?.trim_end());
        Ok(())
    }

    /// Renders the release notes for the configured range.
    pub fn render(&self) -> Result<String> {
        check_git_repository(&self.path)?;

        let repo = GitRepository::open_at(&self.path)?;
        let commits = repo.get_commits_in_range(&self.commit_range)?;

        Ok(create_release_notes(&commits))
    }
}
