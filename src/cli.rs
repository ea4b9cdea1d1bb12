//! CLI interface for draft-releases.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod draft;
pub mod notes;

pub use draft::DraftCommand;
pub use notes::NotesCommand;

/// draft-releases: drafts GitHub releases from manifest version bumps.
#[derive(Parser)]
#[command(name = "draft-releases")]
#[command(
    about = "Drafts GitHub releases from manifest version bumps and RELNOTES annotations",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Drafts one GitHub release per major version bump since the latest release.
    Draft(DraftCommand),
    /// Prints the release notes for a commit range.
    Notes(NotesCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Draft(draft_cmd) => draft_cmd.execute().await,
            Commands::Notes(notes_cmd) => notes_cmd.execute(),
        }
    }
}
