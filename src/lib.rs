//! # draft-releases
//!
//! Drafts GitHub releases for a library by walking the commits since the
//! last published release, detecting where the manifest's major version
//! changes, and collecting `RELNOTES:` annotations from commit messages into
//! sectioned release notes.
//!
//! ## Quick Start
//!
//! ```rust
//! use draft_releases::git::Commit;
//! use draft_releases::notes::create_release_notes;
//!
//! let commits = vec![Commit::new("abc1234", "Add a widget\n\nRELNOTES[NEW]: Widgets")];
//! let body = create_release_notes(&commits);
//! assert!(body.starts_with("**New Additions**\n* Widgets (abc1234)"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod git;
pub mod github;
pub mod notes;
pub mod release;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::cli::Cli;

/// The current version of draft-releases.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
