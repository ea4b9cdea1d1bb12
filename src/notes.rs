//! Release-note extraction from commit messages.
//!
//! Commits opt into the release notes with a `RELNOTES:` line, optionally
//! tagged `RELNOTES[NEW]:` or `RELNOTES[INC]:`. A commit that rolls back an
//! earlier one in the same batch removes that commit's note again, and a
//! message ending in `none` or `n/a` opts out entirely.

pub mod change;
pub mod classifier;
pub mod markdown;

pub use change::{ChangeNote, ChangeType};
pub use classifier::{classify, create_release_notes, render, NO_RELEASE_NOTES};
pub use markdown::escape_github_markdown;
