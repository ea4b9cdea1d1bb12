//! Commit message classification and release-note rendering.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::git::{short_hash, Commit};
use crate::notes::change::{ChangeNote, ChangeType};
use crate::notes::markdown::escape_github_markdown;

/// Body used when a batch of commits carries no notes at all.
pub const NO_RELEASE_NOTES: &str = "No release notes.";

/// `RELNOTES:` annotation, optionally tagged `[INC]` or `[NEW]`.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static RELNOTES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RELNOTES(?:\[(INC|NEW)\])?:(.*)").unwrap());

/// "Rolls back abc1234", "Rollback of abc1234", "This reverts commit abc1234.".
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static ROLLBACK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:roll(?:s\s+|ed\s+|\s+)?back|revert)[^\n]*\s([0-9a-f]{7,})\.?$").unwrap()
});

/// Explicit opt-out such as `RELNOTES: n/a` or `RELNOTES: None.`.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static INVALID_NOTE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:none|n/?a)\.?$").unwrap());

/// What a single commit message contributes to the release notes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Classification {
    OptOut,
    Rollback(String),
    Note(ChangeType, String),
    Unannotated,
}

fn classify_message(message: &str) -> Classification {
    let message = message.trim_end();

    if INVALID_NOTE_PATTERN.is_match(message) {
        return Classification::OptOut;
    }

    if let Some(captures) = ROLLBACK_PATTERN.captures(message) {
        return Classification::Rollback(captures[1].to_string());
    }

    match RELNOTES_PATTERN.captures(message) {
        Some(captures) => {
            let change_type = ChangeType::from_tag(captures.get(1).map(|m| m.as_str()));
            let text = captures.get(2).map_or("", |m| m.as_str().trim());
            Classification::Note(change_type, text.to_string())
        }
        None => Classification::Unannotated,
    }
}

/// Extracts the change notes from a batch of commits, oldest first.
///
/// Notes rolled back by a later commit in the same batch stay in the result
/// with `rolled_back` set.
pub fn classify(commits: &[Commit]) -> Vec<ChangeNote> {
    let mut notes: Vec<ChangeNote> = Vec::new();

    for commit in commits {
        match classify_message(&commit.message) {
            Classification::OptOut | Classification::Unannotated => {}
            Classification::Rollback(reference) => {
                match notes.iter_mut().find(|note| note.matches_hash(&reference)) {
                    Some(note) => {
                        debug!(
                            rollback = %short_hash(&commit.hash),
                            rolled_back = %short_hash(&note.hash),
                            "Dropping rolled back release note"
                        );
                        note.rolled_back = true;
                    }
                    None => debug!(
                        rollback = %short_hash(&commit.hash),
                        reference = %reference,
                        "Rollback does not reference a note in this batch"
                    ),
                }
            }
            Classification::Note(change_type, text) => notes.push(ChangeNote {
                change_type,
                note_text: escape_github_markdown(&text),
                hash: commit.hash.clone(),
                rolled_back: false,
            }),
        }
    }

    notes
}

/// Renders change notes as a release body grouped under fixed headings.
pub fn render(notes: &[ChangeNote]) -> String {
    if notes.iter().all(|note| note.rolled_back) {
        return NO_RELEASE_NOTES.to_string();
    }

    let mut body = String::new();
    for change_type in ChangeType::SECTION_ORDER {
        body.push_str(change_type.heading());
        body.push('\n');
        for note in notes
            .iter()
            .filter(|note| note.change_type == change_type && !note.rolled_back)
        {
            body.push_str(&note.to_bullet());
            body.push('\n');
        }
        body.push('\n');
    }

    body
}

/// Classifies `commits` and renders the resulting release body.
pub fn create_release_notes(commits: &[Commit]) -> String {
    render(&classify(commits))
}
