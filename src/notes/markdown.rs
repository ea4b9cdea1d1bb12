//! Markdown escaping for release-note text.

use std::sync::LazyLock;

use regex::Regex;

/// A GitHub `@user` mention.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static MENTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").unwrap());

/// Characters GitHub markdown would otherwise interpret.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static MARKDOWN_SPECIAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*_(){}#!.<>\[\]]").unwrap());

/// Escapes note text so it renders literally in a GitHub release body.
///
/// Mentions are wrapped in backticks so publishing the release does not
/// notify anyone, then every markdown control character gets a leading
/// backslash.
pub fn escape_github_markdown(note: &str) -> String {
    let note = MENTION_PATTERN.replace_all(note, "`$0`");
    MARKDOWN_SPECIAL_PATTERN
        .replace_all(&note, r"\$0")
        .into_owned()
}
