//! Change note types.

/// How a change affects users of the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    /// New functionality (`RELNOTES[NEW]:`).
    New,
    /// Backwards incompatible change (`RELNOTES[INC]:`).
    Inc,
    /// Any other noteworthy change (untagged `RELNOTES:`).
    None,
}

impl ChangeType {
    /// Section order used when rendering release notes.
    pub const SECTION_ORDER: [Self; 3] = [Self::New, Self::Inc, Self::None];

    /// Change type for the bracketed tag of a `RELNOTES[...]:` line.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("NEW") => Self::New,
            Some("INC") => Self::Inc,
            _ => Self::None,
        }
    }

    /// Markdown heading of this change type's section.
    pub fn heading(self) -> &'static str {
        match self {
            Self::New => "**New Additions**",
            Self::Inc => "**Backwards Incompatible Changes**",
            Self::None => "**Other Changes**",
        }
    }
}

/// One release-note entry derived from a single commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeNote {
    /// Section the note belongs to
    pub change_type: ChangeType,
    /// Note text, already escaped for GitHub markdown
    pub note_text: String,
    /// Hash of the commit that carried the note
    pub hash: String,
    /// Set when a later commit in the same batch rolled this one back
    pub rolled_back: bool,
}

impl ChangeNote {
    /// Whether this note belongs to the commit referenced by `hash`.
    ///
    /// Either hash may be abbreviated, so a match is one being a prefix of
    /// the other.
    pub fn matches_hash(&self, hash: &str) -> bool {
        let own = self.hash.to_ascii_lowercase();
        let other = hash.to_ascii_lowercase();
        !other.is_empty() && (own.starts_with(&other) || other.starts_with(&own))
    }

    /// Renders the note as a markdown bullet.
    pub fn to_bullet(&self) -> String {
        format!("* {} ({})", self.note_text, self.hash)
    }
}
