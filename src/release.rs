//! Version-bump detection and release drafting.

pub mod driver;
pub mod error;
pub mod grouping;
pub mod manifest;

pub use driver::{DraftedRelease, ReleaseDriver, ReleaseOptions, DEFAULT_MANIFEST};
pub use error::ReleaseError;
pub use grouping::{group_by_version, Grouping, VersionGroup};
pub use manifest::{parse_manifest_version, ManifestFormat, ManifestVersion};
