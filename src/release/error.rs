//! Release drafting errors.

use thiserror::Error;

/// Errors that stop a release run.
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// No API token was configured.
    #[error("Need GITHUB_TOKEN env var to create releases")]
    MissingToken,

    /// The manifest could not be read at a commit.
    #[error("Failed to read {path} @ {commit}: {reason}")]
    ManifestRead {
        /// Manifest path.
        path: String,
        /// Commit the manifest was read at.
        commit: String,
        /// Underlying lookup failure.
        reason: String,
    },

    /// The manifest could not be parsed.
    #[error("Could not parse {path} @ {commit}: {reason}")]
    ManifestParse {
        /// Manifest path.
        path: String,
        /// Commit the manifest was read at.
        commit: String,
        /// Parser message.
        reason: String,
    },

    /// The manifest has no string `version` field.
    #[error("{path} has no version string @ {commit}")]
    MissingVersion {
        /// Manifest path.
        path: String,
        /// Commit the manifest was read at.
        commit: String,
    },

    /// The version is not `[v]MAJOR.MINOR.PATCH`.
    #[error("Bad {path} version string '{version}' @ {commit}")]
    BadVersion {
        /// Manifest path.
        path: String,
        /// The offending version value.
        version: String,
        /// Commit the manifest was read at.
        commit: String,
    },
}
