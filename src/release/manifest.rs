//! Manifest version parsing.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::ReleaseError;

/// `MAJOR.MINOR.PATCH` with an optional leading `v`.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d+)\.\d+\.\d+$").unwrap());

/// Manifest file formats that carry a top-level `version` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// `package.json` and friends.
    Json,
    /// `pubspec.yaml`, `Chart.yaml` and friends.
    Yaml,
}

impl ManifestFormat {
    /// Picks the format from the file extension, defaulting to JSON.
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    version: Option<serde_json::Value>,
}

/// A validated manifest version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestVersion {
    /// Version string as written in the manifest.
    pub raw: String,
    /// Major component exactly as written, leading zeros included.
    pub major: String,
}

impl ManifestVersion {
    /// Validates a version string, naming `path` and `commit` on failure.
    pub fn parse(version: &str, path: &str, commit: &str) -> Result<Self, ReleaseError> {
        let captures = VERSION_PATTERN
            .captures(version)
            .ok_or_else(|| ReleaseError::BadVersion {
                path: path.to_string(),
                version: version.to_string(),
                commit: commit.to_string(),
            })?;

        Ok(Self {
            raw: version.to_string(),
            major: captures[1].to_string(),
        })
    }

    /// Group key for this version, e.g. `v3`.
    pub fn key(&self) -> String {
        format!("v{}", self.major)
    }
}

/// Reads the version out of manifest `content` found at `path` in `commit`.
pub fn parse_manifest_version(
    content: &str,
    path: &str,
    commit: &str,
) -> Result<ManifestVersion, ReleaseError> {
    let parse_error = |reason: String| ReleaseError::ManifestParse {
        path: path.to_string(),
        commit: commit.to_string(),
        reason,
    };

    let manifest: RawManifest = match ManifestFormat::from_path(path) {
        ManifestFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
        ManifestFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
    };

    match manifest.version {
        Some(serde_json::Value::String(version)) => ManifestVersion::parse(&version, path, commit),
        Some(other) => Err(ReleaseError::BadVersion {
            path: path.to_string(),
            version: other.to_string(),
            commit: commit.to_string(),
        }),
        None => Err(ReleaseError::MissingVersion {
            path: path.to_string(),
            commit: commit.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(ManifestFormat::from_path("package.json"), ManifestFormat::Json);
        assert_eq!(ManifestFormat::from_path("pubspec.yaml"), ManifestFormat::Yaml);
        assert_eq!(ManifestFormat::from_path("charts/Chart.YML"), ManifestFormat::Yaml);
        assert_eq!(ManifestFormat::from_path("VERSION"), ManifestFormat::Json);
    }

    #[test]
    fn version_keys() {
        for (version, key) in [("1.0.0", "v1"), ("v20200101.0.0", "v20200101"), ("v3.12.7", "v3")] {
            assert_eq!(ManifestVersion::parse(version, "package.json", "abc").unwrap().key(), key);
        }
    }

    #[test]
    fn major_component_is_kept_verbatim() {
        let huge = ManifestVersion::parse("99999999999999999999.0.0", "package.json", "c1").unwrap();
        assert_eq!(huge.key(), "v99999999999999999999");

        let padded = ManifestVersion::parse("v01.0.0", "package.json", "c1").unwrap();
        assert_eq!(padded.major, "01");
        assert_eq!(padded.key(), "v01");
    }

    #[test]
    fn rejects_malformed_versions() {
        for version in ["1.0", "1.0.0-beta", "V1.0.0", "x1.0.0", " 1.0.0", "1.0.0.0", ""] {
            let err = ManifestVersion::parse(version, "package.json", "abc1234").unwrap_err();
            assert!(
                matches!(err, ReleaseError::BadVersion { .. }),
                "{version:?} should be rejected"
            );
        }
    }

    #[test]
    fn bad_version_message_names_value_and_commit() {
        let err = ManifestVersion::parse("1.0", "package.json", "abc1234").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad package.json version string '1.0' @ abc1234"
        );
    }

    #[test]
    fn reads_json_manifest() {
        let content = r#"{"name": "google-closure-library", "version": "20230103.0.0"}"#;
        let version = parse_manifest_version(content, "package.json", "abc").unwrap();
        assert_eq!(version.raw, "20230103.0.0");
        assert_eq!(version.key(), "v20230103");
    }

    #[test]
    fn reads_yaml_manifest() {
        let content = "name: widgets\nversion: v2.1.0\n";
        let version = parse_manifest_version(content, "pubspec.yaml", "abc").unwrap();
        assert_eq!(version.key(), "v2");
    }

    #[test]
    fn missing_version_field() {
        let err = parse_manifest_version(r#"{"name": "x"}"#, "package.json", "abc1234").unwrap_err();
        assert!(matches!(err, ReleaseError::MissingVersion { .. }));
        assert!(err.to_string().contains("abc1234"));
    }

    #[test]
    fn non_string_version() {
        let err = parse_manifest_version(r#"{"version": 3}"#, "package.json", "abc").unwrap_err();
        assert!(matches!(err, ReleaseError::BadVersion { ref version, .. } if version == "3"));
    }

    #[test]
    fn unparseable_manifest() {
        let err = parse_manifest_version("{not json", "package.json", "abc1234").unwrap_err();
        assert!(matches!(err, ReleaseError::ManifestParse { .. }));
    }
}
