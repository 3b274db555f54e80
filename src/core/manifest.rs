//! Version manifest parsing and schema.
//!
//! Every built statement version carries a `manifest.toml` describing
//! which variant it is and where its primary content file lives:
//!
//! ```toml
//! [version]
//! lang = "en"
//! format = "pdf"
//!
//! [data]
//! index = "statement.pdf"
//! ```
//!
//! Unknown keys are ignored so that newer manifests stay readable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::util::fs;

/// Manifest location relative to a version package root.
pub const MANIFEST_PATH: &str = "manifest.toml";

/// Data subtree relative to a version package root.
pub const DATA_PATH: &str = "data";

/// The parsed version manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionManifest {
    /// Variant identity
    pub version: ManifestVersion,

    /// Content layout
    pub data: ManifestData,
}

/// `[version]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestVersion {
    pub lang: String,
    pub format: String,
}

/// `[data]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestData {
    /// Primary content file, relative to the data root
    pub index: PathBuf,
}

impl VersionManifest {
    pub fn new(lang: impl Into<String>, format: impl Into<String>, index: impl Into<PathBuf>) -> Self {
        VersionManifest {
            version: ManifestVersion {
                lang: lang.into(),
                format: format.into(),
            },
            data: ManifestData {
                index: index.into(),
            },
        }
    }

    /// Load a manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
            .with_context(|| format!("failed to parse version manifest: {}", path.display()))
    }

    /// Parse a manifest from a TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Write the manifest, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).context("failed to serialize version manifest")?;
        fs::write_string(path, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_manifest() {
        let manifest = VersionManifest::parse(
            r#"
[version]
lang = "en"
format = "pdf"

[data]
index = "statement.pdf"
"#,
        )
        .unwrap();

        assert_eq!(manifest, VersionManifest::new("en", "pdf", "statement.pdf"));
    }

    #[test]
    fn test_parse_tolerates_unknown_fields() {
        let manifest = VersionManifest::parse(
            r#"
schema = 2

[version]
lang = "ru"
format = "html"
encoding = "utf-8"

[data]
index = "index.html"
assets = ["style.css"]
"#,
        )
        .unwrap();

        assert_eq!(manifest.version.lang, "ru");
        assert_eq!(manifest.data.index, PathBuf::from("index.html"));
    }

    #[test]
    fn test_parse_missing_field_fails() {
        let result = VersionManifest::parse(
            r#"
[version]
lang = "en"

[data]
index = "statement.pdf"
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("format"), "unexpected error: {}", err);
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pkg").join(MANIFEST_PATH);

        let manifest = VersionManifest::new("ru", "html", "index.html");
        manifest.save(&path).unwrap();

        assert_eq!(VersionManifest::load(&path).unwrap(), manifest);
    }

    #[test]
    fn test_load_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_PATH);
        std::fs::write(&path, "not = [valid").unwrap();

        let err = format!("{:#}", VersionManifest::load(&path).unwrap_err());
        assert!(err.contains("failed to parse version manifest"));
    }
}
