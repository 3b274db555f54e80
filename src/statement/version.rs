//! Statement versions - one (language, format) variant of a statement.
//!
//! A version is described by a small TOML config placed directly in the
//! statement directory:
//!
//! ```toml
//! [info]
//! lang = "en"
//! format = "pdf"
//!
//! [build]
//! source = "en"
//! index = "statement.pdf"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::ident::is_valid_id;
use crate::core::info::VersionInfo;
use crate::core::manifest::{VersionManifest, DATA_PATH, MANIFEST_PATH};
use crate::core::Entry;
use crate::pm::PackageIndex;
use crate::statement::StatementError;
use crate::util::fs::{is_contained, read_to_string};
use crate::util::hash::checksum_dir;

/// Parsed version config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConfig {
    pub info: InfoConfig,

    #[serde(default)]
    pub build: BuildSection,
}

/// `[info]` section - which variant this is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoConfig {
    pub lang: String,
    pub format: String,
}

/// `[build]` section - where the content comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Source directory, relative to the statement location
    pub source: Option<PathBuf>,

    /// Primary content file, relative to `source`
    pub index: Option<PathBuf>,
}

impl VersionConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse statement version config: {}", path.display()))
    }
}

/// Identity of a statement version: validated language and format plus the
/// sub-package entry derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionIdent {
    lang: String,
    format: String,
    subpackage: Entry,
}

impl VersionIdent {
    /// Check both identifiers against the identifier alphabet.
    pub fn new(lang: &str, format: &str) -> Result<Self, StatementError> {
        if !is_valid_id(lang) {
            return Err(StatementError::InvalidLang {
                lang: lang.to_string(),
            });
        }
        if !is_valid_id(format) {
            return Err(StatementError::InvalidFormat {
                format: format.to_string(),
            });
        }

        // Valid identifiers are always valid entry segments
        let subpackage = Entry::new(lang)
            .and_then(|e| e.child(format))
            .map_err(|_| StatementError::InvalidLang {
                lang: lang.to_string(),
            })?;

        Ok(VersionIdent {
            lang: lang.to_string(),
            format: format.to_string(),
            subpackage,
        })
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// `<lang>/<format>`, unique per variant.
    pub fn subpackage(&self) -> &Entry {
        &self.subpackage
    }
}

/// A statement version builder.
///
/// Versions are immutable once constructed; `make_package` only reads the
/// version's sources and writes into `destination`.
pub trait Version: fmt::Debug + Send + Sync {
    fn ident(&self) -> &VersionIdent;

    /// Build this version into `destination` as `package`.
    ///
    /// `resources_package` is the shared resources package every version
    /// of the statement depends on.
    fn make_package(
        &self,
        destination: &Path,
        package: &Entry,
        resources_package: &Entry,
    ) -> Result<(), StatementError>;

    fn lang(&self) -> &str {
        self.ident().lang()
    }

    fn format(&self) -> &str {
        self.ident().format()
    }

    /// Relative entry of this version inside its statement package.
    fn subpackage(&self) -> Entry {
        self.ident().subpackage().clone()
    }

    /// Descriptor entry; the package is relative to the statement package.
    fn info(&self) -> VersionInfo {
        VersionInfo {
            lang: self.lang().to_string(),
            format: self.format().to_string(),
            package: self.subpackage(),
        }
    }
}

/// Owned, dynamically dispatched version.
pub type VersionPtr = Box<dyn Version>;

/// Write a complete version package into `destination`.
///
/// `fill_data` populates the data directory it is given. Afterwards the
/// index file must exist under it; then the manifest and the package index
/// are written.
pub fn write_version_package<F>(
    destination: &Path,
    package: &Entry,
    resources_package: &Entry,
    manifest: &VersionManifest,
    fill_data: F,
) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    if !is_contained(&manifest.data.index) {
        bail!(
            "index `{}` must be a relative path inside the data directory",
            manifest.data.index.display()
        );
    }

    let data_root = destination.join(DATA_PATH);
    std::fs::create_dir_all(&data_root)
        .with_context(|| format!("failed to create directory: {}", data_root.display()))?;

    fill_data(&data_root)?;

    let index = data_root.join(&manifest.data.index);
    if !index.is_file() {
        bail!("index file `{}` was not produced", manifest.data.index.display());
    }

    manifest.save(&destination.join(MANIFEST_PATH))?;

    PackageIndex::new(package.clone())
        .with_dependency(resources_package.clone())
        .with_checksum(checksum_dir(&data_root)?)
        .save(destination)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Built;
    use tempfile::TempDir;

    #[test]
    fn test_load_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("en.toml");
        std::fs::write(
            &path,
            r#"
[info]
lang = "en"
format = "pdf"
comment = "ignored"

[build]
source = "en"
index = "statement.pdf"
"#,
        )
        .unwrap();

        let config = VersionConfig::load(&path).unwrap();
        assert_eq!(config.info.lang, "en");
        assert_eq!(config.info.format, "pdf");
        assert_eq!(config.build.source, Some(PathBuf::from("en")));
        assert_eq!(config.build.index, Some(PathBuf::from("statement.pdf")));
    }

    #[test]
    fn test_load_config_without_info_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("en.toml");
        std::fs::write(&path, "[build]\nsource = \"en\"\n").unwrap();

        let err = format!("{:#}", VersionConfig::load(&path).unwrap_err());
        assert!(err.contains("failed to parse statement version config"));
    }

    #[test]
    fn test_version_ident() {
        let ident = VersionIdent::new("en", "pdf").unwrap();
        assert_eq!(ident.lang(), "en");
        assert_eq!(ident.format(), "pdf");
        assert_eq!(ident.subpackage().to_string(), "en/pdf");

        let other = VersionIdent::new("en", "html").unwrap();
        assert_ne!(ident.subpackage(), other.subpackage());
    }

    #[test]
    fn test_version_ident_rejects_bad_ids() {
        assert!(matches!(
            VersionIdent::new("EN", "pdf"),
            Err(StatementError::InvalidLang { lang }) if lang == "EN"
        ));
        assert!(matches!(
            VersionIdent::new("en", "p/df"),
            Err(StatementError::InvalidFormat { format }) if format == "p/df"
        ));
    }

    #[test]
    fn test_write_version_package() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("pkg");
        let package: Entry = "s/en/txt".parse().unwrap();
        let resources: Entry = "s/resources".parse().unwrap();
        let manifest = VersionManifest::new("en", "txt", "statement.txt");

        write_version_package(&dest, &package, &resources, &manifest, |data| {
            std::fs::write(data.join("statement.txt"), "Add two numbers.")?;
            Ok(())
        })
        .unwrap();

        let built = Built::open(&dest).unwrap();
        assert_eq!(built.manifest(), &manifest);
        assert!(built.index().is_file());

        let index = PackageIndex::load(&dest).unwrap();
        assert_eq!(index.package, package);
        assert_eq!(index.dependencies, vec![resources]);
        assert!(index.checksum.is_some());
    }

    #[test]
    fn test_write_version_package_requires_index() {
        let tmp = TempDir::new().unwrap();
        let manifest = VersionManifest::new("en", "txt", "missing.txt");

        let err = write_version_package(
            tmp.path(),
            &"s/en/txt".parse().unwrap(),
            &"s/resources".parse().unwrap(),
            &manifest,
            |_| Ok(()),
        )
        .unwrap_err();

        assert!(err.to_string().contains("missing.txt"));
        assert!(!tmp.path().join(MANIFEST_PATH).exists());
    }

    #[test]
    fn test_write_version_package_rejects_escaping_index() {
        let tmp = TempDir::new().unwrap();
        let manifest = VersionManifest::new("en", "txt", "../outside.txt");

        let result = write_version_package(
            tmp.path(),
            &"s/en/txt".parse().unwrap(),
            &"s/resources".parse().unwrap(),
            &manifest,
            |_| Ok(()),
        );
        assert!(result.is_err());
    }
}
