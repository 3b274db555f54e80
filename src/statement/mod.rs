//! Statements - problem descriptions available in several variants.
//!
//! A statement directory holds one TOML config per version plus an
//! optional `resources/` directory shared by all of them:
//!
//! ```text
//! statement/
//!   en.toml          # [info] lang = "en", format = "pdf"
//!   ru.toml          # [info] lang = "ru", format = "html"
//!   en/statement.pdf
//!   ru/index.html
//!   resources/       # shared assets
//! ```
//!
//! Building a statement produces one package tree:
//!
//! ```text
//! <destination>/
//!   index.toml       # statement package index
//!   statement.json   # descriptor
//!   resources/       # resources package
//!   en/pdf/          # version packages, one per <lang>/<format>
//!   ru/html/
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use rayon::prelude::*;

use crate::core::info::{StatementInfo, STATEMENT_INFO_PATH};
use crate::core::manifest::DATA_PATH;
use crate::core::Entry;
use crate::pm::PackageIndex;
use crate::util::fs::{copy_dir_all, ensure_dir, files_with_extension};
use crate::util::hash::checksum_dir;

pub mod copy;
pub mod error;
pub mod registry;
pub mod version;

pub use copy::CopyVersion;
pub use error::{ErrorCategory, StatementError};
pub use registry::{VersionConstructor, VersionRegistry};
pub use version::{Version, VersionConfig, VersionIdent, VersionPtr};

/// Shared resources directory, and the resources sub-package name.
pub const RESOURCES_PATH: &str = "resources";

/// Extension of version config files.
pub const VERSION_CONFIG_EXTENSION: &str = "toml";

/// A statement and all of its versions.
///
/// The version list and the descriptor are fixed at construction.
#[derive(Debug)]
pub struct Statement {
    location: PathBuf,
    versions: Vec<VersionPtr>,
    info: StatementInfo,
}

impl Statement {
    /// Discover the statement at `location`.
    ///
    /// Every `*.toml` file directly inside `location` is a version config;
    /// versions are ordered by config file name. Any version that fails to
    /// load fails the whole statement.
    pub fn instance(location: &Path, registry: &VersionRegistry) -> Result<Self> {
        if !location.is_dir() {
            bail!(
                "statement location `{}` is not a directory",
                location.display()
            );
        }

        let versions = files_with_extension(location, VERSION_CONFIG_EXTENSION)?
            .iter()
            .map(|config| registry.instance(config))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(location.to_path_buf(), versions)?)
    }

    /// Create a statement from already constructed versions.
    pub fn new(location: PathBuf, versions: Vec<VersionPtr>) -> Result<Self, StatementError> {
        let mut seen = HashSet::new();
        for version in &versions {
            if version.lang() == RESOURCES_PATH {
                return Err(StatementError::InvalidLang {
                    lang: version.lang().to_string(),
                });
            }
            if !seen.insert(version.subpackage()) {
                return Err(StatementError::DuplicateVersion {
                    lang: version.lang().to_string(),
                    format: version.format().to_string(),
                });
            }
        }

        let info = collect_info(&versions);
        Ok(Statement {
            location,
            versions,
            info,
        })
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn versions(&self) -> &[VersionPtr] {
        &self.versions
    }

    /// The statement descriptor; package entries are relative to the
    /// statement package.
    pub fn info(&self) -> &StatementInfo {
        &self.info
    }

    /// Build the statement package into `destination` as `package`,
    /// one version after another.
    pub fn make_package(&self, destination: &Path, package: &Entry) -> Result<()> {
        self.make_package_with(destination, package, false)
    }

    /// Same as [`Statement::make_package`], building versions in parallel.
    ///
    /// On failure the error of the first failing version in discovery
    /// order is returned.
    pub fn make_package_parallel(&self, destination: &Path, package: &Entry) -> Result<()> {
        self.make_package_with(destination, package, true)
    }

    fn make_package_with(&self, destination: &Path, package: &Entry, parallel: bool) -> Result<()> {
        tracing::info!(
            "building statement `{}` ({} versions)",
            package,
            self.versions.len()
        );

        // Resolved once; every version of this build depends on the same package
        let resources_package = self.make_resources(destination, package)?;

        let build_version = |version: &VersionPtr| -> Result<(), StatementError> {
            let subpackage = version.subpackage();
            tracing::debug!("building statement version `{}`", subpackage);
            version.make_package(
                &destination.join(subpackage.location()),
                &package.join(&subpackage),
                &resources_package,
            )
        };

        if parallel {
            let results: Vec<_> = self.versions.par_iter().map(build_version).collect();
            for result in results {
                result?;
            }
        } else {
            for version in &self.versions {
                build_version(version)?;
            }
        }

        self.info.save(&destination.join(STATEMENT_INFO_PATH))?;

        let packages = std::iter::once(resources_package.clone())
            .chain(self.versions.iter().map(|v| package.join(&v.subpackage())));
        PackageIndex::new(package.clone())
            .with_dependency(resources_package)
            .with_packages(packages)
            .save(destination)?;

        Ok(())
    }

    /// Build the resources package from `<location>/resources`, or an empty
    /// one if the statement has no shared resources.
    fn make_resources(&self, destination: &Path, package: &Entry) -> Result<Entry> {
        let resources_package = package.child(RESOURCES_PATH)?;
        let root = destination.join(RESOURCES_PATH);
        let data_root = root.join(DATA_PATH);
        ensure_dir(&data_root)?;

        let source = self.location.join(RESOURCES_PATH);
        if source.is_dir() {
            copy_dir_all(&source, &data_root)?;
        }

        PackageIndex::new(resources_package.clone())
            .with_checksum(checksum_dir(&data_root)?)
            .save(&root)?;

        Ok(resources_package)
    }
}

fn collect_info(versions: &[VersionPtr]) -> StatementInfo {
    StatementInfo {
        versions: versions.iter().map(|v| v.info()).collect(),
    }
}
