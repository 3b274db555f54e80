//! Package index (`index.toml`) stored at the root of every package.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::Entry;
use crate::util::fs;

/// Index location relative to a package root.
pub const INDEX_PATH: &str = "index.toml";

/// Package metadata written next to the package contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageIndex {
    /// The entry this package is registered as
    pub package: Entry,

    /// Packages this package needs at use time
    #[serde(default)]
    pub dependencies: Vec<Entry>,

    /// Sub-packages bundled inside this package
    #[serde(default)]
    pub packages: Vec<Entry>,

    /// SHA-256 checksum of the package data tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

impl PackageIndex {
    pub fn new(package: Entry) -> Self {
        PackageIndex {
            package,
            dependencies: Vec::new(),
            packages: Vec::new(),
            checksum: None,
        }
    }

    pub fn with_dependency(mut self, dependency: Entry) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn with_packages(mut self, packages: impl IntoIterator<Item = Entry>) -> Self {
        self.packages.extend(packages);
        self
    }

    pub fn with_checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksum = Some(checksum.into());
        self
    }

    /// Load the index of the package rooted at `package_root`.
    pub fn load(package_root: &Path) -> Result<Self> {
        let path = package_root.join(INDEX_PATH);
        let contents = fs::read_to_string(&path)?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse package index: {}", path.display()))
    }

    /// Write the index into the package rooted at `package_root`.
    pub fn save(&self, package_root: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("failed to serialize package index")?;
        fs::write_string(&package_root.join(INDEX_PATH), &contents)
    }
}
