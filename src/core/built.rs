//! Read-only view over an already built statement version.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::manifest::{VersionManifest, DATA_PATH, MANIFEST_PATH};

/// A built statement version.
///
/// Opening a `Built` reads the manifest once; every accessor afterwards is
/// pure path arithmetic.
#[derive(Debug, Clone)]
pub struct Built {
    package_root: PathBuf,
    manifest: VersionManifest,
}

impl Built {
    /// Open the version package rooted at `package_root`.
    pub fn open(package_root: &Path) -> Result<Self> {
        let manifest = VersionManifest::load(&package_root.join(MANIFEST_PATH))?;
        Ok(Built {
            package_root: package_root.to_path_buf(),
            manifest,
        })
    }

    pub fn package_root(&self) -> &Path {
        &self.package_root
    }

    pub fn manifest(&self) -> &VersionManifest {
        &self.manifest
    }

    /// Directory holding the rendered content.
    pub fn data_root(&self) -> PathBuf {
        self.package_root.join(DATA_PATH)
    }

    /// Primary content file.
    pub fn index(&self) -> PathBuf {
        self.data_root().join(&self.manifest.data.index)
    }
}
