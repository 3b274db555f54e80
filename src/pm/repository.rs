//! Local package repository.
//!
//! Packages live in a plain directory tree: entry `a/b/c` is stored at
//! `<root>/a/b/c`, with its `index.toml` at the package root.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::Entry;
use crate::pm::{PackageIndex, PackageManager, INDEX_PATH};
use crate::util::fs::{copy_dir_all, ensure_dir};

/// A package repository on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalRepository { root: root.into() }
    }

    /// Repository root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn package_path(&self, entry: &Entry) -> PathBuf {
        self.root.join(entry.location())
    }

    /// Packages may not nest inside other published packages, and may only
    /// replace a directory that is itself a package root.
    fn check_publish_target(&self, entry: &Entry) -> Result<()> {
        let segments = entry.segments();
        for depth in 1..segments.len() {
            let ancestor = &segments[..depth];
            let path: PathBuf = ancestor.iter().collect();
            if self.root.join(path).join(INDEX_PATH).is_file() {
                bail!(
                    "cannot publish `{}` inside published package `{}`",
                    entry,
                    ancestor.join("/")
                );
            }
        }

        let target = self.package_path(entry);
        if target.exists() && !target.join(INDEX_PATH).is_file() {
            bail!(
                "cannot publish `{}`: {} exists and is not a package",
                entry,
                target.display()
            );
        }

        Ok(())
    }
}

impl PackageManager for LocalRepository {
    fn build(&self, tree: &Path, entry: &Entry) -> Result<PathBuf> {
        let index = PackageIndex::load(tree)
            .with_context(|| format!("`{}` is not a package tree", tree.display()))?;
        if &index.package != entry {
            bail!(
                "package tree at `{}` is built as `{}`, not `{}`",
                tree.display(),
                index.package,
                entry
            );
        }

        self.check_publish_target(entry)?;

        let target = self.package_path(entry);
        if let Some(parent) = target.parent() {
            ensure_dir(parent)?;
        }

        // Stage next to the target so the final rename never crosses filesystems
        let staging = tempfile::Builder::new()
            .prefix(".publish-")
            .tempdir_in(&self.root)
            .with_context(|| format!("failed to create staging directory in {}", self.root.display()))?;
        let staged = staging.path().join("package");
        copy_dir_all(tree, &staged)?;

        swap_into_place(&staged, &target, &staging.path().join("retired"))?;

        tracing::info!("published `{}` to {}", entry, target.display());
        Ok(target)
    }

    fn resolve(&self, entry: &Entry) -> Result<PathBuf> {
        if !self.exists(entry) {
            bail!(
                "package `{}` not found in repository {}",
                entry,
                self.root.display()
            );
        }
        Ok(self.package_path(entry))
    }

    fn exists(&self, entry: &Entry) -> bool {
        self.package_path(entry).join(INDEX_PATH).is_file()
    }
}

/// Move `staged` to `target`, parking any previous package at `retired`.
///
/// The previous package is moved back if the final rename fails.
fn swap_into_place(staged: &Path, target: &Path, retired: &Path) -> Result<()> {
    let replacing = target.exists();
    if replacing {
        fs::rename(target, retired).with_context(|| {
            format!("failed to retire previous package: {}", target.display())
        })?;
    }

    if let Err(err) = fs::rename(staged, target) {
        if replacing {
            if let Err(restore) = fs::rename(retired, target) {
                tracing::error!(
                    "failed to restore previous package {}: {}",
                    target.display(),
                    restore
                );
            }
        }
        return Err(err)
            .with_context(|| format!("failed to publish package: {}", target.display()));
    }

    Ok(())
}
