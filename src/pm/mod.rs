//! Package manager abstraction.
//!
//! Statements only need three things from a package manager: publish a
//! built tree under an entry, find where an entry lives, and check whether
//! an entry exists.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::Entry;

pub mod index;
pub mod repository;

pub use index::{PackageIndex, INDEX_PATH};
pub use repository::LocalRepository;

/// A store of named packages.
pub trait PackageManager {
    /// Publish the package tree at `tree` as `entry`, returning its new location.
    ///
    /// Publishing replaces any previous package with the same entry.
    fn build(&self, tree: &Path, entry: &Entry) -> Result<PathBuf>;

    /// Location of a published package.
    fn resolve(&self, entry: &Entry) -> Result<PathBuf>;

    /// Whether a package is published under `entry`.
    fn exists(&self, entry: &Entry) -> bool;
}
