//! Copy builder - packages pre-rendered statement content as is.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::manifest::VersionManifest;
use crate::core::Entry;
use crate::statement::version::{
    write_version_package, Version, VersionConfig, VersionIdent, VersionPtr,
};
use crate::statement::StatementError;
use crate::util::fs::{copy_dir_all, is_contained};

/// A version whose content is already rendered and only needs copying.
#[derive(Debug, Clone)]
pub struct CopyVersion {
    ident: VersionIdent,

    /// Absolute source directory
    source: PathBuf,

    /// Primary content file, relative to `source`
    index: PathBuf,
}

impl CopyVersion {
    pub fn new(ident: VersionIdent, source: PathBuf, index: PathBuf) -> Self {
        CopyVersion {
            ident,
            source,
            index,
        }
    }

    /// Registry constructor.
    pub fn construct(
        location: &Path,
        ident: VersionIdent,
        config: &VersionConfig,
    ) -> Result<VersionPtr> {
        let source = config
            .build
            .source
            .as_ref()
            .context("copy builder requires `build.source`")?;
        let index = config
            .build
            .index
            .clone()
            .context("copy builder requires `build.index`")?;

        if !is_contained(source) {
            bail!(
                "`build.source` must be a relative path inside the statement directory, got `{}`",
                source.display()
            );
        }

        Ok(Box::new(CopyVersion::new(
            ident,
            location.join(source),
            index,
        )))
    }

    fn copy_data(&self, data_root: &Path) -> Result<()> {
        if !self.source.is_dir() {
            bail!(
                "statement source directory `{}` does not exist",
                self.source.display()
            );
        }
        copy_dir_all(&self.source, data_root)
    }
}

impl Version for CopyVersion {
    fn ident(&self) -> &VersionIdent {
        &self.ident
    }

    fn make_package(
        &self,
        destination: &Path,
        package: &Entry,
        resources_package: &Entry,
    ) -> Result<(), StatementError> {
        tracing::debug!(
            "copying statement version {}/{} from {}",
            self.lang(),
            self.format(),
            self.source.display()
        );

        let manifest = VersionManifest::new(self.lang(), self.format(), &self.index);
        write_version_package(destination, package, resources_package, &manifest, |data| {
            self.copy_data(data)
        })
        .map_err(|e| StatementError::make_package(self.lang(), self.format(), resources_package, e))
    }
}
