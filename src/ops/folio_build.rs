//! Implementation of `folio build`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::info::StatementInfo;
use crate::core::Entry;
use crate::pm::PackageManager;
use crate::statement::{Statement, VersionRegistry};

/// Options for the build command.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Build statement versions in parallel
    pub parallel: bool,
}

/// Result of a successful statement build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Entry the statement was published as
    pub package: Entry,

    /// Location of the published package
    pub path: PathBuf,

    /// Descriptor of the published statement
    pub info: StatementInfo,
}

/// Build the statement at `location` and publish it as `package`.
///
/// The package is assembled in a temporary directory and only handed to
/// the package manager once every version has built, so a failed build
/// never publishes anything.
pub fn build_statement(
    location: &Path,
    package: &Entry,
    registry: &VersionRegistry,
    pm: &dyn PackageManager,
    opts: &BuildOptions,
) -> Result<BuildReport> {
    let statement = Statement::instance(location, registry)?;

    let staging = tempfile::Builder::new()
        .prefix("folio-build-")
        .tempdir()
        .context("failed to create build directory")?;
    let tree = staging.path().join("package");

    if opts.parallel {
        statement.make_package_parallel(&tree, package)?;
    } else {
        statement.make_package(&tree, package)?;
    }

    let path = pm.build(&tree, package)?;

    Ok(BuildReport {
        package: package.clone(),
        path,
        info: statement.info().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pm::LocalRepository;
    use crate::statement::StatementError;
    use std::fs;
    use tempfile::TempDir;

    fn statement_dir(tmp: &TempDir, with_broken_version: bool) -> PathBuf {
        let location = tmp.path().join("statement");
        fs::create_dir_all(location.join("en")).unwrap();
        fs::write(location.join("en").join("statement.pdf"), "%PDF-1.4").unwrap();
        fs::write(
            location.join("en.toml"),
            "[info]\nlang = \"en\"\nformat = \"pdf\"\n[build]\nsource = \"en\"\nindex = \"statement.pdf\"\n",
        )
        .unwrap();

        if with_broken_version {
            // Source directory never created
            fs::write(
                location.join("ru.toml"),
                "[info]\nlang = \"ru\"\nformat = \"html\"\n[build]\nsource = \"ru\"\nindex = \"index.html\"\n",
            )
            .unwrap();
        }

        location
    }

    #[test]
    fn test_build_publishes() {
        let tmp = TempDir::new().unwrap();
        let location = statement_dir(&tmp, false);
        fs::create_dir_all(location.join("ru")).unwrap();
        fs::write(location.join("ru").join("index.html"), "<html/>").unwrap();
        fs::write(
            location.join("ru.toml"),
            "[info]\nlang = \"ru\"\nformat = \"html\"\n[build]\nsource = \"ru\"\nindex = \"index.html\"\n",
        )
        .unwrap();
        let repo = LocalRepository::new(tmp.path().join("repo"));
        let package: Entry = "problems/a/statement".parse().unwrap();

        let report = build_statement(
            &location,
            &package,
            &VersionRegistry::new(),
            &repo,
            &BuildOptions::default(),
        )
        .unwrap();

        assert!(repo.exists(&package));
        assert_eq!(report.path, repo.resolve(&package).unwrap());
        assert_eq!(report.info.versions.len(), 2);
        assert!(report.path.join("en").join("pdf").join("manifest.toml").is_file());
        for version in &report.info.versions {
            assert!(repo.exists(&package.join(&version.package)));
        }
        assert!(repo.exists(&package.child("resources").unwrap()));
    }

    #[test]
    fn test_failed_build_publishes_nothing() {
        let tmp = TempDir::new().unwrap();
        let location = statement_dir(&tmp, true);
        let repo = LocalRepository::new(tmp.path().join("repo"));
        let package: Entry = "problems/a/statement".parse().unwrap();

        let err = build_statement(
            &location,
            &package,
            &VersionRegistry::new(),
            &repo,
            &BuildOptions { parallel: true },
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<StatementError>(),
            Some(StatementError::VersionMakePackage { .. })
        ));
        assert!(!repo.exists(&package));
    }
}
