//! Implementation of `folio inspect` and `folio show`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::info::{StatementInfo, STATEMENT_INFO_PATH};
use crate::core::{Built, Entry};
use crate::pm::PackageManager;
use crate::statement::{Statement, VersionRegistry};

/// Discover the statement at `location` without building it.
pub fn inspect_statement(location: &Path, registry: &VersionRegistry) -> Result<StatementInfo> {
    let statement = Statement::instance(location, registry)?;
    Ok(statement.info().clone())
}

/// A published statement, opened for reading.
#[derive(Debug, Clone)]
pub struct PublishedStatement {
    pub package: Entry,
    pub root: PathBuf,
    pub info: StatementInfo,

    /// Built versions, in descriptor order
    pub versions: Vec<Built>,
}

/// Open a published statement and every version it lists.
pub fn show_statement(pm: &dyn PackageManager, package: &Entry) -> Result<PublishedStatement> {
    let root = pm.resolve(package)?;
    let info = StatementInfo::load(&root.join(STATEMENT_INFO_PATH))?;

    let versions = info
        .versions
        .iter()
        .map(|v| {
            Built::open(&root.join(v.package.location())).with_context(|| {
                format!("failed to open statement version `{}`", v.package)
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PublishedStatement {
        package: package.clone(),
        root,
        info,
        versions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{build_statement, BuildOptions};
    use crate::pm::LocalRepository;
    use std::fs;
    use tempfile::TempDir;

    fn statement_dir(tmp: &TempDir) -> PathBuf {
        let location = tmp.path().join("statement");
        for (lang, format, index) in [("en", "pdf", "statement.pdf"), ("ru", "html", "index.html")]
        {
            fs::create_dir_all(location.join(lang)).unwrap();
            fs::write(location.join(lang).join(index), "content").unwrap();
            fs::write(
                location.join(format!("{}.toml", lang)),
                format!(
                    "[info]\nlang = \"{}\"\nformat = \"{}\"\n[build]\nsource = \"{}\"\nindex = \"{}\"\n",
                    lang, format, lang, index
                ),
            )
            .unwrap();
        }
        location
    }

    #[test]
    fn test_inspect() {
        let tmp = TempDir::new().unwrap();
        let info = inspect_statement(&statement_dir(&tmp), &VersionRegistry::new()).unwrap();

        let packages: Vec<_> = info.versions.iter().map(|v| v.package.to_string()).collect();
        assert_eq!(packages, vec!["en/pdf", "ru/html"]);
    }

    #[test]
    fn test_show_after_build() {
        let tmp = TempDir::new().unwrap();
        let repo = LocalRepository::new(tmp.path().join("repo"));
        let package: Entry = "contest/a/statement".parse().unwrap();

        build_statement(
            &statement_dir(&tmp),
            &package,
            &VersionRegistry::new(),
            &repo,
            &BuildOptions::default(),
        )
        .unwrap();

        let shown = show_statement(&repo, &package).unwrap();
        assert_eq!(shown.versions.len(), 2);
        assert_eq!(shown.versions[1].manifest().version.format, "html");
        assert!(shown.versions.iter().all(|b| b.index().is_file()));
    }

    #[test]
    fn test_show_missing_package() {
        let tmp = TempDir::new().unwrap();
        let repo = LocalRepository::new(tmp.path());
        assert!(show_statement(&repo, &"nope".parse().unwrap()).is_err());
    }
}
