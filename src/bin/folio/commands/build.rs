//! `folio build` command

use anyhow::Result;

use crate::cli::BuildArgs;
use folio::ops::{build_statement, BuildOptions};
use folio::{Entry, GlobalContext, LocalRepository};

pub fn execute(args: BuildArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let location = ctx.resolve_path(&args.location);
    let package: Entry = args.package.parse()?;
    let repo = LocalRepository::new(ctx.repository_root(args.repo.as_deref()));
    let registry = super::registry(&ctx);

    // Parallel: CLI flag OR config setting
    let opts = BuildOptions {
        parallel: args.parallel || ctx.config().build.parallel,
    };

    let report = build_statement(&location, &package, &registry, &repo, &opts)?;

    for version in &report.info.versions {
        eprintln!(
            "   Packaged {}/{} -> `{}`",
            version.lang,
            version.format,
            report.package.join(&version.package)
        );
    }
    eprintln!(
        "    Finished `{}` -> {}",
        report.package,
        report.path.display()
    );

    Ok(())
}
