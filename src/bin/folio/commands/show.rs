//! `folio show` command

use anyhow::Result;

use crate::cli::ShowArgs;
use folio::ops::show_statement;
use folio::{Entry, GlobalContext, LocalRepository};

pub fn execute(args: ShowArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let package: Entry = args.package.parse()?;
    let repo = LocalRepository::new(ctx.repository_root(args.repo.as_deref()));

    let shown = show_statement(&repo, &package)?;

    println!("{} ({})", shown.package, shown.root.display());
    for built in &shown.versions {
        let manifest = built.manifest();
        println!(
            "  {:<6} {:<6} {}",
            manifest.version.lang,
            manifest.version.format,
            built.index().display()
        );
    }

    Ok(())
}
