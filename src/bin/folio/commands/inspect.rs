//! `folio inspect` command

use anyhow::Result;

use crate::cli::InspectArgs;
use folio::ops::inspect_statement;
use folio::GlobalContext;

pub fn execute(args: InspectArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let location = ctx.resolve_path(&args.location);

    let info = inspect_statement(&location, &super::registry(&ctx))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    if info.versions.is_empty() {
        eprintln!("no statement versions found in {}", location.display());
        return Ok(());
    }

    for version in &info.versions {
        println!("{:<6} {:<6} {}", version.lang, version.format, version.package);
    }

    Ok(())
}
