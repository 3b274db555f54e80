//! `folio formats` command

use anyhow::Result;

use folio::GlobalContext;

pub fn execute() -> Result<()> {
    let ctx = GlobalContext::new()?;
    let registry = super::registry(&ctx);

    for format in registry.formats() {
        println!("{}", format);
    }
    eprintln!("{} known languages", registry.langs().len());

    Ok(())
}
