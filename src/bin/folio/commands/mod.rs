//! Command implementations

pub mod build;
pub mod completions;
pub mod formats;
pub mod inspect;
pub mod show;

use folio::statement::VersionRegistry;
use folio::GlobalContext;

/// Registry with the languages configured for this project.
pub fn registry(ctx: &GlobalContext) -> VersionRegistry {
    VersionRegistry::new().with_langs(&ctx.config().statement.extra_langs)
}
