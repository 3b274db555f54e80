//! Folio - builds problem statements into versioned packages.
//!
//! A statement is a problem description available in several
//! (language, format) variants. This crate discovers those variants on
//! disk, builds each into a self-contained package depending on a shared
//! resources package, and publishes the whole statement with a descriptor
//! listing every variant.

pub mod core;
pub mod ops;
pub mod pm;
pub mod statement;
pub mod util;

pub use crate::core::{Built, Entry, StatementInfo, VersionManifest};

pub use pm::{LocalRepository, PackageManager};
pub use statement::{Statement, StatementError, Version, VersionRegistry};
pub use util::context::GlobalContext;
