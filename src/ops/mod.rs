//! High-level operations.
//!
//! This module contains the implementation of Folio commands.

pub mod folio_build;
pub mod inspect;

pub use folio_build::{build_statement, BuildOptions, BuildReport};
pub use inspect::{inspect_statement, show_statement, PublishedStatement};
