//! Core data structures for Folio.
//!
//! This module contains the foundational types used throughout Folio:
//! - Package entries (hierarchical package names)
//! - Identifier validation for languages and formats
//! - Version manifests and the built version view
//! - The statement descriptor

pub mod built;
pub mod entry;
pub mod ident;
pub mod info;
pub mod manifest;

pub use built::Built;
pub use entry::{Entry, EntryError};
pub use ident::LanguageSet;
pub use info::{StatementInfo, VersionInfo};
pub use manifest::VersionManifest;
