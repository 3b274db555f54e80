//! Statement descriptor - the list of variants a statement offers.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::Entry;
use crate::util::fs;

/// Descriptor location relative to a statement package root.
pub const STATEMENT_INFO_PATH: &str = "statement.json";

/// One statement variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub lang: String,
    pub format: String,

    /// Version package, relative to the statement package
    pub package: Entry,
}

/// Aggregated statement descriptor, versions in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementInfo {
    #[serde(default)]
    pub versions: Vec<VersionInfo>,
}

impl StatementInfo {
    /// Find a version by language and format.
    pub fn find(&self, lang: &str, format: &str) -> Option<&VersionInfo> {
        self.versions
            .iter()
            .find(|v| v.lang == lang && v.format == format)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse statement descriptor: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .context("failed to serialize statement descriptor")?;
        fs::write_string(path, &contents)
    }
}
