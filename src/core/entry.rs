//! Package entries - WHERE a package lives in the package namespace.
//!
//! An entry is a hierarchical name like `problems/a-plus-b/statement/en/pdf`.
//! Entries are plain values: cheap to clone, comparable, and serialized as
//! their string form.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between entry segments.
pub const SEPARATOR: char = '/';

/// Error returned when parsing an invalid entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("package entry is empty")]
    Empty,

    #[error("package entry `{entry}` has an empty segment")]
    EmptySegment { entry: String },

    #[error("package entry `{entry}` has invalid segment `{segment}`")]
    InvalidSegment { entry: String, segment: String },
}

/// A hierarchical package name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Entry {
    segments: Vec<String>,
}

impl Entry {
    /// Create an entry from a single segment.
    pub fn new(segment: &str) -> Result<Self, EntryError> {
        if segment.is_empty() {
            return Err(EntryError::Empty);
        }
        validate_segment(segment, segment)?;
        Ok(Entry {
            segments: vec![segment.to_string()],
        })
    }

    /// Append another entry below this one.
    pub fn join(&self, other: &Entry) -> Entry {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Entry { segments }
    }

    /// Append a single segment below this one.
    pub fn child(&self, segment: &str) -> Result<Entry, EntryError> {
        Ok(self.join(&Entry::new(segment)?))
    }

    /// The segments of this entry, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment.
    pub fn name(&self) -> &str {
        // Entries always have at least one segment
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Relative filesystem location for this entry.
    pub fn location(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

fn validate_segment(entry: &str, segment: &str) -> Result<(), EntryError> {
    if segment.is_empty() {
        return Err(EntryError::EmptySegment {
            entry: entry.to_string(),
        });
    }

    let valid_chars = segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if !valid_chars || segment == "." || segment == ".." {
        return Err(EntryError::InvalidSegment {
            entry: entry.to_string(),
            segment: segment.to_string(),
        });
    }

    Ok(())
}

impl FromStr for Entry {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(EntryError::Empty);
        }

        let mut segments = Vec::new();
        for segment in s.split(SEPARATOR) {
            validate_segment(s, segment)?;
            segments.push(segment.to_string());
        }

        Ok(Entry { segments })
    }
}

impl TryFrom<String> for Entry {
    type Error = EntryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Entry> for String {
    fn from(entry: Entry) -> Self {
        entry.to_string()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry({})", self)
    }
}
