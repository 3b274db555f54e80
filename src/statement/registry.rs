//! Version registry - maps version configs to concrete builders.
//!
//! Builders are registered explicitly, keyed either by `(lang, format)` or
//! by format alone. Lookup tries the exact pair first.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::core::ident::LanguageSet;
use crate::statement::copy::CopyVersion;
use crate::statement::version::{VersionConfig, VersionIdent, VersionPtr};
use crate::statement::StatementError;

/// Constructor for a concrete version.
///
/// Receives the statement location (the directory holding the config), the
/// validated identity and the parsed config.
pub type VersionConstructor =
    fn(location: &Path, ident: VersionIdent, config: &VersionConfig) -> Result<VersionPtr>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct BuilderKey {
    lang: Option<String>,
    format: String,
}

/// Formats handled by the built-in copy builder.
pub const COPY_FORMATS: &[&str] = &["pdf", "html", "txt", "md"];

/// Registry of statement version builders.
#[derive(Clone)]
pub struct VersionRegistry {
    builders: HashMap<BuilderKey, VersionConstructor>,
    langs: LanguageSet,
}

impl VersionRegistry {
    /// Create a registry with all built-in builders.
    pub fn new() -> Self {
        let mut registry = VersionRegistry {
            builders: HashMap::new(),
            langs: LanguageSet::iso(),
        };

        for format in COPY_FORMATS {
            registry.register_format(format, CopyVersion::construct);
        }

        registry
    }

    /// Accept additional languages.
    pub fn with_langs<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.langs.extend(extra);
        self
    }

    /// Register a builder for one specific language and format.
    pub fn register(&mut self, lang: &str, format: &str, constructor: VersionConstructor) {
        self.builders.insert(
            BuilderKey {
                lang: Some(lang.to_string()),
                format: format.to_string(),
            },
            constructor,
        );
    }

    /// Register a builder for a format, regardless of language.
    pub fn register_format(&mut self, format: &str, constructor: VersionConstructor) {
        self.builders.insert(
            BuilderKey {
                lang: None,
                format: format.to_string(),
            },
            constructor,
        );
    }

    /// Find the builder for a variant.
    pub fn lookup(&self, lang: &str, format: &str) -> Option<VersionConstructor> {
        let exact = BuilderKey {
            lang: Some(lang.to_string()),
            format: format.to_string(),
        };
        let any_lang = BuilderKey {
            lang: None,
            format: format.to_string(),
        };

        self.builders
            .get(&exact)
            .or_else(|| self.builders.get(&any_lang))
            .copied()
    }

    /// Known languages.
    pub fn langs(&self) -> &LanguageSet {
        &self.langs
    }

    /// Formats with at least one registered builder, sorted.
    pub fn formats(&self) -> Vec<&str> {
        self.builders
            .keys()
            .map(|k| k.format.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Construct the version described by the config at `config_location`.
    ///
    /// The statement location is `config_location`'s parent directory.
    pub fn instance(&self, config_location: &Path) -> Result<VersionPtr> {
        let location = config_location.parent().ok_or_else(|| {
            anyhow!(
                "statement version config `{}` has no parent directory",
                config_location.display()
            )
        })?;

        let config = VersionConfig::load(config_location)?;
        let (lang, format) = (&config.info.lang, &config.info.format);

        if !self.langs.contains(lang) {
            return Err(StatementError::InvalidLang { lang: lang.clone() }.into());
        }
        let ident = VersionIdent::new(lang, format)?;

        let constructor = self
            .lookup(lang, format)
            .ok_or_else(|| StatementError::InvalidFormat {
                format: format.clone(),
            })?;

        tracing::debug!(
            "found statement version {}/{} in {}",
            lang,
            format,
            config_location.display()
        );

        constructor(location, ident, &config).with_context(|| {
            format!(
                "failed to set up statement version from {}",
                config_location.display()
            )
        })
    }
}

impl fmt::Debug for VersionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionRegistry")
            .field("formats", &self.formats())
            .field("langs", &self.langs.len())
            .finish()
    }
}

impl Default for VersionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
