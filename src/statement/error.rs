//! Statement error types and diagnostics.

use std::error::Error as StdError;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::Entry;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Boxed underlying cause of a packaging failure.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Broad classification of statement errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Problem with the statement as a whole (identifiers, layout)
    Statement,
    /// Problem with one particular version
    Version,
}

/// Error raised while discovering or packaging a statement.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum StatementError {
    #[error("invalid statement lang `{lang}`")]
    #[diagnostic(
        code(folio::statement::invalid_lang),
        help("use an ISO 639-1 code or register the language in config")
    )]
    InvalidLang { lang: String },

    #[error("invalid statement format `{format}`")]
    #[diagnostic(
        code(folio::statement::invalid_format),
        help("run `folio formats` to see the supported formats")
    )]
    InvalidFormat { format: String },

    #[error("statement version `{lang}/{format}` is declared more than once")]
    #[diagnostic(code(folio::statement::duplicate_version))]
    DuplicateVersion { lang: String, format: String },

    #[error(
        "failed to make package for statement version `{lang}/{format}` \
         (resources package `{resources_package}`)"
    )]
    #[diagnostic(code(folio::statement::version_make_package))]
    VersionMakePackage {
        lang: String,
        format: String,
        resources_package: Entry,
        #[source]
        source: BoxError,
    },
}

impl StatementError {
    /// Wrap a packaging failure of one version.
    pub fn make_package(
        lang: impl Into<String>,
        format: impl Into<String>,
        resources_package: &Entry,
        source: impl Into<BoxError>,
    ) -> Self {
        StatementError::VersionMakePackage {
            lang: lang.into(),
            format: format.into(),
            resources_package: resources_package.clone(),
            source: source.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StatementError::InvalidLang { .. }
            | StatementError::InvalidFormat { .. }
            | StatementError::DuplicateVersion { .. } => ErrorCategory::Statement,
            StatementError::VersionMakePackage { .. } => ErrorCategory::Version,
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string());

        match self {
            StatementError::InvalidLang { .. } => {
                diag.with_suggestion(suggestions::UNKNOWN_LANG)
            }
            StatementError::InvalidFormat { .. } => {
                diag.with_suggestion(suggestions::UNKNOWN_FORMAT)
            }
            StatementError::DuplicateVersion { .. } => {
                diag.with_suggestion(suggestions::DUPLICATE_VERSION)
            }
            StatementError::VersionMakePackage { source, .. } => {
                let mut diag = diag;
                let mut cause: Option<&(dyn StdError + 'static)> = Some(&**source);
                while let Some(err) = cause {
                    diag = diag.with_context(err.to_string());
                    cause = err.source();
                }
                diag.with_suggestion(suggestions::BUILD_FAILED)
            }
        }
    }
}
