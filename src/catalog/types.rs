//! Catalog type definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::input::translation::TranslationError;
use crate::types::Locale;

/// Errors raised while loading the translation catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The configured translations directory does not exist
    #[error("Translations directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The file pattern is not a valid glob
    #[error("Invalid translation file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Error when failing to read a file
    #[error("Failed to read translation file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON object
    #[error("Invalid translation file {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: TranslationError,
    },

    /// Two files map to the same locale
    #[error("Duplicate translation files for locale '{locale}': {} and {}", first.display(), second.display())]
    DuplicateLocale { locale: Locale, first: PathBuf, second: PathBuf },
}
