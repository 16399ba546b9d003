//! Builds a [`Catalog`] from translation files on disk.

use std::collections::BTreeMap;
use std::path::{
    Path,
    PathBuf,
};

use super::discovery::find_translation_files;
use super::{
    Catalog,
    CatalogError,
};
use crate::input::translation::{
    TranslationTree,
    detect_locale_from_path,
};
use crate::types::Locale;

/// Loads every translation file under `root` matching `pattern`.
///
/// Files are read concurrently. A file whose name is not a supported locale
/// tag is skipped with a warning; a supported locale without a file ends up
/// with no tree, so its lookups return the key.
///
/// # Errors
/// - The directory does not exist or the pattern is invalid
/// - A file cannot be read or is not a JSON object
/// - Two files resolve to the same locale
pub async fn load_catalog(root: &Path, pattern: &str) -> Result<Catalog, CatalogError> {
    tracing::debug!(root = %root.display(), pattern, "Loading translation catalog");

    let mut locale_files: BTreeMap<Locale, PathBuf> = BTreeMap::new();
    for path in find_translation_files(root, pattern)? {
        let Some(locale) = detect_locale_from_path(&path) else {
            tracing::warn!(path = %path.display(), "Skipping translation file with unsupported locale name");
            continue;
        };
        if let Some(first) = locale_files.get(&locale) {
            return Err(CatalogError::DuplicateLocale { locale, first: first.clone(), second: path });
        }
        locale_files.insert(locale, path);
    }

    // 並列処理でファイルを読み込み
    let futures = locale_files
        .into_iter()
        .map(|(locale, path)| async move { (locale, load_translation_file(&path).await) });
    let results = futures::future::join_all(futures).await;

    let mut catalog = Catalog::new();
    for (locale, result) in results {
        catalog.insert(locale, result?);
    }

    for locale in Locale::ALL {
        if catalog.tree(locale).is_none() {
            tracing::warn!(%locale, root = %root.display(), "No translation file for locale");
        }
    }

    tracing::info!(locales = ?catalog.locales(), "Translation catalog loaded");
    Ok(catalog)
}

/// Reads and parses a single translation file.
async fn load_translation_file(path: &Path) -> Result<TranslationTree, CatalogError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;

    TranslationTree::parse(&content)
        .map_err(|source| CatalogError::Invalid { path: path.to_path_buf(), source })
}
