//! Translation file discovery under the configured directory.

use std::path::{
    Path,
    PathBuf,
};

use globset::Glob;
use ignore::WalkBuilder;

use super::CatalogError;

/// Finds files under `root` whose root-relative path matches `pattern`.
///
/// Results are sorted so that loading order and error messages are stable.
pub(super) fn find_translation_files(
    root: &Path,
    pattern: &str,
) -> Result<Vec<PathBuf>, CatalogError> {
    if !root.is_dir() {
        return Err(CatalogError::DirectoryNotFound(root.to_path_buf()));
    }

    let matcher = Glob::new(pattern)
        .map_err(|source| CatalogError::InvalidPattern { pattern: pattern.to_string(), source })?
        .compile_matcher();

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        // ファイルのみを対象
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(root) else {
            continue;
        };
        if !matcher.is_match(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    tracing::debug!(root = %root.display(), count = found_files.len(), "Found translation files");
    Ok(found_files)
}
