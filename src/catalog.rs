//! Immutable set of translation trees, one per locale.

/// Translation file discovery
mod discovery;
/// Concurrent catalog loading
mod loader;
/// Catalog error types
mod types;

use std::collections::BTreeMap;

pub use loader::load_catalog;
pub use types::CatalogError;

use crate::i18n::lookup::{
    Translator,
    lookup,
};
use crate::input::translation::TranslationTree;
use crate::types::Locale;

/// Translation trees for every loaded locale.
///
/// Built once at startup and shared read-only; a locale without a tree
/// answers every lookup with the key itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Locale → translation tree
    trees: BTreeMap<Locale, TranslationTree>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Catalog::insert`].
    #[must_use]
    pub fn with_tree(mut self, locale: Locale, tree: TranslationTree) -> Self {
        self.insert(locale, tree);
        self
    }

    /// Sets the tree for `locale`, returning the previous one.
    pub fn insert(&mut self, locale: Locale, tree: TranslationTree) -> Option<TranslationTree> {
        self.trees.insert(locale, tree)
    }

    #[must_use]
    pub fn tree(&self, locale: Locale) -> Option<&TranslationTree> {
        self.trees.get(&locale)
    }

    /// Locales that have a tree, in [`Locale`] order.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        self.trees.keys().copied().collect()
    }

    /// Translates `key` in `locale`, falling back to the key itself.
    #[must_use]
    pub fn lookup<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.trees.get(&locale).map_or(key, |tree| lookup(tree, key))
    }

    #[must_use]
    pub const fn translator(&self, locale: Locale) -> Translator<'_> {
        Translator::new(self, locale)
    }

    /// Leaf keys of the default locale that do not resolve in `locale`.
    #[must_use]
    pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
        let Some(reference) = self.trees.get(&Locale::DEFAULT) else {
            return Vec::new();
        };

        reference
            .leaf_keys()
            .into_iter()
            .filter(|key| self.lookup(locale, key) == key.as_str())
            .collect()
    }

    /// Logs keys present in the default locale but missing elsewhere.
    pub fn report_coverage(&self) {
        for locale in Locale::ALL.into_iter().filter(|locale| *locale != Locale::DEFAULT) {
            let missing = self.missing_keys(locale);
            if missing.is_empty() {
                tracing::debug!(%locale, "All translation keys present");
                continue;
            }
            tracing::warn!(
                %locale,
                count = missing.len(),
                "Translation keys missing; lookups will fall back to the key"
            );
            for key in &missing {
                tracing::debug!(%locale, key = %key, "Missing translation key");
            }
        }
    }
}
