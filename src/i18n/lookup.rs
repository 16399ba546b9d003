//! Dotted-key translation lookup.

use crate::catalog::Catalog;
use crate::input::translation::{
    TranslationNode,
    TranslationTree,
};
use crate::types::Locale;

/// Resolves `key` (e.g. `about.features.title`) against `tree`.
///
/// Returns the translated string, or `key` itself when any segment is
/// missing, a leaf is reached before the last segment, or the path ends on
/// a nested group. The returned key doubles as a visible placeholder for
/// missing translations.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_site::i18n::lookup::lookup;
/// use i18n_site::input::translation::TranslationTree;
///
/// let tree = TranslationTree::from_json(&json!({ "nav": { "home": "Home" } })).unwrap();
/// assert_eq!(lookup(&tree, "nav.home"), "Home");
/// assert_eq!(lookup(&tree, "nav.blog"), "nav.blog");
/// assert_eq!(lookup(&tree, "nav"), "nav");
/// ```
#[must_use]
pub fn lookup<'a>(tree: &'a TranslationTree, key: &'a str) -> &'a str {
    let mut segments = key.split('.').peekable();
    let mut current = tree;

    while let Some(segment) = segments.next() {
        match current.get(segment) {
            Some(TranslationNode::Node(children)) => current = children,
            Some(TranslationNode::Leaf(text)) if segments.peek().is_none() => return text,
            Some(TranslationNode::Leaf(_)) | None => return key,
        }
    }

    key
}

/// A catalog bound to one locale, used while rendering a page.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    /// Source of all translation trees.
    catalog: &'a Catalog,
    /// Locale every lookup is made in.
    locale: Locale,
}

impl<'a> Translator<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog, locale: Locale) -> Self {
        Self { catalog, locale }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Translates `key` in this translator's locale.
    #[must_use]
    pub fn t(&self, key: &'a str) -> &'a str {
        self.catalog.lookup(self.locale, key)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;

    #[fixture]
    fn tree() -> TranslationTree {
        TranslationTree::from_json(&json!({
            "nav": {
                "home": "홈",
                "about": "소개"
            },
            "welcome": "환영합니다",
            "about": {
                "features": {
                    "item1": { "title": "빠른 속도" }
                }
            },
            "comparison": {
                "rows": [{ "feature": "SEO" }]
            },
            "": "빈 키",
            "count": 3
        }))
        .unwrap()
    }

    #[rstest]
    #[case::top_level("welcome", "환영합니다")]
    #[case::nested("nav.home", "홈")]
    #[case::deep("about.features.item1.title", "빠른 속도")]
    #[case::array_index("comparison.rows.0.feature", "SEO")]
    #[case::empty_key_present("", "빈 키")]
    fn test_lookup_found(tree: TranslationTree, #[case] key: &str, #[case] expected: &str) {
        assert_that!(lookup(&tree, key), eq(expected));
    }

    #[rstest]
    #[case::missing_top_level("goodbye")]
    #[case::missing_nested("nav.nonexistent")]
    #[case::path_too_short("nav")]
    #[case::path_too_long("welcome.title")]
    #[case::through_leaf("nav.home.icon")]
    #[case::non_text_value("count")]
    #[case::trailing_dot("nav.")]
    #[case::leading_dot(".nav")]
    #[case::array_out_of_range("comparison.rows.1.feature")]
    fn test_lookup_falls_back_to_key(tree: TranslationTree, #[case] key: &str) {
        assert_that!(lookup(&tree, key), eq(key));
    }

    #[rstest]
    fn test_lookup_empty_key_on_tree_without_empty_segment() {
        let tree = TranslationTree::from_json(&json!({ "nav": { "home": "Home" } })).unwrap();

        assert_that!(lookup(&tree, ""), eq(""));
    }

    #[rstest]
    fn test_lookup_is_pure(tree: TranslationTree) {
        let before = tree.clone();

        let first = lookup(&tree, "nav.home").to_string();
        let second = lookup(&tree, "nav.home").to_string();
        let _ = lookup(&tree, "nav.missing");

        assert_eq!(first, second);
        assert_eq!(tree, before);
    }

    #[rstest]
    fn test_translator_uses_bound_locale(tree: TranslationTree) {
        let english = TranslationTree::from_json(&json!({ "nav": { "home": "Home" } })).unwrap();
        let catalog = Catalog::new().with_tree(Locale::Ko, tree).with_tree(Locale::En, english);

        let ko = Translator::new(&catalog, Locale::Ko);
        let en = Translator::new(&catalog, Locale::En);

        assert_that!(ko.t("nav.home"), eq("홈"));
        assert_that!(en.t("nav.home"), eq("Home"));
        assert_that!(en.t("welcome"), eq("welcome"));
        assert_that!(en.locale(), eq(Locale::En));
    }
}
