//! Locale-tagged URL path helpers.

use crate::types::Locale;

/// Splits a leading `/{locale}` segment off `path`.
///
/// Matches `^/(ko|en)(/|$)`: case-sensitive, anchored at the start, and the
/// tag must be a whole segment.
fn split_locale_prefix(path: &str) -> Option<(Locale, &str)> {
    let rest = path.strip_prefix('/')?;
    Locale::ALL.into_iter().find_map(|locale| {
        let remainder = rest.strip_prefix(locale.as_str())?;
        (remainder.is_empty() || remainder.starts_with('/')).then_some((locale, remainder))
    })
}

/// Returns the locale named by the first segment of a URL path.
#[must_use]
pub fn locale_from_path(path: &str) -> Option<Locale> {
    split_locale_prefix(path).map(|(locale, _)| locale)
}

/// Removes a leading locale segment, returning the rest of the path.
///
/// `/en/about` → `/about`, `/ko` → empty, `/pricing` unchanged.
#[must_use]
pub fn strip_locale_prefix(path: &str) -> &str {
    split_locale_prefix(path).map_or(path, |(_, rest)| rest)
}

/// Builds the path of `rest` under `locale`.
#[must_use]
pub fn localized_path(locale: Locale, rest: &str) -> String {
    format!("/{locale}{rest}")
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::bare_ko("/ko", Some(Locale::Ko))]
    #[case::bare_en("/en", Some(Locale::En))]
    #[case::trailing_slash("/en/", Some(Locale::En))]
    #[case::nested("/en/about/team", Some(Locale::En))]
    #[case::unsupported("/fr/something", None)]
    #[case::prefix_only("/english", None)]
    #[case::uppercase("/EN/about", None)]
    #[case::not_first_segment("/about/en", None)]
    #[case::no_leading_slash("en/about", None)]
    #[case::root("/", None)]
    #[case::empty("", None)]
    fn test_locale_from_path(#[case] path: &str, #[case] expected: Option<Locale>) {
        assert_that!(locale_from_path(path), eq(expected));
    }

    #[rstest]
    #[case("/en/about", "/about")]
    #[case("/ko", "")]
    #[case("/ko/", "/")]
    #[case("/pricing", "/pricing")]
    #[case("/english", "/english")]
    fn test_strip_locale_prefix(#[case] path: &str, #[case] expected: &str) {
        assert_that!(strip_locale_prefix(path), eq(expected));
    }

    #[rstest]
    #[case(Locale::En, "", "/en")]
    #[case(Locale::Ko, "/contact", "/ko/contact")]
    fn test_localized_path(#[case] locale: Locale, #[case] rest: &str, #[case] expected: &str) {
        assert_that!(localized_path(locale, rest), eq(expected));
    }
}
