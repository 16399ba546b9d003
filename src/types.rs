//! Core types used throughout the project.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A locale supported by the site.
///
/// The set is closed: every resolution path ends in one of these variants,
/// never in an arbitrary tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Korean (`ko`)
    Ko,
    /// English (`en`)
    En,
}

/// Error returned when a tag is not one of the supported locales.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported locale '{0}'. Supported locales: ko, en")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    /// Process-wide default locale.
    pub const DEFAULT: Self = Self::Ko;

    /// All supported locales, in display order.
    pub const ALL: [Self; 2] = [Self::Ko, Self::En];

    /// Returns the language tag (`ko`, `en`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    /// Returns the name of the language written in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Ko => "한국어",
            Self::En => "English",
        }
    }

    /// Looks up a locale by its exact, case-sensitive tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.as_str() == tag)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::korean("ko", Some(Locale::Ko))]
    #[case::english("en", Some(Locale::En))]
    #[case::uppercase("EN", None)]
    #[case::region_subtag("en-US", None)]
    #[case::unsupported("fr", None)]
    #[case::empty("", None)]
    fn test_from_tag(#[case] tag: &str, #[case] expected: Option<Locale>) {
        assert_that!(Locale::from_tag(tag), eq(expected));
    }

    #[rstest]
    fn test_default_is_korean() {
        assert_that!(Locale::default(), eq(Locale::Ko));
        assert_that!(Locale::DEFAULT.as_str(), eq("ko"));
    }

    #[rstest]
    fn test_all_round_trips_through_display() {
        for locale in Locale::ALL {
            assert_that!(locale.to_string().parse::<Locale>(), ok(eq(&locale)));
        }
    }

    #[rstest]
    fn test_from_str_unsupported_message() {
        let error = "de".parse::<Locale>().unwrap_err();

        assert_that!(error.to_string(), contains_substring("'de'"));
    }

    #[rstest]
    fn test_serde_uses_lowercase_tags() {
        assert_that!(serde_json::to_string(&Locale::En).unwrap(), eq("\"en\""));
        assert_that!(serde_json::from_str::<Locale>("\"ko\"").unwrap(), eq(Locale::Ko));
    }
}
