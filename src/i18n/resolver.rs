//! Locale resolution for incoming requests.
//!
//! Precedence, first match wins:
//! 1. a leading `/ko` or `/en` path segment,
//! 2. the persisted `locale` cookie,
//! 3. [`Locale::DEFAULT`].
//!
//! The `Accept-Language` header is consulted only by
//! [`detect_locale_from_header`], which decides where the unlocalized root
//! route redirects to.

use thiserror::Error;
use url::Url;

use super::cookie::locale_from_cookie;
use super::paths::locale_from_path;
use crate::types::Locale;

/// Per-request input to [`resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext {
    /// Bare path (`/en/about`) or absolute URL (`https://example.com/en/about`).
    pub url: String,
    /// Raw `Cookie` header.
    pub cookie_header: Option<String>,
    /// Raw `Accept-Language` header.
    pub accept_language: Option<String>,
}

impl ResolutionContext {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), cookie_header: None, accept_language: None }
    }

    #[must_use]
    pub fn with_cookie_header(mut self, cookie_header: impl Into<String>) -> Self {
        self.cookie_header = Some(cookie_header.into());
        self
    }

    #[must_use]
    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// An input starting with `http://` or `https://` could not be parsed.
    #[error("Failed to parse request URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Extracts the path locale from a bare path or an absolute URL.
///
/// # Errors
/// Returns [`ResolveError::InvalidUrl`] when an absolute URL is malformed.
pub fn locale_from_url(url_or_path: &str) -> Result<Option<Locale>, ResolveError> {
    if url_or_path.starts_with("http://") || url_or_path.starts_with("https://") {
        let url = Url::parse(url_or_path).map_err(|source| ResolveError::InvalidUrl {
            url: url_or_path.to_string(),
            source,
        })?;
        return Ok(locale_from_path(url.path()));
    }

    Ok(locale_from_path(url_or_path))
}

/// Decides the active locale for a request.
///
/// # Errors
/// Returns [`ResolveError::InvalidUrl`] when `context.url` is a malformed
/// absolute URL. Every other input degrades to a supported locale.
pub fn resolve(context: &ResolutionContext) -> Result<Locale, ResolveError> {
    if let Some(locale) = locale_from_url(&context.url)? {
        tracing::debug!(%locale, url = %context.url, "Locale resolved from path");
        return Ok(locale);
    }

    if let Some(locale) = context.cookie_header.as_deref().and_then(locale_from_cookie) {
        tracing::debug!(%locale, "Locale resolved from cookie");
        return Ok(locale);
    }

    tracing::debug!(locale = %Locale::DEFAULT, "Locale resolved to default");
    Ok(Locale::DEFAULT)
}

/// Picks the initial locale from an `Accept-Language` header.
///
/// Plain substring containment, `ko` before `en`; quality values are not
/// parsed. Falls back to [`Locale::DEFAULT`].
#[must_use]
pub fn detect_locale_from_header(accept_language: Option<&str>) -> Locale {
    accept_language
        .and_then(|header| {
            [Locale::Ko, Locale::En].into_iter().find(|locale| header.contains(locale.as_str()))
        })
        .unwrap_or(Locale::DEFAULT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_path_wins_over_cookie_and_header(
        #[values(Locale::Ko, Locale::En)] locale: Locale,
        #[values("", "/", "/about", "/contact?x=1")] suffix: &str,
        #[values(None, Some("locale=ko"), Some("locale=en"), Some("locale=fr"))]
        cookie: Option<&str>,
    ) {
        let mut context = ResolutionContext::new(format!("/{locale}{suffix}"))
            .with_accept_language("fr-FR,fr;q=0.9");
        context.cookie_header = cookie.map(str::to_string);

        assert_that!(resolve(&context), ok(eq(&locale)));
    }

    #[rstest]
    #[case::cookie_en("/about", Some("locale=en"), Locale::En)]
    #[case::cookie_ko("/about", Some("locale=ko"), Locale::Ko)]
    #[case::no_cookie("/about", None, Locale::Ko)]
    #[case::empty_cookie("/about", Some("locale="), Locale::Ko)]
    #[case::unsupported_cookie("/about", Some("locale=de"), Locale::Ko)]
    #[case::unsupported_path_uses_cookie("/fr/something", Some("locale=en"), Locale::En)]
    #[case::unsupported_path_uses_default("/fr/something", None, Locale::Ko)]
    #[case::root("/", Some("theme=dark; locale=en"), Locale::En)]
    fn test_resolve_without_path_locale(
        #[case] url: &str,
        #[case] cookie: Option<&str>,
        #[case] expected: Locale,
    ) {
        let mut context = ResolutionContext::new(url);
        context.cookie_header = cookie.map(str::to_string);

        assert_that!(resolve(&context), ok(eq(&expected)));
    }

    #[rstest]
    fn test_resolve_ignores_accept_language() {
        let context = ResolutionContext::new("/about").with_accept_language("en-US,en;q=0.9");

        assert_that!(resolve(&context), ok(eq(&Locale::Ko)));
    }

    #[rstest]
    #[case::absolute_en("https://example.com/en/about", Some(Locale::En))]
    #[case::absolute_ko_with_query("http://localhost:3000/ko?ref=nav", Some(Locale::Ko))]
    #[case::absolute_no_locale("https://example.com/about/en", None)]
    #[case::absolute_root("https://example.com", None)]
    #[case::bare_path("/en", Some(Locale::En))]
    #[case::bare_unsupported("/fr", None)]
    fn test_locale_from_url(#[case] url: &str, #[case] expected: Option<Locale>) {
        assert_that!(locale_from_url(url), ok(eq(&expected)));
    }

    #[rstest]
    fn test_locale_from_url_malformed_absolute_url() {
        let result = locale_from_url("http://");

        assert!(matches!(result, Err(ResolveError::InvalidUrl { .. })));
    }

    #[rstest]
    fn test_resolve_propagates_malformed_url() {
        let context = ResolutionContext::new("https://exa mple.com/en").with_cookie_header("locale=en");

        let error = resolve(&context).unwrap_err();

        assert_that!(error.to_string(), contains_substring("https://exa mple.com/en"));
    }

    #[rstest]
    #[case::english_us("en-US,en;q=0.9", Locale::En)]
    #[case::korean("ko-KR,ko;q=0.9,en-US;q=0.8", Locale::Ko)]
    #[case::korean_wins_even_with_lower_quality("en;q=1.0,ko;q=0.1", Locale::Ko)]
    #[case::unsupported("fr-FR", Locale::Ko)]
    #[case::case_sensitive("EN-US", Locale::Ko)]
    #[case::empty("", Locale::Ko)]
    fn test_detect_locale_from_header(#[case] header: &str, #[case] expected: Locale) {
        assert_that!(detect_locale_from_header(Some(header)), eq(expected));
    }

    #[rstest]
    fn test_detect_locale_from_header_missing() {
        assert_that!(detect_locale_from_header(None), eq(Locale::DEFAULT));
    }
}
