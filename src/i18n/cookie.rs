//! Locale cookie parsing and serialization.

use crate::types::Locale;

/// Name of the cookie that persists the visitor's locale.
pub const LOCALE_COOKIE: &str = "locale";

/// One year, in seconds.
pub const DEFAULT_MAX_AGE_SECONDS: u64 = 60 * 60 * 24 * 365;

/// Returns the value of the first cookie called `name` in a `Cookie` header.
///
/// Pairs are separated by `;`. Surrounding whitespace and a pair of double
/// quotes around the value are removed.
#[must_use]
pub fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| {
            let value = value.trim();
            value.strip_prefix('"').and_then(|v| v.strip_suffix('"')).unwrap_or(value)
        })
    })
}

/// Reads the persisted locale from a `Cookie` header.
///
/// An empty or unsupported value is treated as absent.
#[must_use]
pub fn locale_from_cookie(cookie_header: &str) -> Option<Locale> {
    let value = cookie_value(cookie_header, LOCALE_COOKIE).filter(|value| !value.is_empty())?;
    let locale = Locale::from_tag(value);
    if locale.is_none() {
        tracing::debug!(value, "Ignoring unsupported locale cookie");
    }
    locale
}

/// Attributes of the `Set-Cookie` header written for the locale cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleCookie {
    /// Lifetime in seconds.
    pub max_age_seconds: u64,
    /// Adds the `Secure` attribute (production only).
    pub secure: bool,
}

impl Default for LocaleCookie {
    fn default() -> Self {
        Self { max_age_seconds: DEFAULT_MAX_AGE_SECONDS, secure: false }
    }
}

impl LocaleCookie {
    /// Serializes a `Set-Cookie` header value for `locale`.
    #[must_use]
    pub fn header_value(&self, locale: Locale) -> String {
        let secure = if self.secure { "; Secure" } else { "" };
        format!(
            "{LOCALE_COOKIE}={locale}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax{secure}",
            self.max_age_seconds
        )
    }
}
