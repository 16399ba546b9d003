//! Locale resolution and translation lookup.

pub mod cookie;
pub mod lookup;
pub mod paths;
pub mod resolver;

pub use cookie::{
    LOCALE_COOKIE,
    LocaleCookie,
    locale_from_cookie,
};
pub use lookup::{
    Translator,
    lookup,
};
pub use paths::{
    locale_from_path,
    localized_path,
    strip_locale_prefix,
};
pub use resolver::{
    ResolutionContext,
    ResolveError,
    detect_locale_from_header,
    locale_from_url,
    resolve,
};
