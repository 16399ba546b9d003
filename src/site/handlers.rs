//! Request handlers.

use std::sync::Arc;

use axum::Form;
use axum::Json;
use axum::extract::{
    Path,
    State,
};
use axum::http::{
    HeaderMap,
    StatusCode,
    Uri,
    header,
};
use axum::response::{
    Html,
    IntoResponse,
    Response,
};
use serde::{
    Deserialize,
    Serialize,
};
use url::Url;

use super::app::AppState;
use super::render::{
    self,
    Layout,
    Page,
};
use crate::i18n::paths::{
    localized_path,
    strip_locale_prefix,
};
use crate::i18n::resolver::{
    ResolutionContext,
    detect_locale_from_header,
    resolve,
};
use crate::types::Locale;

/// Contact form fields. Missing fields are accepted as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    /// Sender name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Message body
    pub message: String,
}

/// JSON body returned after a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Always `true`; there is no failure path.
    pub success: bool,
    /// `contact.form.success` in the page locale.
    pub message: String,
}

/// `GET /`: redirects to the locale picked from `Accept-Language`.
pub async fn root_redirect(headers: HeaderMap) -> Response {
    let accept_language = header_str(&headers, header::ACCEPT_LANGUAGE);
    let locale = detect_locale_from_header(accept_language);
    tracing::debug!(?accept_language, %locale, "Redirecting root");

    (
        StatusCode::FOUND,
        [(header::LOCATION, localized_path(locale, "")), (header::VARY, "Accept-Language".to_string())],
    )
        .into_response()
}

/// `GET /{locale}`
pub async fn home(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    page_response(&state, Page::Home, &segment, &uri, &headers)
}

/// `GET /{locale}/about`
pub async fn about(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    page_response(&state, Page::About, &segment, &uri, &headers)
}

/// `GET /{locale}/contact`
pub async fn contact(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    page_response(&state, Page::Contact, &segment, &uri, &headers)
}

/// `POST /{locale}/contact`: logs the submission and acknowledges it.
///
/// Nothing is stored or sent.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
    uri: Uri,
    headers: HeaderMap,
    Form(submission): Form<ContactSubmission>,
) -> Json<ContactResponse> {
    let locale = page_locale(&segment, &uri, &headers);
    tracing::info!(
        %locale,
        name = %submission.name,
        email = %submission.email,
        message_len = submission.message.chars().count(),
        "Contact form submission"
    );

    Json(ContactResponse {
        success: true,
        message: state.catalog.lookup(locale, "contact.form.success").to_string(),
    })
}

/// Fallback: 404 page in the locale resolved from the request.
pub async fn not_found(State(state): State<Arc<AppState>>, uri: Uri, headers: HeaderMap) -> Response {
    let locale = request_locale(&uri, &headers);
    tracing::debug!(path = uri.path(), %locale, "No route matched");

    let base_url = base_url(&state, &headers);
    let layout = Layout {
        translator: state.catalog.translator(locale),
        rest: strip_locale_prefix(uri.path()),
        base_url: base_url.as_deref(),
    };
    html_response(&state, locale, StatusCode::NOT_FOUND, render::not_found(&layout))
}

/// Renders `page` in the locale picked for `segment`.
fn page_response(state: &AppState, page: Page, segment: &str, uri: &Uri, headers: &HeaderMap) -> Response {
    let locale = page_locale(segment, uri, headers);
    let base_url = base_url(state, headers);
    let layout = Layout {
        translator: state.catalog.translator(locale),
        rest: page.suffix(),
        base_url: base_url.as_deref(),
    };
    html_response(state, locale, StatusCode::OK, render::page(&layout, page, &state.contact))
}

/// A supported `{locale}` segment wins; anything else goes through the resolver.
fn page_locale(segment: &str, uri: &Uri, headers: &HeaderMap) -> Locale {
    Locale::from_tag(segment).unwrap_or_else(|| {
        tracing::debug!(segment, "Unsupported locale segment");
        request_locale(uri, headers)
    })
}

/// Resolves the locale from the request path and `Cookie` header.
fn request_locale(uri: &Uri, headers: &HeaderMap) -> Locale {
    let mut context = ResolutionContext::new(uri.path());
    let cookies = cookie_header(headers);
    if !cookies.is_empty() {
        context = context.with_cookie_header(cookies);
    }
    if let Some(accept_language) = header_str(headers, header::ACCEPT_LANGUAGE) {
        context = context.with_accept_language(accept_language);
    }

    resolve(&context).unwrap_or_else(|error| {
        tracing::warn!(%error, "Locale resolution failed; using default");
        Locale::DEFAULT
    })
}

/// Joins every `Cookie` header (HTTP/2 may send several).
fn cookie_header(headers: &HeaderMap) -> String {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A header value, if present and visible ASCII.
fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// Origin for hreflang links: configured base URL, else derived from `Host`.
fn base_url(state: &AppState, headers: &HeaderMap) -> Option<String> {
    if let Some(configured) = &state.public_base_url {
        return Some(configured.trim_end_matches('/').to_string());
    }

    let host = header_str(headers, header::HOST)?;
    let scheme = if state.environment.is_production() { "https" } else { "http" };
    match Url::parse(&format!("{scheme}://{host}")) {
        Ok(url) if url.has_host() => Some(url.origin().ascii_serialization()),
        _ => {
            tracing::debug!(host, "Ignoring unusable Host header");
            None
        }
    }
}

/// HTML body with the locale cookie attached.
fn html_response(state: &AppState, locale: Locale, status: StatusCode, body: String) -> Response {
    (
        status,
        [
            (header::SET_COOKIE, state.cookie.header_value(locale)),
            (header::CONTENT_LANGUAGE, locale.to_string()),
        ],
        Html(body),
    )
        .into_response()
}
