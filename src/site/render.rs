//! Server-side HTML rendering of the localized pages.

use html_escape::{
    encode_double_quoted_attribute as attr,
    encode_text as text,
};

use crate::config::ContactInfo;
use crate::i18n::lookup::Translator;
use crate::i18n::paths::localized_path;
use crate::types::Locale;

/// Content pages served under `/{locale}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// `/{locale}`
    Home,
    /// `/{locale}/about`
    About,
    /// `/{locale}/contact`
    Contact,
}

impl Page {
    /// Nav order.
    pub const ALL: [Self; 3] = [Self::Home, Self::About, Self::Contact];

    /// Path after the locale segment.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    /// Translation key of the nav label.
    const fn nav_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::About => "nav.about",
            Self::Contact => "nav.contact",
        }
    }

    /// Translation key of the page heading, reused in `<title>`.
    const fn title_key(self) -> &'static str {
        match self {
            Self::Home => "welcome",
            Self::About => "about.title",
            Self::Contact => "contact.title",
        }
    }
}

/// Everything the shared page chrome needs.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    /// Lookups in the page locale.
    pub translator: Translator<'a>,
    /// Request path without its locale prefix, e.g. `/about`.
    pub rest: &'a str,
    /// `scheme://host` for absolute hreflang links.
    pub base_url: Option<&'a str>,
}

impl Layout<'_> {
    /// Locale the page is rendered in.
    const fn locale(&self) -> Locale {
        self.translator.locale()
    }
}

/// Builds an hreflang target: `{base}/{locale}{rest}`, relative without a base.
#[must_use]
pub fn alternate_href(base_url: Option<&str>, locale: Locale, rest: &str) -> String {
    format!("{}{}", base_url.unwrap_or_default(), localized_path(locale, rest))
}

/// Renders one of the content pages.
#[must_use]
pub fn page(layout: &Layout<'_>, page: Page, contact: &ContactInfo) -> String {
    let t = layout.translator;
    let main = match page {
        Page::Home => home(t),
        Page::About => about(t),
        Page::Contact => contact_page(t, contact),
    };
    document(layout, t.t(page.title_key()), Some(page), &main)
}

/// Renders the 404 page.
#[must_use]
pub fn not_found(layout: &Layout<'_>) -> String {
    let t = layout.translator;
    let main = format!(
        r#"<div class="page-content"><div class="content-card">
<h1>{title}</h1>
<p>{description}</p>
<a class="back-home" href="{href}">{back}</a>
</div></div>"#,
        title = text(t.t("notFound.title")),
        description = text(t.t("notFound.description")),
        href = attr(&localized_path(layout.locale(), "")),
        back = text(t.t("notFound.backHome")),
    );
    document(layout, t.t("notFound.title"), None, &main)
}

/// Wraps `main` in the shared `<html>` shell: head links, switcher, nav.
fn document(layout: &Layout<'_>, title: &str, active: Option<Page>, main: &str) -> String {
    let t = layout.translator;
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
<meta name="description" content="{tagline}">
{alternates}
</head>
<body>
{switcher}
<div class="page-container">
{nav}
{main}
</div>
</body>
</html>
"#,
        lang = layout.locale(),
        title = text(title),
        site = text(t.t("site.name")),
        tagline = attr(t.t("site.tagline")),
        alternates = alternate_links(layout),
        switcher = language_switcher(layout),
        nav = nav(t, active),
    )
}

/// One `hreflang` link per locale plus `x-default`.
fn alternate_links(layout: &Layout<'_>) -> String {
    let link = |hreflang: &str, locale: Locale| {
        format!(
            r#"<link rel="alternate" hreflang="{hreflang}" href="{}">"#,
            attr(&alternate_href(layout.base_url, locale, layout.rest))
        )
    };

    Locale::ALL
        .into_iter()
        .map(|locale| link(locale.as_str(), locale))
        .chain(std::iter::once(link("x-default", Locale::DEFAULT)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Links to the current page in every locale.
fn language_switcher(layout: &Layout<'_>) -> String {
    let links: String = Locale::ALL
        .into_iter()
        .map(|locale| {
            format!(
                r#"<a href="{href}" class="{class}" hreflang="{locale}" lang="{locale}">{name}</a>"#,
                href = attr(&localized_path(locale, layout.rest)),
                class = active_class("lang-btn", locale == layout.locale()),
                name = text(locale.native_name()),
            )
        })
        .collect();

    format!(
        r#"<div class="language-switcher" aria-label="{label}">{links}</div>"#,
        label = attr(layout.translator.t("languageSwitcher.label")),
    )
}

/// Home / About / Contact links in the page locale.
fn nav(t: Translator<'_>, active: Option<Page>) -> String {
    let links: String = Page::ALL
        .into_iter()
        .map(|page| {
            format!(
                r#"<a href="{href}" class="{class}">{label}</a>"#,
                href = attr(&localized_path(t.locale(), page.suffix())),
                class = active_class("nav-link", active == Some(page)),
                label = text(t.t(page.nav_key())),
            )
        })
        .collect();

    format!(r#"<nav class="main-nav">{links}</nav>"#)
}

/// `base`, plus `active` for the current entry.
fn active_class(base: &str, active: bool) -> String {
    if active { format!("{base} active") } else { base.to_string() }
}

/// Welcome, getting started cards and the comparison table.
fn home(t: Translator<'_>) -> String {
    let info_card = |color: &str, section: &str| {
        let key = |leaf: &str| format!("{section}.{leaf}");
        format!(
            r#"<div class="info-card {color}"><h2>{}</h2><p><code>{}</code> {}</p></div>"#,
            text(t.t(&key("title"))),
            text(t.t(&key("code"))),
            text(t.t(&key("description"))),
        )
    };

    format!(
        r#"<div class="home-container"><div class="content-card">
<h1>{welcome}</h1>
<p>{description}</p>
<div class="info-section">
{getting_started}
{dev_server}
</div>
{comparison}
</div></div>"#,
        welcome = text(t.t("welcome")),
        description = text(t.t("description")),
        getting_started = info_card("blue", "gettingStarted"),
        dev_server = info_card("green", "devServer"),
        comparison = comparison(t),
    )
}

/// Before/after table for the three locale features.
fn comparison(t: Translator<'_>) -> String {
    let rows: String = ["detection", "persistence", "seo"]
        .into_iter()
        .map(|row| {
            let cell = |column: &str| text(t.t(&format!("comparison.rows.{row}.{column}"))).into_owned();
            format!(
                "<tr><th scope=\"row\">{}</th><td>{}</td><td>{}</td></tr>",
                cell("feature"),
                cell("before"),
                cell("after"),
            )
        })
        .collect();

    format!(
        r#"<section class="comparison-section">
<h2>{title}</h2>
<p>{description}</p>
<table>
<thead><tr><th scope="col">{feature}</th><th scope="col">{before}</th><th scope="col">{after}</th></tr></thead>
<tbody>{rows}</tbody>
</table>
</section>"#,
        title = text(t.t("comparison.title")),
        description = text(t.t("comparison.description")),
        feature = text(t.t("comparison.columns.feature")),
        before = text(t.t("comparison.columns.before")),
        after = text(t.t("comparison.columns.after")),
    )
}

/// About page body.
fn about(t: Translator<'_>) -> String {
    let features: String = (1..=3)
        .map(|n| {
            format!(
                r#"<div class="feature-card"><h3>{}</h3><p>{}</p></div>"#,
                text(t.t(&format!("about.features.item{n}.title"))),
                text(t.t(&format!("about.features.item{n}.description"))),
            )
        })
        .collect();

    format!(
        r#"<div class="page-content"><div class="content-card">
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
<p class="description">{description}</p>
<div class="features-section">
<h2>{features_title}</h2>
<div class="features-grid">{features}</div>
</div>
</div></div>"#,
        title = text(t.t("about.title")),
        subtitle = text(t.t("about.subtitle")),
        description = text(t.t("about.description")),
        features_title = text(t.t("about.features.title")),
    )
}

/// Contact form plus the configured contact details.
fn contact_page(t: Translator<'_>, contact: &ContactInfo) -> String {
    let info_item = |key: &str, value: &str| {
        format!(
            r#"<div class="info-item"><strong>{}:</strong> <span>{}</span></div>"#,
            text(t.t(key)),
            text(value),
        )
    };

    format!(
        r#"<div class="page-content"><div class="content-card">
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
<div class="contact-wrapper">
<div class="contact-form-section">
<h2>{form_title}</h2>
<form method="post" class="contact-form">
<div class="form-group"><label for="name">{name}</label><input type="text" id="name" name="name" placeholder="{name_placeholder}" required></div>
<div class="form-group"><label for="email">{email}</label><input type="email" id="email" name="email" placeholder="{email_placeholder}" required></div>
<div class="form-group"><label for="message">{message}</label><textarea id="message" name="message" rows="5" placeholder="{message_placeholder}" required></textarea></div>
<button type="submit" class="submit-btn">{submit}</button>
</form>
</div>
<div class="contact-info-section">
<h2>{info_title}</h2>
{email_item}
{phone_item}
{address_item}
</div>
</div>
</div></div>"#,
        title = text(t.t("contact.title")),
        subtitle = text(t.t("contact.subtitle")),
        form_title = text(t.t("contact.form.title")),
        name = text(t.t("contact.form.name")),
        name_placeholder = attr(t.t("contact.form.namePlaceholder")),
        email = text(t.t("contact.form.email")),
        email_placeholder = attr(t.t("contact.form.emailPlaceholder")),
        message = text(t.t("contact.form.message")),
        message_placeholder = attr(t.t("contact.form.messagePlaceholder")),
        submit = text(t.t("contact.form.submit")),
        info_title = text(t.t("contact.info.title")),
        email_item = info_item("contact.info.email", &contact.email),
        phone_item = info_item("contact.info.phone", &contact.phone),
        address_item = info_item("contact.info.address", &contact.address),
    )
}
