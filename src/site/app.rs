//! Router construction and server lifecycle.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use thiserror::Error;
use tokio::net::TcpListener;

use super::handlers;
use crate::catalog::{
    Catalog,
    CatalogError,
    load_catalog,
};
use crate::config::{
    ConfigManager,
    ContactInfo,
    Environment,
    SiteSettings,
};
use crate::i18n::cookie::LocaleCookie;

#[derive(Error, Debug)]
pub enum SiteError {
    /// Translation files could not be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Configured bind address
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error
    #[error("HTTP server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Shared, read-only state for every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Translation trees loaded at startup.
    pub catalog: Arc<Catalog>,
    /// `Set-Cookie` attributes for the locale cookie.
    pub cookie: LocaleCookie,
    /// Picks the scheme when hreflang links are built from `Host`.
    pub environment: Environment,
    /// Origin for hreflang links, overriding `Host`.
    pub public_base_url: Option<String>,
    /// Shown on the contact page.
    pub contact: ContactInfo,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, settings: &SiteSettings) -> Self {
        Self {
            catalog,
            cookie: settings.locale_cookie(),
            environment: settings.environment,
            public_base_url: settings.public_base_url.clone(),
            contact: settings.contact.clone(),
        }
    }
}

/// Builds the site router.
///
/// Page routes also answer with a trailing slash (`/en/`, `/en/about/`).
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root_redirect))
        .route("/{locale}", get(handlers::home))
        .route("/{locale}/", get(handlers::home))
        .route("/{locale}/about", get(handlers::about))
        .route("/{locale}/about/", get(handlers::about))
        .route("/{locale}/contact", get(handlers::contact).post(handlers::submit_contact))
        .route("/{locale}/contact/", get(handlers::contact).post(handlers::submit_contact))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Loads the catalog and serves the site until Ctrl-C.
///
/// # Errors
/// - Translation files cannot be loaded
/// - The bind address is unavailable
/// - The server fails while running
pub async fn run(config: &ConfigManager) -> Result<(), SiteError> {
    let settings = config.get_settings();

    let catalog =
        load_catalog(&config.translations_dir(), &settings.translation_files.file_pattern).await?;
    catalog.report_coverage();

    let state = Arc::new(AppState::new(Arc::new(catalog), settings));
    let listener = TcpListener::bind(&settings.bind_address)
        .await
        .map_err(|source| SiteError::Bind { addr: settings.bind_address.clone(), source })?;

    match listener.local_addr() {
        Ok(addr) => tracing::info!(%addr, environment = ?settings.environment, "Listening"),
        Err(error) => tracing::warn!(%error, "Listening on unknown address"),
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(SiteError::Serve)
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "Failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn test_app_state_from_settings() {
        let settings = SiteSettings {
            environment: Environment::Production,
            public_base_url: Some("https://example.com".to_string()),
            ..SiteSettings::default()
        };

        let state = AppState::new(Arc::new(Catalog::new()), &settings);

        assert_that!(state.cookie.secure, eq(true));
        assert_that!(state.public_base_url, some(eq("https://example.com")));
        assert_eq!(state.contact, ContactInfo::default());
    }

    #[tokio::test]
    async fn test_run_fails_without_translations() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = ConfigManager::new();
        config.load_settings_with_environment(Some(temp_dir.path().to_path_buf()), None).unwrap();

        let result = run(&config).await;

        assert!(matches!(result, Err(SiteError::Catalog(CatalogError::DirectoryNotFound(_)))));
    }

    #[tokio::test]
    async fn test_run_reports_bind_failure() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("locales")).unwrap();
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let mut settings = SiteSettings::default();
        settings.bind_address = taken.local_addr().unwrap().to_string();
        std::fs::write(
            temp_dir.path().join(".i18n-site.json"),
            serde_json::to_string(&settings).unwrap(),
        )
        .unwrap();
        let mut config = ConfigManager::new();
        config.load_settings_with_environment(Some(temp_dir.path().to_path_buf()), None).unwrap();

        let result = run(&config).await;

        assert!(matches!(result, Err(SiteError::Bind { .. })));
    }
}
