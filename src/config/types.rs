use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;
use url::Url;

use crate::i18n::cookie::{
    DEFAULT_MAX_AGE_SECONDS,
    LocaleCookie,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "translationFiles.directory")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Deployment environment; production turns on the `Secure` cookie flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    /// Local development over plain HTTP
    Development,
    /// Served over HTTPS
    Production,
}

impl Environment {
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(ValidationError::new(
                "environment",
                format!("Unknown environment '{other}'. Expected \"development\" or \"production\""),
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Address the HTTP server listens on.
    pub bind_address: String,

    /// Absolute origin used for hreflang links (e.g. `https://example.com`).
    /// If unset, the request `Host` header is used.
    pub public_base_url: Option<String>,

    pub translation_files: TranslationFilesConfig,
    pub environment: Environment,
    pub cookie: CookieConfig,
    pub logging: LoggingConfig,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    /// Directory holding `ko.json` / `en.json`, relative to the workspace root.
    pub directory: PathBuf,
    /// Glob matched against paths relative to `directory`.
    pub file_pattern: String,
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self { directory: PathBuf::from("locales"), file_pattern: "*.json".to_string() }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CookieConfig {
    /// Lifetime of the locale cookie
    pub max_age_seconds: u64,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self { max_age_seconds: DEFAULT_MAX_AGE_SECONDS }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, overridden by `RUST_LOG`.
    pub level: String,
    /// Log file path. Logs go to stdout when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), file: None }
    }
}

/// Contact details shown on the contact page.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    /// Contact e-mail address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Postal address
    pub address: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "contact@example.com".to_string(),
            phone: "+82-10-1234-5678".to_string(),
            address: "서울특별시 강남구 테헤란로 123".to_string(),
        }
    }
}

impl SiteSettings {
    /// # Errors
    /// - Unparseable bind address
    /// - Relative or invalid public base URL
    /// - Empty or invalid translation file settings
    /// - Zero cookie lifetime
    /// - Invalid log filter
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.bind_address.parse::<SocketAddr>() {
            errors.push(ValidationError::new(
                "bindAddress",
                format!("Invalid socket address '{}': {e}. Example: \"127.0.0.1:3000\"", self.bind_address),
            ));
        }

        if let Some(base_url) = &self.public_base_url {
            match Url::parse(base_url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
                Ok(_) => errors.push(ValidationError::new(
                    "publicBaseUrl",
                    format!("'{base_url}' must be an http(s) URL with a host, for example: \"https://example.com\""),
                )),
                Err(e) => errors.push(ValidationError::new(
                    "publicBaseUrl",
                    format!("Invalid URL '{base_url}': {e}"),
                )),
            }
        }

        if self.translation_files.directory.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.directory",
                "The directory cannot be empty. Example: \"locales\"",
            ));
        }

        if self.translation_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                "The pattern cannot be empty. Example: \"*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.translation_files.file_pattern) {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.translation_files.file_pattern),
            ));
        }

        if self.cookie.max_age_seconds == 0 {
            errors.push(ValidationError::new(
                "cookie.maxAgeSeconds",
                "The cookie lifetime must be greater than zero",
            ));
        }

        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.level) {
            errors.push(ValidationError::new(
                "logging.level",
                format!("Invalid log filter '{}': {e}", self.logging.level),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Attributes of the locale cookie; `Secure` only in production.
    #[must_use]
    pub const fn locale_cookie(&self) -> LocaleCookie {
        LocaleCookie {
            max_age_seconds: self.cookie.max_age_seconds,
            secure: self.environment.is_production(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            public_base_url: None,
            translation_files: TranslationFilesConfig::default(),
            environment: Environment::default(),
            cookie: CookieConfig::default(),
            logging: LoggingConfig::default(),
            contact: ContactInfo::default(),
        }
    }
}
