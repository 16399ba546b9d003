//! Site configuration.

/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::{
    ConfigManager,
    ENVIRONMENT_VAR,
};
pub use types::{
    ConfigError,
    ContactInfo,
    CookieConfig,
    Environment,
    LoggingConfig,
    SiteSettings,
    TranslationFilesConfig,
    ValidationError,
};
