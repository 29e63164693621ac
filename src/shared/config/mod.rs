//! Application configuration module
//!
//! Provides the configuration consumed by the server: where the database
//! lives, how session tokens are signed, and what to serve as static files.
//! Values come from an optional TOML file and are then overridden by
//! environment variables (see `backend::server::config`).

use serde::Deserialize;
use thiserror::Error;

/// Default SQLite database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://property_market.db";

/// Development-only signing secret used when none is configured
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Default directory for the static frontend
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Default session token lifetime in days
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// Longest accepted session token lifetime in days
pub const MAX_TOKEN_TTL_DAYS: i64 = 3650;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// sqlx connection URL for the SQLite database
    pub database_url: String,
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,
    /// Port the HTTP server binds to
    pub port: u16,
    /// Directory served as the static frontend
    pub static_dir: String,
    /// Session token lifetime in days
    pub token_ttl_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML document into a builder pre-filled with its values.
    ///
    /// Every key is optional:
    ///
    /// ```toml
    /// database_url = "sqlite://market.db"
    /// jwt_secret = "..."
    /// port = 8080
    /// static_dir = "frontend"
    /// token_ttl_days = 7
    /// ```
    pub fn builder_from_toml(source: &str) -> Result<AppConfigBuilder, ConfigError> {
        let file: AppConfigBuilder =
            toml::from_str(source).map_err(|e| ConfigError::InvalidFile(e.to_string()))?;
        Ok(file)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("database_url"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if !(1..=MAX_TOKEN_TTL_DAYS).contains(&self.token_ttl_days) {
            return Err(ConfigError::InvalidValue {
                key: "token_ttl_days",
                value: self.token_ttl_days.to_string(),
            });
        }
        Ok(())
    }

    /// True when the signing secret is the built-in development value
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

/// Builder for AppConfig
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    port: Option<u16>,
    static_dir: Option<String>,
    token_ttl_days: Option<i64>,
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the HTTP port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the static file directory
    pub fn static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Set the token lifetime in days
    pub fn token_ttl_days(mut self, days: i64) -> Self {
        self.token_ttl_days = Some(days);
        self
    }

    /// Build the configuration, filling unset values with defaults
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            port: self.port.unwrap_or(defaults.port),
            static_dir: self.static_dir.unwrap_or(defaults.static_dir),
            token_ttl_days: self.token_ttl_days.unwrap_or(defaults.token_ttl_days),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid config file: {0}")]
    InvalidFile(String),
}
