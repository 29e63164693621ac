/**
 * Server Configuration
 *
 * This module loads the configuration and opens the database.
 *
 * # Configuration Sources
 *
 * In increasing priority:
 * 1. Built-in defaults
 * 2. TOML file named by `PROPERTY_MARKET_CONFIG`, if set
 * 3. Environment variables: `DATABASE_URL`, `JWT_SECRET`, `SERVER_PORT`,
 *    `STATIC_DIR`, `TOKEN_TTL_DAYS`
 *
 * The binary loads a `.env` file (via `dotenv`) before calling into here.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::shared::{AppConfig, AppConfigBuilder, ConfigError};

/// Environment variable naming an optional TOML config file
pub const CONFIG_FILE_ENV: &str = "PROPERTY_MARKET_CONFIG";

/// Load configuration from the config file (if any) and the environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let builder = match std::env::var(CONFIG_FILE_ENV) {
        Ok(path) => {
            tracing::info!("Reading configuration from {}", path);
            let source = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path, e)))?;
            AppConfig::builder_from_toml(&source)?
        }
        Err(_) => AppConfig::builder(),
    };

    let config = apply_env(builder, |key| std::env::var(key).ok())?.build()?;

    if config.uses_default_secret() {
        tracing::warn!("JWT_SECRET not set. Using the development secret; do not run like this in production.");
    }

    Ok(config)
}

/// Overlay environment values on a builder
///
/// `lookup` is injected so the overlay can be tested without touching the
/// process environment.
pub fn apply_env(
    mut builder: AppConfigBuilder,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AppConfigBuilder, ConfigError> {
    if let Some(url) = lookup("DATABASE_URL") {
        builder = builder.database_url(url);
    }
    if let Some(secret) = lookup("JWT_SECRET") {
        builder = builder.jwt_secret(secret);
    }
    if let Some(port) = lookup("SERVER_PORT") {
        let port = port.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
            key: "SERVER_PORT",
            value: port,
        })?;
        builder = builder.port(port);
    }
    if let Some(dir) = lookup("STATIC_DIR") {
        builder = builder.static_dir(dir);
    }
    if let Some(days) = lookup("TOKEN_TTL_DAYS") {
        let days = days.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
            key: "TOKEN_TTL_DAYS",
            value: days,
        })?;
        builder = builder.token_ttl_days(days);
    }
    Ok(builder)
}

/// Open the database connection pool and run migrations
///
/// The database file is created if it does not exist yet.
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // an in-memory database lives and dies with its connections
    let pool_options = if config.database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| BackendError::internal(format!("migration failed: {}", e)))?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
