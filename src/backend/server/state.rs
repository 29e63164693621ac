/**
 * Application State Management
 *
 * `AppState` is the central state container shared by every handler. It
 * holds no mutable request state; everything in it is cheap to clone:
 *
 * - `db`: the SQLite connection pool
 * - `tokens`: the session token issuer/verifier
 * - `config`: the loaded configuration
 *
 * Handlers that only read the database extract the pool alone through
 * `FromRef`, e.g. `State(pool): State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use chrono::Duration;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenIssuer;
use crate::shared::AppConfig;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Session token issuer/verifier
    pub tokens: TokenIssuer,

    /// Loaded configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the state from an open pool and the configuration
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        let tokens = TokenIssuer::new(&config.jwt_secret, Duration::days(config.token_ttl_days));
        Self {
            db,
            tokens,
            config: Arc::new(config),
        }
    }
}

/// Implement FromRef for SqlitePool
///
/// This allows Axum handlers to extract the database pool directly from
/// `AppState`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

