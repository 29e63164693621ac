/**
 * Server Initialization
 *
 * This module wires configuration, database and router together.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and run migrations
 * 2. Build `AppState` (pool, token issuer, config)
 * 3. Create the router with all routes and layers
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// Fails if the database cannot be opened or migrated; unlike optional
/// services, nothing in this application works without it.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing property market backend");

    let db = load_database(&config).await?;
    let app_state = AppState::new(db, config);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
