/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. `GET /api` - API index
 * 2. API routes (auth, listings, catalogue, favorites, inquiries, search, users)
 * 3. Unknown `/api/...` paths - JSON 404
 * 4. Fallback - static frontend files from the configured directory
 *
 * The HTML/JS frontend is not part of this crate; it is deployed into
 * `static_dir` (default `public/`). Without it every non-API path is a 404.
 *
 * CORS is permissive and every request gets a trace span.
 */

use axum::response::Json;
use axum::routing::{any, get};
use axum::Router;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Name reported by `GET /api`
pub const API_NAME: &str = "Property Listing API";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Database pool, token issuer and configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let static_dir = app_state.config.static_dir.clone();

    let router = Router::new().route("/api", get(api_index));

    let router = configure_api_routes(router);

    // keep API misses out of the static fallback
    let router = router.route("/api/{*rest}", any(api_not_found));

    let router = router.fallback_service(ServeDir::new(static_dir));

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// GET /api
async fn api_index() -> Json<Value> {
    Json(json!({
        "message": API_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/api/auth",
            "listings": "/api/listings",
            "properties": "/api/properties",
            "locations": "/api/locations",
            "users": "/api/users",
            "favorites": "/api/favorites",
            "inquiries": "/api/inquiries",
            "search": "/api/search"
        },
        "authEndpoints": {
            "register": "POST /api/auth/register",
            "login": "POST /api/auth/login",
            "logout": "POST /api/auth/logout",
            "getCurrentUser": "GET /api/auth/me",
            "updateProfile": "PUT /api/auth/profile",
            "changePassword": "PUT /api/auth/change-password"
        }
    }))
}

async fn api_not_found() -> BackendError {
    BackendError::not_found("Endpoint not found")
}
