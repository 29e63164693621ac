//! Search HTTP Handlers
//!
//! All public; no token is looked at.

use axum::{extract::State, Json};
use sqlx::SqlitePool;

use super::db::{self, Statistics};
use super::filter::SearchFilter;
use crate::backend::error::BackendError;
use crate::backend::listings::types::ListingSummary;
use crate::backend::middleware::JsonBody;
use crate::backend::server::state::AppState;

/// POST /api/search
pub async fn search(
    State(state): State<AppState>,
    JsonBody(filter): JsonBody<SearchFilter>,
) -> Result<Json<Vec<ListingSummary>>, BackendError> {
    let predicates = filter.predicates();
    tracing::debug!(?predicates, "Search");
    Ok(Json(db::search(&state.db, &predicates).await?))
}

/// GET /api/search/cities
pub async fn cities(State(pool): State<SqlitePool>) -> Result<Json<Vec<String>>, BackendError> {
    Ok(Json(db::cities(&pool).await?))
}

/// GET /api/search/property-types
pub async fn property_types(State(pool): State<SqlitePool>) -> Result<Json<Vec<String>>, BackendError> {
    Ok(Json(db::property_types(&pool).await?))
}

/// GET /api/search/statistics
pub async fn statistics(State(pool): State<SqlitePool>) -> Result<Json<Statistics>, BackendError> {
    Ok(Json(db::statistics(&pool).await?))
}
