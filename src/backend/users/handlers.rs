//! User Directory HTTP Handlers
//!
//! These endpoints are unauthenticated and expose names and emails to any
//! caller, as the marketplace frontend browses sellers without logging in.
//! Phone numbers and addresses are never part of a directory row.

use axum::{extract::State, Json};
use uuid::Uuid;

use super::{db, ActivityReport, ActivityStats, DirectoryEntry};
use crate::backend::error::BackendError;
use crate::backend::middleware::PathParam;
use crate::backend::server::state::AppState;
use crate::shared::Role;

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<DirectoryEntry>>, BackendError> {
    Ok(Json(db::list(&state.db).await?))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<DirectoryEntry>, BackendError> {
    let user = db::get(&state.db, id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;
    Ok(Json(user))
}

/// GET /api/users/{id}/activity
pub async fn user_activity(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<ActivityReport>, BackendError> {
    let user = db::get(&state.db, id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    let favorites = db::favorites(&state.db, id).await?;
    let inquiries = db::inquiries(&state.db, id).await?;
    let properties = db::properties(&state.db, id).await?;

    let stats = ActivityStats {
        favorite_count: favorites.len(),
        inquiry_count: inquiries.len(),
        property_count: properties.len(),
    };

    Ok(Json(ActivityReport {
        user,
        favorites,
        inquiries,
        properties,
        stats,
    }))
}

/// GET /api/users/role/{role}
pub async fn users_by_role(
    State(state): State<AppState>,
    PathParam(role): PathParam<String>,
) -> Result<Json<Vec<DirectoryEntry>>, BackendError> {
    let role = role.parse::<Role>()?;
    Ok(Json(db::list_by_role(&state.db, role).await?))
}
