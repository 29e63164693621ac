//! Favorites HTTP Handlers

use axum::{extract::State, Json};
use uuid::Uuid;

use super::{db, FavoriteCheck, FavoriteListing, FavoriteRequest};
use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::BackendError;
use crate::backend::listings::db as listings_db;
use crate::backend::middleware::{AuthUser, Authorized, JsonBody, Members, PathParam};
use crate::backend::server::state::AppState;

/// GET /api/favorites/user/{userId}
pub async fn user_favorites(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<Uuid>,
) -> Result<Json<Vec<FavoriteListing>>, BackendError> {
    Ok(Json(db::list_for_user(&state.db, user_id).await?))
}

/// GET /api/favorites/check/{userId}/{listingId}
pub async fn check_favorite(
    State(state): State<AppState>,
    PathParam((user_id, listing_id)): PathParam<(Uuid, Uuid)>,
) -> Result<Json<FavoriteCheck>, BackendError> {
    let is_favorited = db::exists(&state.db, user_id, listing_id).await?;
    Ok(Json(FavoriteCheck { is_favorited }))
}

/// POST /api/favorites
///
/// # Errors
///
/// * `400 Bad Request` - Missing listing_id
/// * `404 Not Found` - Unknown listing
/// * `409 Conflict` - Already in favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    actor: Authorized<Members>,
    JsonBody(request): JsonBody<FavoriteRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let listing_id = request
        .listing_id
        .ok_or_else(|| BackendError::validation("listing_id is required"))?;

    if listings_db::get_status(&state.db, listing_id).await?.is_none() {
        return Err(BackendError::ListingNotFound);
    }

    if db::exists(&state.db, actor.user_id, listing_id).await? {
        return Err(BackendError::AlreadyFavorited);
    }

    db::add(&state.db, actor.user_id, listing_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => BackendError::AlreadyFavorited,
            other => BackendError::Database(other),
        })?;

    tracing::info!("User {} favorited listing {}", actor.user_id, listing_id);

    Ok(Json(MessageResponse::new("Added to favorites successfully")))
}

/// DELETE /api/favorites
pub async fn remove_favorite(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    JsonBody(request): JsonBody<FavoriteRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let listing_id = request
        .listing_id
        .ok_or_else(|| BackendError::validation("listing_id is required"))?;

    if db::remove(&state.db, actor.user_id, listing_id).await? == 0 {
        return Err(BackendError::not_found("Favorite not found"));
    }

    tracing::info!("User {} unfavorited listing {}", actor.user_id, listing_id);

    Ok(Json(MessageResponse::new("Removed from favorites successfully")))
}
