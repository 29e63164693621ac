/**
 * Current User Handlers
 *
 * GET /api/auth/me returns the caller's stored profile.
 * POST /api/auth/logout acknowledges a logout; tokens are stateless, so the
 * client discarding its token is the whole of it.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::auth::users::{get_user_by_id, UserResponse};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// The token is checked by the `AuthUser` extractor; the user is then read
/// fresh from the database, so profile edits show up immediately.
///
/// # Errors
///
/// * `401 Unauthorized` - Missing or invalid token
/// * `404 Not Found` - The token's user no longer exists
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = get_user_by_id(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    Ok(Json(user.into()))
}

/// Logout handler
///
/// Does not revoke the token: it stays valid until it expires.
pub async fn logout(AuthUser(auth): AuthUser) -> Json<MessageResponse> {
    tracing::info!("Logout for user: {}", auth.user_id);
    Json(MessageResponse::new("Logout successful"))
}
