/**
 * Profile Handlers
 *
 * PUT /api/auth/profile          - partial update of name, phone, address
 * PUT /api/auth/change-password  - re-verify current password, store a new hash
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::credentials;
use crate::backend::auth::handlers::types::{
    ChangePasswordRequest, MessageResponse, UpdateProfileRequest, UserMessageResponse,
};
use crate::backend::auth::users::update_profile as store_profile;
use crate::backend::error::BackendError;
use crate::backend::middleware::{present, AuthUser, JsonBody};
use crate::backend::server::state::AppState;

/// Update profile handler
///
/// Fields that are absent or blank keep their stored value.
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    JsonBody(request): JsonBody<UpdateProfileRequest>,
) -> Result<Json<UserMessageResponse>, BackendError> {
    let user = store_profile(
        &state.db,
        auth.user_id,
        present(&request.name),
        present(&request.phone),
        present(&request.address),
    )
    .await?
    .ok_or_else(|| BackendError::not_found("User not found"))?;

    tracing::info!("Profile updated for user: {}", user.id);

    Ok(Json(UserMessageResponse {
        message: "Profile updated successfully".to_string(),
        user: user.into(),
    }))
}

/// Change password handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields or new password too short
/// * `401 Unauthorized` - Current password is incorrect
/// * `404 Not Found` - The token's user no longer exists
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    JsonBody(request): JsonBody<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let (Some(current), Some(new)) = (
        request.current_password.as_deref().filter(|p| !p.is_empty()),
        request.new_password.as_deref().filter(|p| !p.is_empty()),
    ) else {
        return Err(BackendError::validation("Current and new passwords are required"));
    };

    credentials::change_password(&state.db, auth.user_id, current, new)
        .await
        .inspect_err(|e| tracing::warn!("Password change rejected for {}: {}", auth.user_id, e))?;

    tracing::info!("Password changed for user: {}", auth.user_id);

    Ok(Json(MessageResponse::new("Password changed successfully")))
}
