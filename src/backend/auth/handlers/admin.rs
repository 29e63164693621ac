/**
 * Admin User Management Handlers
 *
 * All handlers take `Authorized<Admins>`, so a non-admin token is refused
 * with 403 before any of them runs.
 *
 * - GET    /api/auth/admin/users
 * - PUT    /api/auth/admin/users/{id}/role
 * - PUT    /api/auth/admin/users/{id}/status
 * - DELETE /api/auth/admin/users/{id}
 */

use axum::{extract::State, response::Json};
use uuid::Uuid;

use crate::backend::auth::handlers::types::{
    DeletedUserResponse, UpdateRoleRequest, UpdateStatusRequest, UserMessageResponse,
};
use crate::backend::auth::users::{self, UserResponse};
use crate::backend::error::BackendError;
use crate::backend::middleware::{present, Admins, Authorized, JsonBody, PathParam};
use crate::backend::server::state::AppState;
use crate::shared::Role;

/// List every user, newest first
pub async fn list_users(
    State(state): State<AppState>,
    _admin: Authorized<Admins>,
) -> Result<Json<Vec<UserResponse>>, BackendError> {
    let users = users::list_users(&state.db).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Change a user's role
///
/// Tokens already issued to that user keep their old role until they expire.
pub async fn update_role(
    State(state): State<AppState>,
    admin: Authorized<Admins>,
    PathParam(user_id): PathParam<Uuid>,
    JsonBody(request): JsonBody<UpdateRoleRequest>,
) -> Result<Json<UserMessageResponse>, BackendError> {
    let role = present(&request.role)
        .ok_or(BackendError::InvalidRole)?
        .parse::<Role>()?;

    let user = users::update_role(&state.db, user_id, role)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    tracing::info!("Admin {} set role of {} to {}", admin.user_id, user.id, role);

    Ok(Json(UserMessageResponse {
        message: "User role updated successfully".to_string(),
        user: user.into(),
    }))
}

/// Activate or deactivate a user
pub async fn update_status(
    State(state): State<AppState>,
    admin: Authorized<Admins>,
    PathParam(user_id): PathParam<Uuid>,
    JsonBody(request): JsonBody<UpdateStatusRequest>,
) -> Result<Json<UserMessageResponse>, BackendError> {
    let is_active = request
        .is_active
        .ok_or_else(|| BackendError::validation("is_active must be a boolean"))?;

    let user = users::update_status(&state.db, user_id, is_active)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    let verb = if is_active { "activated" } else { "deactivated" };
    tracing::info!("Admin {} {} user {}", admin.user_id, verb, user.id);

    Ok(Json(UserMessageResponse {
        message: format!("User {} successfully", verb),
        user: user.into(),
    }))
}

/// Hard-delete a user and return the record as it was
///
/// # Errors
///
/// * `400 Bad Request` - The admin targeted their own account
/// * `404 Not Found` - No such user
pub async fn delete_user(
    State(state): State<AppState>,
    admin: Authorized<Admins>,
    PathParam(user_id): PathParam<Uuid>,
) -> Result<Json<DeletedUserResponse>, BackendError> {
    if user_id == admin.user_id {
        return Err(BackendError::CannotDeleteSelf);
    }

    let snapshot = users::get_user_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    users::delete_user(&state.db, user_id).await?;

    tracing::info!("Admin {} deleted user {} ({})", admin.user_id, snapshot.id, snapshot.email);

    Ok(Json(DeletedUserResponse {
        message: "User deleted successfully".to_string(),
        deleted_user: snapshot.into(),
    }))
}
