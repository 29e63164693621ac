/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate required fields (name, email, password)
 * 2. Parse the requested role (defaults to buyer)
 * 3. Create the user through the credential store (hashes the password,
 *    rejects duplicate emails)
 * 4. Issue a session token
 * 5. Return token and user info
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::credentials;
use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::users::NewUser;
use crate::backend::error::BackendError;
use crate::backend::middleware::{present, JsonBody};
use crate::backend::server::state::AppState;
use crate::shared::Role;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, short password or unknown role
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Hashing, storage or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "A", "email": "a@x.com", "password": "secret1"}
/// ```
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let (Some(name), Some(email), Some(password)) = (
        present(&request.name),
        present(&request.email),
        request.password.as_deref().filter(|p| !p.is_empty()),
    ) else {
        return Err(BackendError::validation("Name, email, and password are required"));
    };

    tracing::info!("Registration request for: {}", email);

    let role = match present(&request.role) {
        Some(role) => role.parse::<Role>()?,
        None => Role::default(),
    };

    let new_user = NewUser {
        name: name.to_string(),
        email: email.to_string(),
        phone: present(&request.phone).map(str::to_string),
        address: present(&request.address).map(str::to_string),
        role,
    };

    let user = credentials::create(&state.db, new_user, password).await?;
    let token = state.tokens.create_token(user.id, &user.email, user.role)?;

    tracing::info!("User registered: {} ({})", user.email, user.role);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Registration successful".to_string(),
            token,
            user: user.into(),
        }),
    ))
}
