/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Refuse deactivated accounts
 * 4. Generate session token
 * 5. Return token and user info
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 body
 * - The deactivated-account 403 is only reported once the password matched
 * - User passwords are never returned in responses
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::credentials;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::error::BackendError;
use crate::backend::middleware::{present, JsonBody};
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing email or password
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `403 Forbidden` - Account is deactivated
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Login successful",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": { "id": "…", "email": "a@x.com", "role": "buyer", … }
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let (Some(email), Some(password)) = (
        present(&request.email),
        request.password.as_deref().filter(|p| !p.is_empty()),
    ) else {
        return Err(BackendError::validation("Email and password are required"));
    };

    tracing::info!("Login request for: {}", email);

    let user = credentials::verify(&state.db, email, password)
        .await
        .inspect_err(|e| tracing::warn!("Login rejected for {}: {}", email, e))?;

    let token = state.tokens.create_token(user.id, &user.email, user.role)?;

    tracing::info!("Login successful for: {}", user.email);

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: user.into(),
    }))
}
