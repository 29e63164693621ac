/**
 * Credential Store
 *
 * The only place passwords are handled in plaintext. Passwords are hashed
 * with bcrypt at a fixed cost before they reach the database and are never
 * logged.
 *
 * - `create` rejects duplicate emails with `DuplicateEmail`
 * - `verify` never distinguishes "no such user" from "wrong password"
 * - `change_password` re-verifies the current password before rehashing
 */

use bcrypt::{hash, verify as verify_hash};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::users::{self, NewUser, User};
use crate::backend::error::BackendError;

/// bcrypt cost factor
pub const PASSWORD_COST: u32 = 10;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

fn meets_length_policy(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Register a new user
///
/// # Errors
/// * `PolicyViolation` - password shorter than `MIN_PASSWORD_LENGTH`
/// * `DuplicateEmail` - email already registered
pub async fn create(pool: &SqlitePool, new_user: NewUser, password: &str) -> Result<User, BackendError> {
    if !meets_length_policy(password) {
        return Err(BackendError::PolicyViolation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    if users::get_user_by_email(pool, &new_user.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", new_user.email);
        return Err(BackendError::DuplicateEmail);
    }

    let password_hash = hash(password, PASSWORD_COST)?;

    users::create_user(pool, &new_user, &password_hash)
        .await
        .map_err(|e| match e {
            // lost a race with a concurrent registration
            sqlx::Error::Database(ref db) if db.is_unique_violation() => BackendError::DuplicateEmail,
            other => BackendError::Database(other),
        })
}

/// Check an email/password pair
///
/// # Errors
/// * `InvalidCredentials` - unknown email or wrong password
/// * `AccountInactive` - correct password, deactivated account
pub async fn verify(pool: &SqlitePool, email: &str, password: &str) -> Result<User, BackendError> {
    let user = users::get_user_by_email(pool, email)
        .await?
        .ok_or(BackendError::InvalidCredentials)?;

    if !verify_hash(password, &user.password_hash)? {
        return Err(BackendError::InvalidCredentials);
    }

    if !user.is_active {
        return Err(BackendError::AccountInactive);
    }

    Ok(user)
}

/// Replace a user's password after re-verifying the current one
///
/// # Errors
/// * `PolicyViolation` - new password too short
/// * `NotFound` - no such user
/// * `IncorrectPassword` - current password does not match
pub async fn change_password(
    pool: &SqlitePool,
    user_id: Uuid,
    current_password: &str,
    new_password: &str,
) -> Result<(), BackendError> {
    if !meets_length_policy(new_password) {
        return Err(BackendError::PolicyViolation(format!(
            "New password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    let user = users::get_user_by_id(pool, user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    if !verify_hash(current_password, &user.password_hash)? {
        return Err(BackendError::IncorrectPassword);
    }

    let password_hash = hash(new_password, PASSWORD_COST)?;
    users::update_password_hash(pool, user_id, &password_hash).await?;

    Ok(())
}
