/**
 * Backend Error Types
 *
 * This module defines every failure a request can end in. Each variant maps
 * onto one HTTP status through `status_code()`:
 *
 * - 400 Validation: malformed input, policy violations, degenerate updates
 * - 401 Unauthenticated: missing/invalid token, bad credentials
 * - 403 Forbidden: role and ownership denials, deactivated accounts
 * - 404 NotFound
 * - 409 Conflict: duplicate email, duplicate favorite
 * - 500 Internal: storage, hashing and signing failures
 *
 * Internal failures never echo their cause to the client; the cause is
 * logged when the error is turned into a response.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Message sent to clients for every 500-class error
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use property_market::backend::error::BackendError;
///
/// let err = BackendError::validation("Email and password are required");
/// let err = BackendError::forbidden("Access denied. Insufficient permissions.");
/// let err = BackendError::not_found("User not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or malformed request input
    #[error("{0}")]
    Validation(String),

    /// Password does not meet the minimum length
    #[error("{0}")]
    PolicyViolation(String),

    /// Listing update carried neither price nor status
    #[error("No fields to update")]
    NoFieldsToUpdate,

    /// Role outside the fixed role set
    #[error("Invalid role")]
    InvalidRole,

    /// Admin tried to delete their own account
    #[error("Cannot delete your own account")]
    CannotDeleteSelf,

    /// Inquiry against a listing whose status is not `active`
    #[error("Listing is not active")]
    ListingNotActive,

    /// No usable token on a request that needs one
    #[error("{0}")]
    Unauthenticated(String),

    /// Token failed signature, structure or expiry checks
    ///
    /// Carries no detail about which check failed.
    #[error("Invalid token")]
    InvalidToken,

    /// Unknown email or wrong password; the two are not told apart
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Wrong current password on a password change
    #[error("Current password is incorrect")]
    IncorrectPassword,

    /// Role or ownership denial
    #[error("{0}")]
    Forbidden(String),

    /// Correct credentials for a deactivated account
    #[error("Account is deactivated")]
    AccountInactive,

    /// Generic missing resource
    #[error("{0}")]
    NotFound(String),

    /// Listing id does not exist
    #[error("Listing not found")]
    ListingNotFound,

    /// Email already registered
    #[error("Email already registered")]
    DuplicateEmail,

    /// The (user, listing) favorite pair already exists
    #[error("Already in favorites")]
    AlreadyFavorited,

    /// Shared-type validation failure, e.g. an unknown role name
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Storage failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),

    /// Anything else that should surface as a 500
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an authentication error (401)
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    /// Create an authorization error (403)
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Create a not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an internal error (500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::PolicyViolation(_)
            | Self::NoFieldsToUpdate
            | Self::InvalidRole
            | Self::CannotDeleteSelf
            | Self::ListingNotActive => StatusCode::BAD_REQUEST,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_)
            | Self::InvalidToken
            | Self::InvalidCredentials
            | Self::IncorrectPassword => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) | Self::AccountInactive => StatusCode::FORBIDDEN,
            Self::NotFound(_) | Self::ListingNotFound => StatusCode::NOT_FOUND,
            Self::DuplicateEmail | Self::AlreadyFavorited => StatusCode::CONFLICT,
            Self::Database(_)
            | Self::PasswordHash(_)
            | Self::TokenSigning(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for errors whose cause must stay server-side
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Get the message that is safe to send to the client
    pub fn message(&self) -> String {
        if self.is_internal() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}
