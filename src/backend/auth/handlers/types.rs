/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication and account-management handlers.
 *
 * Required request fields are `Option`s so that a missing field produces the
 * same `{error}` message as a blank one instead of a deserializer rejection.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserResponse;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Plaintext password (hashed before storage)
    pub password: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// One of buyer, seller, agent, admin; defaults to buyer
    pub role: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Auth response
///
/// Returned by register and login. Contains the session token and the
/// user record without its password hash.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub message: String,
    /// Session token (7-day expiration by default)
    pub token: String,
    pub user: UserResponse,
}

/// Profile update; absent fields keep their stored value
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Password change
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ChangePasswordRequest {
    #[serde(rename = "currentPassword", alias = "current_password")]
    pub current_password: Option<String>,
    #[serde(rename = "newPassword", alias = "new_password")]
    pub new_password: Option<String>,
}

/// Admin: change a user's role
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateRoleRequest {
    pub role: Option<String>,
}

/// Admin: activate or deactivate a user
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateStatusRequest {
    pub is_active: Option<bool>,
}

/// `{message}`
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{message, user}`
#[derive(Serialize, Deserialize, Debug)]
pub struct UserMessageResponse {
    pub message: String,
    pub user: UserResponse,
}

/// `{message, deletedUser}`
#[derive(Serialize, Deserialize, Debug)]
pub struct DeletedUserResponse {
    pub message: String,
    #[serde(rename = "deletedUser")]
    pub deleted_user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_password_accepts_both_spellings() {
        let camel: ChangePasswordRequest =
            serde_json::from_str(r#"{"currentPassword":"a","newPassword":"b"}"#).unwrap();
        let snake: ChangePasswordRequest =
            serde_json::from_str(r#"{"current_password":"a","new_password":"b"}"#).unwrap();
        assert_eq!(camel.current_password.as_deref(), Some("a"));
        assert_eq!(snake.new_password.as_deref(), Some("b"));
    }
}
