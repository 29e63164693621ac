/**
 * Session Management and JWT Tokens
 *
 * This module issues and verifies the stateless session tokens handed out at
 * registration and login. A token embeds the user id, email and role plus an
 * expiry; verifying it needs nothing but the signing secret.
 *
 * Tokens cannot be revoked before they expire. Logout is advisory: the
 * client drops its copy, and a leaked token stays valid until `exp`.
 */

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::Role;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Role at the time the token was issued
    pub role: Role,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Parse the subject back into a user id
    pub fn user_id(&self) -> Result<Uuid, BackendError> {
        Uuid::parse_str(&self.sub).map_err(|_| BackendError::InvalidToken)
    }
}

/// Signs and verifies session tokens
///
/// Cheap to clone; the keys are shared behind an `Arc`.
#[derive(Clone)]
pub struct TokenIssuer {
    keys: Arc<Keys>,
    ttl: Duration,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    /// Create an issuer from an HMAC secret and a token lifetime
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            ttl,
        }
    }

    /// Create a token for a user
    ///
    /// # Arguments
    /// * `user_id` - User ID (UUID)
    /// * `email` - User email
    /// * `role` - User role
    ///
    /// # Returns
    /// Signed JWT string
    pub fn create_token(&self, user_id: Uuid, email: &str, role: Role) -> Result<String, BackendError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| BackendError::internal("token expiry out of range"))?;
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.keys.encoding)?)
    }

    /// Verify and decode a token
    ///
    /// Any failure (bad structure, bad signature, expired) collapses into
    /// `BackendError::InvalidToken`.
    pub fn verify_token(&self, token: &str) -> Result<Claims, BackendError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token verification failed: {:?}", e.kind());
                BackendError::InvalidToken
            })
    }
}
