/**
 * Authentication and Role Guards
 *
 * This module provides the two request guards every protected route is
 * built from:
 *
 * 1. **Authentication** (`AuthUser`): a verifiable, unexpired token must be
 *    present, either as `Authorization: Bearer <token>` or as a `token`
 *    cookie. Missing or invalid tokens reject with 401.
 * 2. **Role** (`Authorized<R>`): runs the authentication guard first, then
 *    rejects with 403 unless the token's role is in the role set `R`.
 *
 * Both are Axum extractors, so handlers declare their guard in their
 * signature and the guard always runs before the body is read.
 */

use std::marker::PhantomData;
use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    request::Parts,
    HeaderMap,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::Role;

/// Authenticated user data extracted from a session token
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Pull the raw token out of the request headers.
///
/// The Authorization header wins over the cookie when both are present.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    if bearer.is_some() {
        return bearer;
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().strip_prefix("token="))
        .find(|t| !t.is_empty())
}

/// Check that the actor's role is in the allow-list
pub fn require_role(user: &AuthenticatedUser, allowed: &[Role]) -> Result<(), BackendError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        tracing::warn!(user_id = %user.user_id, role = %user.role, "Role check failed");
        Err(BackendError::forbidden("Access denied. Insufficient permissions."))
    }
}

/// Axum extractor for the authenticated user
///
/// Rejects with 401 when no token is supplied or the token does not verify.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl Deref for AuthUser {
    type Target = AuthenticatedUser;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing session token");
            BackendError::unauthenticated("No token provided")
        })?;

        let claims = state.tokens.verify_token(token)?;
        let user_id = claims.user_id()?;

        Ok(AuthUser(AuthenticatedUser {
            user_id,
            email: claims.email,
            role: claims.role,
        }))
    }
}

/// A fixed allow-list of roles, used as the type parameter of `Authorized`
pub trait RoleSet {
    const ALLOWED: &'static [Role];
}

/// Sellers and admins: listing and property management
#[derive(Debug)]
pub struct ListingManagers;

impl RoleSet for ListingManagers {
    const ALLOWED: &'static [Role] = &[Role::Seller, Role::Admin];
}

/// Sellers, agents and admins: location records
#[derive(Debug)]
pub struct LocationEditors;

impl RoleSet for LocationEditors {
    const ALLOWED: &'static [Role] = &[Role::Seller, Role::Agent, Role::Admin];
}

/// Administrators only
#[derive(Debug)]
pub struct Admins;

impl RoleSet for Admins {
    const ALLOWED: &'static [Role] = &[Role::Admin];
}

/// Every role: any logged-in account
#[derive(Debug)]
pub struct Members;

impl RoleSet for Members {
    const ALLOWED: &'static [Role] = &Role::ALL;
}

/// Axum extractor that authenticates and then checks the role set `R`
///
/// Authentication always runs first, so an anonymous request gets 401 and
/// never reaches the role check.
#[derive(Debug)]
pub struct Authorized<R> {
    user: AuthenticatedUser,
    _roles: PhantomData<fn() -> R>,
}

impl<R> Deref for Authorized<R> {
    type Target = AuthenticatedUser;

    fn deref(&self) -> &Self::Target {
        &self.user
    }
}

impl<R: RoleSet> FromRequestParts<AppState> for Authorized<R> {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        require_role(&user, R::ALLOWED)?;
        Ok(Self {
            user,
            _roles: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_extract_token_from_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; token=abc.def.ghi"));
        assert_eq!(extract_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        headers.insert(COOKIE, HeaderValue::from_static("token=from-cookie"));
        assert_eq!(extract_token(&headers), Some("from-header"));
    }

    #[test]
    fn test_extract_token_missing() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert_eq!(extract_token(&headers), None);
    }

    #[test]
    fn test_require_role() {
        assert!(require_role(&user(Role::Seller), ListingManagers::ALLOWED).is_ok());
        assert!(require_role(&user(Role::Admin), ListingManagers::ALLOWED).is_ok());
        assert_matches!(
            require_role(&user(Role::Buyer), ListingManagers::ALLOWED),
            Err(BackendError::Forbidden(_))
        );
        assert_matches!(
            require_role(&user(Role::Agent), Admins::ALLOWED),
            Err(BackendError::Forbidden(_))
        );
        for role in Role::ALL {
            assert!(require_role(&user(role), Members::ALLOWED).is_ok());
        }
    }
}
