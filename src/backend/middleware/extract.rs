//! Request extractors that reject with `BackendError`
//!
//! Axum's own `Json` and `Path` extractors reject with plain-text bodies.
//! These wrappers keep the `{ "error": ... }` shape for malformed input too.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// JSON request body
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| BackendError::validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Typed path parameters
#[derive(Debug)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| BackendError::validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Trimmed, non-empty value of an optional string field
///
/// Request bodies treat a blank string the same as a missing field.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_treats_blank_as_absent() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some("   ".to_string())), None);
        assert_eq!(present(&Some(" a@x.com ".to_string())), Some("a@x.com"));
    }
}
