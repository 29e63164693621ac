//! Shared Error Types
//!
//! Errors for values parsed outside any particular HTTP handler, such as
//! role names arriving in request bodies or path segments. The backend wraps
//! them in `BackendError::SharedError` and answers 400.
//!
//! # Usage
//!
//! ```rust
//! use property_market::shared::error::SharedError;
//!
//! let error = SharedError::validation("role", "Invalid role");
//! assert_eq!(error.field(), "role");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// A field held a value outside its allowed set
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Message safe to show to the client
        message: String,
    },
}

impl SharedError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let error = SharedError::validation("role", "Invalid role");
        assert_eq!(error.to_string(), "Invalid role");
        assert_eq!(error.field(), "role");
    }

    #[test]
    fn test_role_parse_error_names_the_field() {
        let error = "landlord".parse::<crate::shared::Role>().unwrap_err();
        assert_eq!(error.field(), "role");
    }
}
