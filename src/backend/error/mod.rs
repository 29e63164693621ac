//! Backend Error Module
//!
//! This module defines the single error type used by handlers, services and
//! storage functions, and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, INTERNAL_ERROR_MESSAGE};
pub use conversion::ErrorBody;
