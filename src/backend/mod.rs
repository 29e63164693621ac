//! Backend Module
//!
//! All server-side code: an Axum HTTP server over a SQLite pool.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, session tokens, account handlers
//! - **`middleware`** - Authentication/role guards and body extractors
//! - **`policy`** - Ownership decisions for listing writes
//! - **`listings`** - Listing reads, seller dashboard, listing writes
//! - **`catalog`** - Properties and locations
//! - **`favorites`** - Per-user favorite listings
//! - **`inquiries`** - Messages about listings
//! - **`search`** - Filtered search and market statistics
//! - **`users`** - Public user directory and activity reports
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Guards and extractors
//! ├── policy.rs       - Ownership policy
//! ├── listings/       - Listings
//! ├── catalog/        - Properties and locations
//! ├── favorites/      - Favorites
//! ├── inquiries/      - Inquiries
//! ├── search/         - Search and statistics
//! ├── users/          - User directory
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the database pool, the token issuer and the
//! configuration. There is no other shared mutable state: every request
//! reads and writes through the pool.
//!
//! # Request Flow
//!
//! client → router → guard extractors (`AuthUser`, `Authorized<R>`) →
//! handler (ownership via `policy`) → SQLite → JSON response
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; the error's `IntoResponse`
//! picks the status code and renders `{"error": message}`. 500-class
//! errors are logged and reported to the client as `Internal server error`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Guards and extractors
pub mod middleware;

/// Ownership policy
pub mod policy;

/// Listings
pub mod listings;

/// Properties and locations
pub mod catalog;

/// Favorites
pub mod favorites;

/// Inquiries
pub mod inquiries;

/// Search and statistics
pub mod search;

/// Public user directory
pub mod users;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
