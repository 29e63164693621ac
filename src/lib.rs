//! Property Market - Main Library
//!
//! A property-listing marketplace served as a JSON REST API over SQLite,
//! with a static HTML/JS frontend served from the same process.
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types
//!   - Roles, configuration, shared error type
//!
//! - **`backend`** - Axum server
//!   - Credential store, session tokens and request guards
//!   - Listings, catalogue, favorites, inquiries, search, user directory
//!   - Router, application state and database setup
//!
//! # Usage
//!
//! ```rust,no_run
//! use property_market::backend::server::{config::load_config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let port = config.port;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation of shared types
//! - `backend::error::BackendError` for everything a request can end in;
//!   it renders as `{"error": "..."}` with the matching status code

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
