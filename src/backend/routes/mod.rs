//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, layers and static fallback
//! - **`api_routes`** - The `/api` endpoint table
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint table
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use property_market::backend::routes::create_router;
//! use property_market::backend::server::{config::load_database, AppState};
//! use property_market::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! let db = load_database(&config).await?;
//! let router = create_router(AppState::new(db, config));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint table
pub mod api_routes;

pub use router::create_router;
