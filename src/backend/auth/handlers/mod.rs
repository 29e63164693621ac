//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers under `/api/auth`.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! ├── me.rs        - Current user and logout handlers
//! ├── profile.rs   - Profile and password handlers
//! └── admin.rs     - Admin user management handlers
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`get_me`** - GET /api/auth/me
//! - **`logout`** - POST /api/auth/logout
//! - **`update_profile`** - PUT /api/auth/profile
//! - **`change_password`** - PUT /api/auth/change-password
//! - **`admin::*`** - /api/auth/admin/users...

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handlers
pub mod me;

/// Profile handlers
pub mod profile;

/// Admin user management
pub mod admin;

pub use types::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};

pub use login::login;
pub use me::{get_me, logout};
pub use profile::{change_password, update_profile};
pub use register::register;
