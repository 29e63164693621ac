//! Authentication Module
//!
//! This module handles user accounts, credentials and session tokens, and
//! the HTTP handlers under `/api/auth`.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`credentials`** - Password hashing, verification and policy
//! - **`sessions`** - Session token issuing and verification
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── credentials.rs  - Credential store
//! ├── sessions.rs     - Token management
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: user fields → password hashed, user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Me**: token → verified by the `AuthUser` guard → user info returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 10) before storage
//! - Tokens are stateless and expire after 7 days by default
//! - Logout is client-side; tokens cannot be revoked before they expire
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// Credential store
pub mod credentials;

/// Session token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use sessions::{Claims, TokenIssuer};
pub use users::{User, UserResponse};
