//! Shared Module
//!
//! This module contains types that are shared between the HTTP layer, the
//! storage layer and any client tooling. Nothing in here touches the network
//! or the database.
//!
//! # Overview
//!
//! - **`role`** - The fixed set of account roles
//! - **`error`** - Validation errors for shared types
//! - **`config`** - Application configuration and its builder

/// Account roles
pub mod role;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use role::Role;
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
