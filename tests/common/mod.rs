//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-memory application fixture with a request helper
//! - Account and catalogue seeding helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;
