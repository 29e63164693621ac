//! Catalogue Module
//!
//! Properties and locations: the records a listing is built from.
//!
//! - `POST /api/properties`, `GET /api/properties/mine` (sellers, admins)
//! - `POST /api/locations` (sellers, agents, admins), `GET /api/locations`

pub mod db;
pub mod handlers;
pub mod types;

pub use types::{Location, Property};
