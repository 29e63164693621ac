//! Middleware Module
//!
//! Request processing that runs before handler logic:
//!
//! - **`auth`** - Authentication and role guards (`AuthUser`, `Authorized<R>`)
//! - **`extract`** - Body and path extractors that reject with `BackendError`

pub mod auth;
pub mod extract;

pub use auth::{
    extract_token, require_role, Admins, AuthUser, AuthenticatedUser, Authorized,
    ListingManagers, LocationEditors, Members, RoleSet,
};
pub use extract::{present, JsonBody, PathParam};
