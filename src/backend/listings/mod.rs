//! Listings Module
//!
//! Listing grids, the listing detail page, the seller dashboard and
//! owner-gated listing writes.
//!
//! # Module Structure
//!
//! ```text
//! listings/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Row and request types
//! ├── db.rs        - Queries (the summary SELECT is shared with search)
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod db;
pub mod handlers;
pub mod types;

pub use types::{ListingDetail, ListingImage, ListingSummary, SellerListing};
