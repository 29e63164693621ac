//! Search Module
//!
//! Read-side only: filtered listing search, the city and property-type
//! pickers, and market statistics.
//!
//! # Module Structure
//!
//! ```text
//! search/
//! ├── mod.rs       - Module exports and documentation
//! ├── filter.rs    - SearchFilter, Predicate and the query compiler
//! ├── db.rs        - Queries and statistics types
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod db;
pub mod filter;
pub mod handlers;

pub use db::Statistics;
pub use filter::{compile, Predicate, SearchFilter};
