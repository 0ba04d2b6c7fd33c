//! HTTP adapter for the static catalog.
//!
//! - `GET /api/catalog` - Origins, roast levels, brew methods and milestones

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::catalog_routes;
