//! HTTP adapter for the community page.
//!
//! - `GET /api/community` - Popularity, coffee twins and global totals

pub mod handlers;
pub mod routes;

pub use handlers::CommunityHandlers;
pub use routes::community_routes;
