//! HTTP adapter for the profile page.
//!
//! - `GET /api/profile` - Email, member-since, avatar and journey totals
//! - `POST /api/profile/picture` - Multipart `file`; replaces the avatar

pub mod handlers;
pub mod routes;

pub use handlers::ProfileHandlers;
pub use routes::profile_routes;
