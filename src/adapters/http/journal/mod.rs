//! HTTP adapter for the coffee journal.
//!
//! - `POST /api/coffee` - Record an entry for the current user
//! - `GET /api/coffee` - List the current user's entries, newest first

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::JournalHandlers;
pub use routes::journal_routes;
