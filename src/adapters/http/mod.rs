//! HTTP adapters - REST API implementations.
//!
//! Each area has its own `dto`/`handlers`/`routes` trio; `router` stitches
//! them together behind the auth middleware and the tower-http layers.

pub mod catalog;
pub mod community;
pub mod error;
pub mod health;
pub mod journal;
pub mod journey;
pub mod middleware;
pub mod photos;
pub mod profile;
pub mod response;
pub mod router;

pub use error::{ApiError, ErrorResponse};
pub use router::{build_router, ApiServices, RouterOptions};
