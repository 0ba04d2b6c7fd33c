//! HTTP adapter for the per-user journey views.
//!
//! - `GET /api/journey/map` - One marker per catalog origin
//! - `GET /api/journey/calendar?year&month` - One month of logged days
//! - `GET /api/journey/passport?rarity` - Stamps, optionally one rarity tier
//! - `GET /api/journey/progress` - Totals and milestone status

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::JourneyHandlers;
pub use routes::journey_routes;
