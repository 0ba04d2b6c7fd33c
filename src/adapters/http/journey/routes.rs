//! HTTP routes for journey endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_calendar, get_map, get_passport, get_progress, JourneyHandlers};

/// Creates the journey router, mounted at `/api/journey`.
pub fn journey_routes(handlers: JourneyHandlers) -> Router {
    Router::new()
        .route("/map", get(get_map))
        .route("/calendar", get(get_calendar))
        .route("/passport", get(get_passport))
        .route("/progress", get(get_progress))
        .with_state(handlers)
}
