//! HTTP routes for community endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_community, CommunityHandlers};

/// Creates the community router, mounted at `/api/community`.
pub fn community_routes(handlers: CommunityHandlers) -> Router {
    Router::new()
        .route("/", get(get_community))
        .with_state(handlers)
}
