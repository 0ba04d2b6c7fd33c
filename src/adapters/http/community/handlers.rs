//! HTTP handlers for community endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Local;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::response::DataResponse;
use crate::application::handlers::community::{GetCommunityHandler, GetCommunityQuery};
use crate::domain::community::CommunitySnapshot;

#[derive(Clone)]
pub struct CommunityHandlers {
    snapshot_handler: Arc<GetCommunityHandler>,
}

impl CommunityHandlers {
    pub fn new(snapshot_handler: Arc<GetCommunityHandler>) -> Self {
        Self { snapshot_handler }
    }
}

/// GET /api/community - "Today" is the server's local day
pub async fn get_community(
    State(handlers): State<CommunityHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DataResponse<CommunitySnapshot>>, ApiError> {
    let query = GetCommunityQuery {
        user_id: user.id,
        as_of: Local::now().date_naive(),
    };

    let snapshot = handlers.snapshot_handler.handle(query, &Local).await?;

    Ok(Json(DataResponse::new(snapshot)))
}
