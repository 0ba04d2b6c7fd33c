//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::photos::{dto::UploadResponse, read_image};
use crate::adapters::http::response::DataResponse;
use crate::application::handlers::profile::{
    GetProfileHandler, GetProfileQuery, UploadProfilePictureCommand, UploadProfilePictureHandler,
};
use crate::domain::profile::ProfileSummary;

#[derive(Clone)]
pub struct ProfileHandlers {
    get_handler: Arc<GetProfileHandler>,
    picture_handler: Arc<UploadProfilePictureHandler>,
}

impl ProfileHandlers {
    pub fn new(
        get_handler: Arc<GetProfileHandler>,
        picture_handler: Arc<UploadProfilePictureHandler>,
    ) -> Self {
        Self {
            get_handler,
            picture_handler,
        }
    }
}

/// GET /api/profile
pub async fn get_profile(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DataResponse<ProfileSummary>>, ApiError> {
    let summary = handlers.get_handler.handle(GetProfileQuery { user }).await?;
    Ok(Json(DataResponse::new(summary)))
}

/// POST /api/profile/picture
pub async fn upload_picture(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let image = read_image(&mut multipart).await?;

    let cmd = UploadProfilePictureCommand {
        user,
        file_name: image.file_name,
        content_type: image.content_type,
        bytes: image.bytes,
    };
    let stored = handlers.picture_handler.handle(cmd).await?;

    Ok(Json(UploadResponse::from(stored)))
}
