//! HTTP handlers for journey endpoints.
//!
//! Calendar days are bucketed in the server's local time zone.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use chrono::Local;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::response::DataResponse;
use crate::application::handlers::journey::{
    GetCalendarHandler, GetCalendarQuery, GetJourneyMapHandler, GetJourneyMapQuery,
    GetPassportHandler, GetPassportQuery, GetProgressHandler, GetProgressQuery,
};
use crate::domain::foundation::DomainError;
use crate::domain::journey::{CalendarMonth, JourneyProgress, MapMarker, Passport};

use super::dto::{CalendarParams, PassportParams};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct JourneyHandlers {
    map_handler: Arc<GetJourneyMapHandler>,
    calendar_handler: Arc<GetCalendarHandler>,
    passport_handler: Arc<GetPassportHandler>,
    progress_handler: Arc<GetProgressHandler>,
}

impl JourneyHandlers {
    pub fn new(
        map_handler: Arc<GetJourneyMapHandler>,
        calendar_handler: Arc<GetCalendarHandler>,
        passport_handler: Arc<GetPassportHandler>,
        progress_handler: Arc<GetProgressHandler>,
    ) -> Self {
        Self {
            map_handler,
            calendar_handler,
            passport_handler,
            progress_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/journey/map
pub async fn get_map(
    State(handlers): State<JourneyHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DataResponse<Vec<MapMarker>>>, ApiError> {
    let markers = handlers
        .map_handler
        .handle(GetJourneyMapQuery { user_id: user.id })
        .await?;
    Ok(Json(DataResponse::new(markers)))
}

/// GET /api/journey/calendar?year&month
pub async fn get_calendar(
    State(handlers): State<JourneyHandlers>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<CalendarParams>, QueryRejection>,
) -> Result<Json<DataResponse<CalendarMonth>>, ApiError> {
    let Query(params) = params?;
    let (year, month) = params.resolve(Local::now().date_naive());
    let query = GetCalendarQuery {
        user_id: user.id,
        year,
        month,
    };

    let calendar = handlers.calendar_handler.handle(query, &Local).await?;

    Ok(Json(DataResponse::new(calendar)))
}

/// GET /api/journey/passport?rarity
pub async fn get_passport(
    State(handlers): State<JourneyHandlers>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<PassportParams>, QueryRejection>,
) -> Result<Json<DataResponse<Passport>>, ApiError> {
    let Query(params) = params?;
    let rarity = params.rarity().map_err(DomainError::from)?;
    let query = GetPassportQuery {
        user_id: user.id,
        rarity,
    };

    let passport = handlers.passport_handler.handle(query).await?;

    Ok(Json(DataResponse::new(passport)))
}

/// GET /api/journey/progress
pub async fn get_progress(
    State(handlers): State<JourneyHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DataResponse<JourneyProgress>>, ApiError> {
    let progress = handlers
        .progress_handler
        .handle(GetProgressQuery { user_id: user.id })
        .await?;
    Ok(Json(DataResponse::new(progress)))
}
