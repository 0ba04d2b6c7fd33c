//! HTTP handlers for journal endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::response::DataResponse;
use crate::application::handlers::journal::{
    ListEntriesHandler, ListEntriesQuery, RecordEntryCommand, RecordEntryHandler,
};
use crate::domain::foundation::DomainError;
use crate::domain::journal::CoffeeEntry;

use super::dto::{RecordEntryRequest, RecordEntryResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct JournalHandlers {
    record_handler: Arc<RecordEntryHandler>,
    list_handler: Arc<ListEntriesHandler>,
}

impl JournalHandlers {
    pub fn new(record_handler: Arc<RecordEntryHandler>, list_handler: Arc<ListEntriesHandler>) -> Self {
        Self {
            record_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/coffee - Record a coffee for the current user
pub async fn record_entry(
    State(handlers): State<JournalHandlers>,
    RequireAuth(user): RequireAuth,
    req: Result<Json<RecordEntryRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = req?;
    let input = req.into_new_entry().map_err(DomainError::from)?;
    let cmd = RecordEntryCommand { user, input };

    let entry = handlers.record_handler.handle(cmd).await?;

    let response = RecordEntryResponse {
        success: true,
        data: entry,
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// GET /api/coffee - List the current user's entries, newest first
pub async fn list_entries(
    State(handlers): State<JournalHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DataResponse<Vec<CoffeeEntry>>>, ApiError> {
    let query = ListEntriesQuery { user_id: user.id };

    let entries = handlers.list_handler.handle(query).await?;

    Ok(Json(DataResponse::new(entries)))
}
