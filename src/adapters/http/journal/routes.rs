//! HTTP routes for journal endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_entries, record_entry, JournalHandlers};

/// Creates the journal router, mounted at `/api/coffee`.
pub fn journal_routes(handlers: JournalHandlers) -> Router {
    Router::new()
        .route("/", get(list_entries).post(record_entry))
        .with_state(handlers)
}
