//! Success envelopes shared by the read endpoints.

use serde::Serialize;

/// `{"data": ...}` wrapper used by every read endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
