//! Request and response payloads exchanged between the dashboard and the API.

use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/samples/bulk-validate`.
///
/// Applies the same validation flag to every listed sample. Missing ids are
/// skipped, not errors; the response reports how many rows actually changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkValidateRequest {
    pub sample_ids: Vec<i64>,
    pub validated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkValidateResponse {
    pub updated_count: usize,
}

/// Response for a successful sample submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub id: i64,
    pub validated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingCountResponse {
    pub pending_count: i64,
}

/// Request payload for `PUT /api/parameters/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveParameterRequest {
    pub value: String,
}

/// Anonymous page-view tracking payload for `POST /api/visits`.
///
/// All fields are optional: the backend falls back to the request headers
/// and peer address for whatever the client leaves out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackVisitRequest {
    pub page: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}
