//! Error taxonomy for the REST service.
//!
//! Three failure classes cross the HTTP boundary:
//! - `Validation` → 400, the request was well-formed JSON but violates an
//!   invariant (missing measurement, empty edit, bad date). Never retried.
//! - `NotFound` → 404, the targeted sample does not exist.
//! - `Store` → 500, the database rejected an operation; logged server-side,
//!   the client only sees a generic message.
//!
//! `Unauthorized` (401) covers admin endpoints called without the configured
//! bearer token. Every variant implements `ResponseError`, so handlers
//! propagate with `?` and actix renders the right status and a JSON body
//! with a human-readable `detail` field.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("sample {0} not found")]
    NotFound(i64),

    #[error("invalid or missing admin credentials")]
    Unauthorized,

    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("csv rendering failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::Store(_) | ServiceError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            ServiceError::Store(e) => {
                error!("store error: {e}");
                "database error".to_string()
            }
            ServiceError::Csv(e) => {
                error!("csv rendering error: {e}");
                "export error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "detail": detail }))
    }
}
