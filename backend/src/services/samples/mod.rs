//! # Samples Service Module
//!
//! Aggregates every endpoint operating on water samples under `/api/samples`
//! and wires the moderation workflow: a submitted sample starts unvalidated
//! and invisible to the public listing until an administrator validates it.
//!
//! ## Registered routes
//!
//! Public:
//! *   **`POST /`**: `submit::process`: accept a new sample submission,
//!     persist it unvalidated, return the new id.
//! *   **`GET /`**: `list::process_public`: validated samples only, newest
//!     sampling date first.
//! *   **`GET /export.csv`**: `export::process`: the public listing as a
//!     CSV download.
//! *   **`GET /pending-count`**: `list::process_pending`: number of samples
//!     awaiting review, drives the dashboard notice.
//! *   **`GET /{id}`**: `get::process`: direct single-sample lookup.
//!
//! Admin (bearer token):
//! *   **`GET /admin`**: `list::process_admin`: every sample, pending ones
//!     first so reviewers see open work at the top.
//! *   **`POST /{id}/validate`**, **`POST /{id}/invalidate`**:
//!     `validate::process_validate` / `process_invalidate`: flip a sample's
//!     public visibility. Idempotent.
//! *   **`POST /bulk-validate`**: `validate::process_bulk`: best-effort
//!     bulk transition, reports the number of rows actually updated.
//! *   **`PUT /{id}`**: `edit::process`: allow-listed partial update.
//! *   **`DELETE /{id}`**: `delete::process`: hard delete, irreversible.
//!
//! Route order matters: literal segments (`admin`, `pending-count`,
//! `export.csv`, `bulk-validate`) are registered before the `{id}` matchers.

mod delete;
mod edit;
mod export;
mod get;
mod list;
pub(crate) mod submit;
pub(crate) mod validate;

use actix_web::web;
use actix_web::Scope;

const API_PATH: &str = "/api/samples";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::post().to(submit::process))
        .route("", web::get().to(list::process_public))
        .route("/admin", web::get().to(list::process_admin))
        .route("/pending-count", web::get().to(list::process_pending))
        .route("/export.csv", web::get().to(export::process))
        .route("/bulk-validate", web::post().to(validate::process_bulk))
        .route("/{id}/validate", web::post().to(validate::process_validate))
        .route("/{id}/invalidate", web::post().to(validate::process_invalidate))
        .route("/{id}", web::get().to(get::process))
        .route("/{id}", web::put().to(edit::process))
        .route("/{id}", web::delete().to(delete::process))
}
