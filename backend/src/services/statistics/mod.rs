//! # Statistics Service Module
//!
//! Aggregates for the admin dashboard: sample totals, the per-location
//! breakdown, the latest submissions, and visit counts over the trailing
//! windows. Everything is computed on demand from the store; no counters
//! are maintained incrementally.
//!
//! ## Registered routes
//! *   **`GET /api/admin/statistics`**: `get::process` (admin only).

mod get;

use actix_web::web;
use actix_web::Scope;

const API_PATH: &str = "/api/admin";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH).route("/statistics", web::get().to(get::process))
}
