//! # Visits Service Module
//!
//! Anonymous page-view tracking. The single route is public (the dashboard
//! fires it on navigation) and the rows only ever feed the aggregate counts
//! on the admin statistics endpoint.
//!
//! ## Registered routes
//! *   **`POST /api/visits`**: `track::process`: record one page view.

pub(crate) mod track;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/visits";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(track::process))
}
