//! # Parameters Service Module
//!
//! Named scalar readings for the current-readings page, independent of the
//! sample workflow. Reads are public; writes are admin-only overwrites with
//! no history kept.
//!
//! ## Registered routes
//! *   **`GET /api/parameters`**: `list::process`: every parameter with its
//!     last-updated timestamp.
//! *   **`PUT /api/parameters/{name}`**: `save::process`: insert or replace
//!     the value under `name`, stamping `updated_at`.

mod list;
mod save;

use actix_web::web::{get, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/parameters";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{name}", put().to(save::process))
}
