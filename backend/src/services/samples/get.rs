//! Single-sample lookup: `GET /api/samples/{id}`.
//!
//! One direct query by primary key. The predecessor of this endpoint fetched
//! the whole listing and filtered client-side; that variant is intentionally
//! gone.

use actix_web::{web, HttpResponse};
use common::model::sample::Sample;
use rusqlite::{Connection, OptionalExtension};

use crate::config::Config;
use crate::db::{self, row_to_sample, SAMPLE_COLUMNS};
use crate::error::{ServiceError, ServiceResult};

pub async fn process(
    config: web::Data<Config>,
    id: web::Path<i64>,
) -> ServiceResult<HttpResponse> {
    let conn = db::open(&config.db_path)?;
    Ok(HttpResponse::Ok().json(get_by_id(&conn, *id)?))
}

pub fn get_by_id(conn: &Connection, id: i64) -> ServiceResult<Sample> {
    conn.query_row(
        &format!("SELECT {SAMPLE_COLUMNS} FROM samples WHERE id = ?1"),
        [id],
        row_to_sample,
    )
    .optional()?
    .ok_or(ServiceError::NotFound(id))
}
