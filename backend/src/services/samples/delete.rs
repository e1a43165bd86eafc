//! Hard deletion: `DELETE /api/samples/{id}`.
//!
//! No soft-delete, no undo. A second delete of the same id reports NotFound.

use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use rusqlite::Connection;

use crate::auth::AdminPolicy;
use crate::config::Config;
use crate::db;
use crate::error::{ServiceError, ServiceResult};

pub async fn process(
    req: HttpRequest,
    config: web::Data<Config>,
    policy: web::Data<AdminPolicy>,
    id: web::Path<i64>,
) -> ServiceResult<HttpResponse> {
    policy.authorize(&req)?;
    let conn = db::open(&config.db_path)?;
    delete_sample(&conn, *id)?;
    info!("sample {} deleted", *id);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": *id, "deleted": true })))
}

pub fn delete_sample(conn: &Connection, id: i64) -> ServiceResult<()> {
    let changed = conn.execute("DELETE FROM samples WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(ServiceError::NotFound(id));
    }
    Ok(())
}
