use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::TrackVisitRequest;
use rusqlite::{Connection, params};

use crate::config::Config;
use crate::db;
use crate::error::ServiceResult;

pub async fn process(
    req: HttpRequest,
    config: web::Data<Config>,
    payload: web::Json<TrackVisitRequest>,
) -> ServiceResult<HttpResponse> {
    // Fall back to request metadata for whatever the client left out.
    let user_agent = payload.user_agent.clone().unwrap_or_else(|| {
        req.headers()
            .get("User-Agent")
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string()
    });
    let ip_address = payload.ip_address.clone().unwrap_or_else(|| {
        req.peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_default()
    });
    let page = payload.page.clone().unwrap_or_else(|| "unknown".to_string());

    let conn = db::open(&config.db_path)?;
    let id = insert_visit(&conn, &page, &user_agent, &ip_address)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "visit_id": id, "page": page })))
}

pub fn insert_visit(
    conn: &Connection,
    page: &str,
    user_agent: &str,
    ip_address: &str,
) -> ServiceResult<i64> {
    conn.execute(
        "INSERT INTO visits (page, user_agent, ip_address) VALUES (?1, ?2, ?3)",
        params![page, user_agent, ip_address],
    )?;
    Ok(conn.last_insert_rowid())
}
