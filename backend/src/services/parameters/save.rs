use actix_web::{web, HttpRequest, HttpResponse};
use common::model::parameter::Parameter;
use common::requests::SaveParameterRequest;
use log::info;
use rusqlite::{Connection, params};

use crate::auth::AdminPolicy;
use crate::config::Config;
use crate::db;
use crate::error::{ServiceError, ServiceResult};

pub async fn process(
    req: HttpRequest,
    config: web::Data<Config>,
    policy: web::Data<AdminPolicy>,
    name: web::Path<String>,
    payload: web::Json<SaveParameterRequest>,
) -> ServiceResult<HttpResponse> {
    policy.authorize(&req)?;
    let conn = db::open(&config.db_path)?;
    let saved = save_parameter(&conn, &name, &payload.value)?;
    info!("parameter '{}' set to '{}'", saved.name, saved.value);
    Ok(HttpResponse::Ok().json(saved))
}

/// Overwrites (or creates) the parameter and returns the stored row.
pub fn save_parameter(conn: &Connection, name: &str, value: &str) -> ServiceResult<Parameter> {
    if name.trim().is_empty() {
        return Err(ServiceError::Validation(
            "parameter name must not be empty".to_string(),
        ));
    }
    conn.execute(
        "INSERT OR REPLACE INTO parameters (name, value, updated_at) \
         VALUES (?1, ?2, datetime('now'))",
        params![name.trim(), value],
    )?;
    let parameter = conn.query_row(
        "SELECT name, value, updated_at FROM parameters WHERE name = ?1",
        params![name.trim()],
        |row| {
            Ok(Parameter {
                name: row.get(0)?,
                value: row.get(1)?,
                updated_at: row.get(2)?,
            })
        },
    )?;
    Ok(parameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_an_existing_parameter() {
        let conn = db::test_connection();
        save_parameter(&conn, "pH", "7.4").unwrap();
        let saved = save_parameter(&conn, "pH", "7.6").unwrap();
        assert_eq!(saved.value, "7.6");
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM parameters WHERE name = 'pH'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1, "overwrite must not duplicate the row");
    }

    #[test]
    fn creates_a_new_parameter() {
        let conn = db::test_connection();
        let saved = save_parameter(&conn, "Cabal", "12.5").unwrap();
        assert_eq!(saved.name, "Cabal");
        assert_eq!(saved.value, "12.5");
    }

    #[test]
    fn rejects_a_blank_name() {
        let conn = db::test_connection();
        assert!(matches!(
            save_parameter(&conn, "  ", "1"),
            Err(ServiceError::Validation(_))
        ));
    }
}
