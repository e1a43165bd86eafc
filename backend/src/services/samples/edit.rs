//! Allow-listed partial edits: `PUT /api/samples/{id}`.
//!
//! The payload is the explicit `SampleUpdate` struct. Unknown keys already
//! failed at deserialization, so by the time this module runs the only
//! remaining failure modes are an empty update and a missing sample. The
//! UPDATE statement is built dynamically from the fields actually present.

use actix_web::{web, HttpRequest, HttpResponse};
use common::model::sample::{Sample, SampleUpdate, UpdateValue};
use log::info;
use rusqlite::{Connection, ToSql};

use crate::auth::AdminPolicy;
use crate::config::Config;
use crate::db;
use crate::error::{ServiceError, ServiceResult};
use crate::services::samples::get::get_by_id;

pub async fn process(
    req: HttpRequest,
    config: web::Data<Config>,
    policy: web::Data<AdminPolicy>,
    id: web::Path<i64>,
    payload: web::Json<SampleUpdate>,
) -> ServiceResult<HttpResponse> {
    policy.authorize(&req)?;
    let conn = db::open(&config.db_path)?;
    let updated = update_sample(&conn, *id, &payload)?;
    info!("sample {} edited", updated.id);
    Ok(HttpResponse::Ok().json(updated))
}

/// Applies the set fields of `update` to the sample and returns the updated
/// record.
pub fn update_sample(
    conn: &Connection,
    id: i64,
    update: &SampleUpdate,
) -> ServiceResult<Sample> {
    let fields = update.fields();
    if fields.is_empty() {
        return Err(ServiceError::Validation(
            "no fields to update".to_string(),
        ));
    }

    let mut clauses: Vec<String> = fields
        .iter()
        .enumerate()
        .map(|(i, (key, _))| format!("{key} = ?{}", i + 1))
        .collect();
    clauses.push("updated_at = datetime('now')".to_string());
    let sql = format!(
        "UPDATE samples SET {} WHERE id = ?{}",
        clauses.join(", "),
        fields.len() + 1
    );

    let owned: Vec<Box<dyn ToSql>> = fields
        .iter()
        .map(|(_, value)| -> Box<dyn ToSql> {
            match value {
                UpdateValue::Text(s) => Box::new(s.clone()),
                UpdateValue::Number(n) => Box::new(*n),
                UpdateValue::Flag(b) => Box::new(*b),
            }
        })
        .collect();
    let mut params: Vec<&dyn ToSql> = owned.iter().map(|b| b.as_ref()).collect();
    params.push(&id);

    let changed = conn.execute(&sql, &params[..])?;
    if changed == 0 {
        return Err(ServiceError::NotFound(id));
    }
    get_by_id(conn, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::samples::submit::insert_sample;
    use common::model::sample::{Measurements, SampleSubmission};

    fn seed(conn: &Connection) -> i64 {
        insert_sample(
            conn,
            &SampleSubmission {
                sampling_date: "2024-01-01".to_string(),
                location: "Font Vella".to_string(),
                measurements: Measurements {
                    ph: Some(7.0),
                    ..Default::default()
                },
            },
        )
        .unwrap()
    }

    #[test]
    fn applies_only_the_set_fields() {
        let conn = db::test_connection();
        let id = seed(&conn);
        let updated = update_sample(
            &conn,
            id,
            &SampleUpdate {
                location: Some("Dipòsit Nou".to_string()),
                terbolesa: Some(1.2),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.location, "Dipòsit Nou");
        assert_eq!(updated.measurements.terbolesa, Some(1.2));
        // Untouched fields survive.
        assert_eq!(updated.measurements.ph, Some(7.0));
        assert_eq!(updated.sampling_date, "2024-01-01");
    }

    #[test]
    fn can_flip_the_validation_flag() {
        let conn = db::test_connection();
        let id = seed(&conn);
        let updated = update_sample(
            &conn,
            id,
            &SampleUpdate {
                validated: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(updated.validated);
    }

    #[test]
    fn empty_update_is_a_validation_error() {
        let conn = db::test_connection();
        let id = seed(&conn);
        assert!(matches!(
            update_sample(&conn, id, &SampleUpdate::default()),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn missing_sample_is_not_found() {
        let conn = db::test_connection();
        let update = SampleUpdate {
            ph: Some(8.0),
            ..Default::default()
        };
        assert!(matches!(
            update_sample(&conn, 123, &update),
            Err(ServiceError::NotFound(123))
        ));
    }

    #[test]
    fn edit_touches_updated_at_but_not_created_at() {
        let conn = db::test_connection();
        let id = seed(&conn);
        conn.execute(
            "UPDATE samples SET created_at = '2020-01-01 00:00:00', \
             updated_at = '2020-01-01 00:00:00' WHERE id = ?1",
            [id],
        )
        .unwrap();
        let updated = update_sample(
            &conn,
            id,
            &SampleUpdate {
                ph: Some(7.5),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.created_at, "2020-01-01 00:00:00");
        assert_ne!(updated.updated_at, "2020-01-01 00:00:00");
    }
}
