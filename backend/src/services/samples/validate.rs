//! Validation transitions, the moderation half of the sample lifecycle.
//!
//! `set_validated` targets one sample and is idempotent: re-validating an
//! already validated sample succeeds. The bulk variant is deliberately
//! best-effort: ids that don't exist are skipped, and the response's
//! `updated_count` is the only signal of partial application.

use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::{BulkValidateRequest, BulkValidateResponse};
use log::info;
use rusqlite::{Connection, ToSql};

use crate::auth::AdminPolicy;
use crate::config::Config;
use crate::db;
use crate::error::{ServiceError, ServiceResult};

pub async fn process_validate(
    req: HttpRequest,
    config: web::Data<Config>,
    policy: web::Data<AdminPolicy>,
    id: web::Path<i64>,
) -> ServiceResult<HttpResponse> {
    set_validated_response(req, config, policy, *id, true)
}

pub async fn process_invalidate(
    req: HttpRequest,
    config: web::Data<Config>,
    policy: web::Data<AdminPolicy>,
    id: web::Path<i64>,
) -> ServiceResult<HttpResponse> {
    set_validated_response(req, config, policy, *id, false)
}

fn set_validated_response(
    req: HttpRequest,
    config: web::Data<Config>,
    policy: web::Data<AdminPolicy>,
    id: i64,
    validated: bool,
) -> ServiceResult<HttpResponse> {
    policy.authorize(&req)?;
    let conn = db::open(&config.db_path)?;
    set_validated(&conn, id, validated)?;
    info!("sample {id} validated={validated}");
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "id": id,
        "validated": validated,
    })))
}

pub async fn process_bulk(
    req: HttpRequest,
    config: web::Data<Config>,
    policy: web::Data<AdminPolicy>,
    payload: web::Json<BulkValidateRequest>,
) -> ServiceResult<HttpResponse> {
    policy.authorize(&req)?;
    let conn = db::open(&config.db_path)?;
    let updated_count = bulk_set_validated(&conn, &payload.sample_ids, payload.validated)?;
    info!(
        "bulk validation: {updated_count}/{} samples set to {}",
        payload.sample_ids.len(),
        payload.validated
    );
    Ok(HttpResponse::Ok().json(BulkValidateResponse { updated_count }))
}

/// Sets the validation flag on one sample. `NotFound` when the id does not
/// exist; setting the current value again is a plain success.
pub fn set_validated(conn: &Connection, id: i64, validated: bool) -> ServiceResult<()> {
    let changed = conn.execute(
        "UPDATE samples SET validated = ?1, updated_at = datetime('now') WHERE id = ?2",
        rusqlite::params![validated, id],
    )?;
    if changed == 0 {
        return Err(ServiceError::NotFound(id));
    }
    Ok(())
}

/// Applies the flag to every listed id that exists and returns the number of
/// rows actually updated. An empty id list is a validation error; missing
/// ids are not.
pub fn bulk_set_validated(
    conn: &Connection,
    ids: &[i64],
    validated: bool,
) -> ServiceResult<usize> {
    if ids.is_empty() {
        return Err(ServiceError::Validation(
            "no sample ids provided".to_string(),
        ));
    }
    let placeholders = ids
        .iter()
        .enumerate()
        .map(|(i, _)| format!("?{}", i + 2))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "UPDATE samples SET validated = ?1, updated_at = datetime('now') \
         WHERE id IN ({placeholders})"
    );
    let mut params: Vec<&dyn ToSql> = vec![&validated];
    params.extend(ids.iter().map(|id| id as &dyn ToSql));
    let changed = conn.execute(&sql, &params[..])?;
    Ok(changed)
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

    fn validated_flag(conn: &Connection, id: i64) -> bool {
        conn.query_row("SELECT validated FROM samples WHERE id = ?1", [id], |row| {
            row.get(0)
        })
        .unwrap()
    }

    #[test]
    fn validate_then_invalidate() {
        let conn = db::test_connection();
        let id = seed(&conn);
        set_validated(&conn, id, true).unwrap();
        assert!(validated_flag(&conn, id));
        set_validated(&conn, id, false).unwrap();
        assert!(!validated_flag(&conn, id));
    }

    #[test]
    fn setting_the_same_value_twice_is_a_success() {
        let conn = db::test_connection();
        let id = seed(&conn);
        set_validated(&conn, id, true).unwrap();
        set_validated(&conn, id, true).expect("idempotent transition");
        assert!(validated_flag(&conn, id));
    }

    #[test]
    fn missing_sample_is_not_found() {
        let conn = db::test_connection();
        assert!(matches!(
            set_validated(&conn, 42, true),
            Err(ServiceError::NotFound(42))
        ));
    }

    #[test]
    fn bulk_skips_missing_ids_and_reports_the_count() {
        let conn = db::test_connection();
        let existing = seed(&conn);
        let updated = bulk_set_validated(&conn, &[existing, 999], true).unwrap();
        assert_eq!(updated, 1, "only the existing row counts");
        assert!(validated_flag(&conn, existing));
    }

    #[test]
    fn bulk_rejects_an_empty_id_list() {
        let conn = db::test_connection();
        assert!(matches!(
            bulk_set_validated(&conn, &[], true),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn bulk_updates_every_listed_sample() {
        let conn = db::test_connection();
        let ids: Vec<i64> = (0..3).map(|_| seed(&conn)).collect();
        let updated = bulk_set_validated(&conn, &ids, true).unwrap();
        assert_eq!(updated, 3);
        for id in ids {
            assert!(validated_flag(&conn, id));
        }
    }
}
