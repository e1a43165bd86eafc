//! Sample ingestion: `POST /api/samples`.
//!
//! A submission needs a parseable ISO sampling date, a non-empty location
//! and at least one measurement. Anything less is a validation error; the
//! caller gets a 400 with the reason and nothing is persisted. Accepted
//! samples always start unvalidated.

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use common::model::sample::SampleSubmission;
use common::requests::SubmitResponse;
use log::info;
use rusqlite::Connection;

use crate::config::Config;
use crate::db;
use crate::error::{ServiceError, ServiceResult};

pub async fn process(
    config: web::Data<Config>,
    payload: web::Json<SampleSubmission>,
) -> ServiceResult<HttpResponse> {
    let conn = db::open(&config.db_path)?;
    let id = insert_sample(&conn, &payload)?;
    info!("sample {id} submitted for {}", payload.location);
    Ok(HttpResponse::Ok().json(SubmitResponse {
        id,
        validated: false,
    }))
}

/// Validates and persists a submission, returning the new id.
pub fn insert_sample(conn: &Connection, submission: &SampleSubmission) -> ServiceResult<i64> {
    validate_submission(submission)?;

    let m = &submission.measurements;
    conn.execute(
        "INSERT INTO samples (sampling_date, location, temperatura, clor_lliure, clor_total, \
         recompte_escherichia_coli, recompte_enterococ, \
         recompte_microorganismes_aerobis_22c, recompte_coliformes_totals, conductivitat_20c, \
         ph, terbolesa, color, olor, sabor, acid_monocloroacetic, acid_dicloroacetic, \
         acid_tricloroacetic, acid_monobromoacetic, acid_dibromoacetic, validated) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, \
         ?18, ?19, ?20, 0)",
        rusqlite::params![
            submission.sampling_date,
            submission.location.trim(),
            m.temperatura,
            m.clor_lliure,
            m.clor_total,
            m.recompte_escherichia_coli,
            m.recompte_enterococ,
            m.recompte_microorganismes_aerobis_22c,
            m.recompte_coliformes_totals,
            m.conductivitat_20c,
            m.ph,
            m.terbolesa,
            m.color,
            m.olor,
            m.sabor,
            m.acid_monocloroacetic,
            m.acid_dicloroacetic,
            m.acid_tricloroacetic,
            m.acid_monobromoacetic,
            m.acid_dibromoacetic,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn validate_submission(submission: &SampleSubmission) -> ServiceResult<()> {
    if NaiveDate::parse_from_str(&submission.sampling_date, "%Y-%m-%d").is_err() {
        return Err(ServiceError::Validation(
            "sampling_date must be a calendar date in YYYY-MM-DD format".to_string(),
        ));
    }
    if submission.location.trim().is_empty() {
        return Err(ServiceError::Validation(
            "location must not be empty".to_string(),
        ));
    }
    if submission.measurements.is_empty() {
        return Err(ServiceError::Validation(
            "at least one measurement field must be provided".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::sample::Measurements;

    fn submission(date: &str, location: &str, ph: Option<f64>) -> SampleSubmission {
        SampleSubmission {
            sampling_date: date.to_string(),
            location: location.to_string(),
            measurements: Measurements {
                ph,
                ..Default::default()
            },
        }
    }

    #[test]
    fn accepts_a_single_measurement() {
        let conn = db::test_connection();
        let id = insert_sample(&conn, &submission("2024-01-01", "Font Vella", Some(7.0)))
            .expect("valid submission");
        assert_eq!(id, 1);
        let validated: bool = conn
            .query_row("SELECT validated FROM samples WHERE id = ?1", [id], |row| {
                row.get(0)
            })
            .unwrap();
        assert!(!validated, "new samples start unvalidated");
    }

    #[test]
    fn rejects_submission_without_measurements() {
        let conn = db::test_connection();
        let err = insert_sample(&conn, &submission("2024-01-01", "Font Vella", None))
            .expect_err("no measurements must fail");
        assert!(matches!(err, ServiceError::Validation(_)));
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM samples", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0, "nothing persisted on validation failure");
    }

    #[test]
    fn rejects_blank_location() {
        let conn = db::test_connection();
        let err = insert_sample(&conn, &submission("2024-01-01", "   ", Some(7.0)))
            .expect_err("blank location must fail");
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_date() {
        let conn = db::test_connection();
        for bad in ["01/01/2024", "2024-13-01", "yesterday", ""] {
            let err = insert_sample(&conn, &submission(bad, "Font Vella", Some(7.0)))
                .expect_err("bad date must fail");
            assert!(matches!(err, ServiceError::Validation(_)), "date: {bad}");
        }
    }
}
