//! CSV download of the public listing: `GET /api/samples/export.csv`.
//!
//! Same visibility rule and ordering as `GET /api/samples` (validated rows
//! only), rendered with the `csv` crate and served as an attachment.

use actix_web::{web, HttpResponse};
use common::model::sample::Measurements;
use rusqlite::Connection;

use crate::config::Config;
use crate::db;
use crate::error::{ServiceError, ServiceResult};
use crate::services::samples::list::list_public;

pub async fn process(config: web::Data<Config>) -> ServiceResult<HttpResponse> {
    let conn = db::open(&config.db_path)?;
    let body = export_csv(&conn)?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"samples.csv\"",
        ))
        .body(body))
}

/// Renders the public listing as CSV: identity and date columns first, then
/// the measurements in canonical order.
pub fn export_csv(conn: &Connection) -> ServiceResult<String> {
    let samples = list_public(conn)?;
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["id", "sampling_date", "location"];
    header.extend(Measurements::KEYS);
    header.push("created_at");
    writer.write_record(&header).map_err(ServiceError::from)?;

    for sample in &samples {
        let mut record = vec![
            sample.id.to_string(),
            sample.sampling_date.clone(),
            sample.location.clone(),
        ];
        for (_, value) in sample.measurements.iter() {
            record.push(value.map(|v| v.to_string()).unwrap_or_default());
        }
        record.push(sample.created_at.clone());
        writer.write_record(&record).map_err(ServiceError::from)?;
    }

    // The writer targets a Vec<u8>, which only emits valid UTF-8 here.
    let bytes = writer
        .into_inner()
        .map_err(|e| ServiceError::from(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::samples::submit::insert_sample;
    use crate::services::samples::validate::set_validated;
    use common::model::sample::SampleSubmission;

    #[test]
    fn export_contains_only_validated_samples() {
        let conn = db::test_connection();
        let visible = insert_sample(
            &conn,
            &SampleSubmission {
                sampling_date: "2024-01-01".to_string(),
                location: "Font Vella".to_string(),
                measurements: Measurements {
                    ph: Some(7.0),
                    ..Default::default()
                },
            },
        )
        .unwrap();
        insert_sample(
            &conn,
            &SampleSubmission {
                sampling_date: "2024-01-02".to_string(),
                location: "Dipòsit".to_string(),
                measurements: Measurements {
                    ph: Some(8.0),
                    ..Default::default()
                },
            },
        )
        .unwrap();
        set_validated(&conn, visible, true).unwrap();

        let csv = export_csv(&conn).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2, "header plus one validated row");
        assert!(lines[0].starts_with("id,sampling_date,location,temperatura"));
        assert!(lines[1].contains("Font Vella"));
        assert!(!csv.contains("Dipòsit"));
    }

    #[test]
    fn empty_store_exports_just_the_header() {
        let conn = db::test_connection();
        let csv = export_csv(&conn).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
