//! Sample listings and the pending counter.
//!
//! Public and admin views differ in two ways: visibility (the public listing
//! only ever contains validated samples) and ordering (the admin listing
//! floats unvalidated rows to the top so open review work is immediately
//! visible, then falls back to the same newest-first date order).

use actix_web::{web, HttpRequest, HttpResponse};
use common::model::sample::Sample;
use common::requests::PendingCountResponse;
use rusqlite::Connection;

use crate::auth::AdminPolicy;
use crate::config::Config;
use crate::db::{self, row_to_sample, SAMPLE_COLUMNS};
use crate::error::ServiceResult;

pub async fn process_public(config: web::Data<Config>) -> ServiceResult<HttpResponse> {
    let conn = db::open(&config.db_path)?;
    Ok(HttpResponse::Ok().json(list_public(&conn)?))
}

pub async fn process_admin(
    req: HttpRequest,
    config: web::Data<Config>,
    policy: web::Data<AdminPolicy>,
) -> ServiceResult<HttpResponse> {
    policy.authorize(&req)?;
    let conn = db::open(&config.db_path)?;
    Ok(HttpResponse::Ok().json(list_admin(&conn)?))
}

pub async fn process_pending(config: web::Data<Config>) -> ServiceResult<HttpResponse> {
    let conn = db::open(&config.db_path)?;
    Ok(HttpResponse::Ok().json(PendingCountResponse {
        pending_count: count_pending(&conn)?,
    }))
}

/// Validated samples only, newest sampling date first, ties broken by
/// submission time.
pub fn list_public(conn: &Connection) -> ServiceResult<Vec<Sample>> {
    query_samples(
        conn,
        &format!(
            "SELECT {SAMPLE_COLUMNS} FROM samples WHERE validated = 1 \
             ORDER BY sampling_date DESC, created_at DESC"
        ),
    )
}

/// Every sample, pending review first, then the public ordering.
pub fn list_admin(conn: &Connection) -> ServiceResult<Vec<Sample>> {
    query_samples(
        conn,
        &format!(
            "SELECT {SAMPLE_COLUMNS} FROM samples \
             ORDER BY validated ASC, sampling_date DESC, created_at DESC"
        ),
    )
}

pub fn count_pending(conn: &Connection) -> ServiceResult<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM samples WHERE validated = 0",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

fn query_samples(conn: &Connection, sql: &str) -> ServiceResult<Vec<Sample>> {
    let mut stmt = conn.prepare(sql)?;
    let samples = stmt
        .query_map([], row_to_sample)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::samples::submit::insert_sample;
    use crate::services::samples::validate::set_validated;
    use common::model::sample::{Measurements, SampleSubmission};

    fn seed(conn: &Connection, date: &str, location: &str) -> i64 {
        insert_sample(
            conn,
            &SampleSubmission {
                sampling_date: date.to_string(),
                location: location.to_string(),
                measurements: Measurements {
                    ph: Some(7.0),
                    ..Default::default()
                },
            },
        )
        .unwrap()
    }

    #[test]
    fn public_listing_excludes_unvalidated_samples() {
        let conn = db::test_connection();
        let visible = seed(&conn, "2024-02-01", "Font Vella");
        let hidden = seed(&conn, "2024-03-01", "Dipòsit");
        set_validated(&conn, visible, true).unwrap();

        let public = list_public(&conn).unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].id, visible);

        let admin = list_admin(&conn).unwrap();
        assert_eq!(admin.len(), 2, "admin listing always includes everything");
        assert!(admin.iter().any(|s| s.id == hidden));
    }

    #[test]
    fn public_listing_orders_by_sampling_date_desc() {
        let conn = db::test_connection();
        for (date, loc) in [
            ("2024-01-15", "a"),
            ("2024-03-01", "b"),
            ("2024-02-10", "c"),
        ] {
            let id = seed(&conn, date, loc);
            set_validated(&conn, id, true).unwrap();
        }
        let dates: Vec<String> = list_public(&conn)
            .unwrap()
            .into_iter()
            .map(|s| s.sampling_date)
            .collect();
        assert_eq!(dates, ["2024-03-01", "2024-02-10", "2024-01-15"]);
    }

    #[test]
    fn equal_dates_break_ties_by_creation_time() {
        let conn = db::test_connection();
        let first = seed(&conn, "2024-01-01", "a");
        let second = seed(&conn, "2024-01-01", "b");
        // Same-second inserts: force distinct creation times.
        conn.execute(
            "UPDATE samples SET created_at = '2024-01-01 08:00:00' WHERE id = ?1",
            [first],
        )
        .unwrap();
        conn.execute(
            "UPDATE samples SET created_at = '2024-01-01 09:00:00' WHERE id = ?1",
            [second],
        )
        .unwrap();
        set_validated(&conn, first, true).unwrap();
        set_validated(&conn, second, true).unwrap();

        let ids: Vec<i64> = list_public(&conn).unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, [second, first], "later submission wins the tie");
    }

    #[test]
    fn admin_listing_floats_pending_samples_to_the_top() {
        let conn = db::test_connection();
        let validated = seed(&conn, "2024-03-01", "a");
        let pending = seed(&conn, "2024-01-01", "b");
        set_validated(&conn, validated, true).unwrap();

        let ids: Vec<i64> = list_admin(&conn).unwrap().into_iter().map(|s| s.id).collect();
        // The pending sample has the older date but still sorts first.
        assert_eq!(ids, [pending, validated]);
    }

    #[test]
    fn pending_count_tracks_unvalidated_rows() {
        let conn = db::test_connection();
        assert_eq!(count_pending(&conn).unwrap(), 0);
        let a = seed(&conn, "2024-01-01", "a");
        seed(&conn, "2024-01-02", "b");
        assert_eq!(count_pending(&conn).unwrap(), 2);
        set_validated(&conn, a, true).unwrap();
        assert_eq!(count_pending(&conn).unwrap(), 1);
    }
}
