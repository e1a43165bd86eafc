use actix_web::{web, HttpRequest, HttpResponse};
use common::model::stats::{AdminStatistics, DailyVisits, LocationCount, RecentSample};
use rusqlite::Connection;

use crate::auth::AdminPolicy;
use crate::config::Config;
use crate::db;
use crate::error::ServiceResult;

pub async fn process(
    req: HttpRequest,
    config: web::Data<Config>,
    policy: web::Data<AdminPolicy>,
) -> ServiceResult<HttpResponse> {
    policy.authorize(&req)?;
    let conn = db::open(&config.db_path)?;
    Ok(HttpResponse::Ok().json(gather_statistics(&conn)?))
}

/// Computes every dashboard aggregate in one pass over the store.
pub fn gather_statistics(conn: &Connection) -> ServiceResult<AdminStatistics> {
    let total_samples: i64 =
        conn.query_row("SELECT COUNT(*) FROM samples", [], |row| row.get(0))?;
    let validated_samples: i64 = conn.query_row(
        "SELECT COUNT(*) FROM samples WHERE validated = 1",
        [],
        |row| row.get(0),
    )?;

    let mut stmt = conn.prepare(
        "SELECT location, COUNT(*) FROM samples GROUP BY location ORDER BY COUNT(*) DESC",
    )?;
    let samples_by_location = stmt
        .query_map([], |row| {
            Ok(LocationCount {
                location: row.get(0)?,
                count: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut stmt = conn.prepare(
        "SELECT id, sampling_date, location, validated, created_at FROM samples \
         ORDER BY created_at DESC, id DESC LIMIT 5",
    )?;
    let recent_samples = stmt
        .query_map([], |row| {
            Ok(RecentSample {
                id: row.get(0)?,
                sampling_date: row.get(1)?,
                location: row.get(2)?,
                validated: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut stmt = conn.prepare(
        "SELECT date(timestamp), COUNT(*) FROM visits \
         WHERE timestamp >= datetime('now', '-7 days') \
         GROUP BY date(timestamp) ORDER BY date(timestamp)",
    )?;
    let visits_last_7_days = stmt
        .query_map([], |row| {
            Ok(DailyVisits {
                date: row.get(0)?,
                visits: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let total_visits_30_days: i64 = conn.query_row(
        "SELECT COUNT(*) FROM visits WHERE timestamp >= datetime('now', '-30 days')",
        [],
        |row| row.get(0),
    )?;

    Ok(AdminStatistics {
        total_samples,
        validated_samples,
        pending_samples: total_samples - validated_samples,
        samples_by_location,
        recent_samples,
        visits_last_7_days,
        total_visits_30_days,
    })
}
