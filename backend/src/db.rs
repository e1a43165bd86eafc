//! SQLite access shared by the services.
//!
//! Connections are opened per operation; the store itself is the only
//! serialization point the design needs. Schema creation is idempotent and
//! runs once at startup; the same `init_schema` is applied to in-memory
//! connections in tests so service logic is always exercised against the
//! real schema.

use common::model::sample::{Measurements, Sample};
use rusqlite::{Connection, Row};

use crate::error::ServiceResult;

/// Column list matching [`row_to_sample`]'s positional reads.
pub const SAMPLE_COLUMNS: &str = "id, sampling_date, location, temperatura, clor_lliure, \
     clor_total, recompte_escherichia_coli, recompte_enterococ, \
     recompte_microorganismes_aerobis_22c, recompte_coliformes_totals, conductivitat_20c, ph, \
     terbolesa, color, olor, sabor, acid_monocloroacetic, acid_dicloroacetic, \
     acid_tricloroacetic, acid_monobromoacetic, acid_dibromoacetic, validated, created_at, \
     updated_at";

pub fn open(path: &str) -> ServiceResult<Connection> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    Ok(conn)
}

/// Creates the application tables if needed and seeds the parameters table
/// on first run.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS samples (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            sampling_date TEXT NOT NULL,
            location TEXT NOT NULL,
            temperatura REAL,
            clor_lliure REAL,
            clor_total REAL,
            recompte_escherichia_coli REAL,
            recompte_enterococ REAL,
            recompte_microorganismes_aerobis_22c REAL,
            recompte_coliformes_totals REAL,
            conductivitat_20c REAL,
            ph REAL,
            terbolesa REAL,
            color REAL,
            olor REAL,
            sabor REAL,
            acid_monocloroacetic REAL,
            acid_dicloroacetic REAL,
            acid_tricloroacetic REAL,
            acid_monobromoacetic REAL,
            acid_dibromoacetic REAL,
            validated INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        CREATE INDEX IF NOT EXISTS idx_samples_validated ON samples(validated);
        CREATE INDEX IF NOT EXISTS idx_samples_sampling_date ON samples(sampling_date);
        CREATE TABLE IF NOT EXISTS parameters (
            name TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        CREATE TABLE IF NOT EXISTS visits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            page TEXT NOT NULL,
            user_agent TEXT NOT NULL DEFAULT '',
            ip_address TEXT NOT NULL DEFAULT '',
            timestamp TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    // Seed the current-readings parameters only on a fresh database.
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM parameters", [], |row| row.get(0))?;
    if count == 0 {
        conn.execute_batch(
            "INSERT INTO parameters (name, value) VALUES ('pH', '7.0');
             INSERT INTO parameters (name, value) VALUES ('Temperatura', '25.0');",
        )?;
    }
    Ok(())
}

/// Maps a row selected with [`SAMPLE_COLUMNS`] to the wire model.
pub fn row_to_sample(row: &Row) -> rusqlite::Result<Sample> {
    Ok(Sample {
        id: row.get(0)?,
        sampling_date: row.get(1)?,
        location: row.get(2)?,
        measurements: Measurements {
            temperatura: row.get(3)?,
            clor_lliure: row.get(4)?,
            clor_total: row.get(5)?,
            recompte_escherichia_coli: row.get(6)?,
            recompte_enterococ: row.get(7)?,
            recompte_microorganismes_aerobis_22c: row.get(8)?,
            recompte_coliformes_totals: row.get(9)?,
            conductivitat_20c: row.get(10)?,
            ph: row.get(11)?,
            terbolesa: row.get(12)?,
            color: row.get(13)?,
            olor: row.get(14)?,
            sabor: row.get(15)?,
            acid_monocloroacetic: row.get(16)?,
            acid_dicloroacetic: row.get(17)?,
            acid_tricloroacetic: row.get(18)?,
            acid_monobromoacetic: row.get(19)?,
            acid_dibromoacetic: row.get(20)?,
        },
        validated: row.get(21)?,
        created_at: row.get(22)?,
        updated_at: row.get(23)?,
    })
}

#[cfg(test)]
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().expect("in-memory database");
    init_schema(&conn).expect("schema");
    conn
}
