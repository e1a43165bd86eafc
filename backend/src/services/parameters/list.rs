use actix_web::{web, HttpResponse};
use common::model::parameter::Parameter;
use rusqlite::Connection;

use crate::config::Config;
use crate::db;
use crate::error::ServiceResult;

pub async fn process(config: web::Data<Config>) -> ServiceResult<HttpResponse> {
    let conn = db::open(&config.db_path)?;
    Ok(HttpResponse::Ok().json(list_parameters(&conn)?))
}

pub fn list_parameters(conn: &Connection) -> ServiceResult<Vec<Parameter>> {
    let mut stmt = conn.prepare("SELECT name, value, updated_at FROM parameters ORDER BY name")?;
    let parameters = stmt
        .query_map([], |row| {
            Ok(Parameter {
                name: row.get(0)?,
                value: row.get(1)?,
                updated_at: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_the_seeded_parameters() {
        let conn = db::test_connection();
        let parameters = list_parameters(&conn).unwrap();
        let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Temperatura", "pH"]);
    }
}
