//! Server configuration, gathered once at startup from the environment.
//!
//! A `.env` file is honored in development (loaded in `main` via `dotenv`);
//! every variable has a sensible default except the admin token, which stays
//! unset unless configured. Admin endpoints then answer 401 across the board.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path to the SQLite database file.
    pub db_path: String,
    /// Bearer token granting admin access. `None` disables admin endpoints.
    pub admin_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("FONTCLARA_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("FONTCLARA_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let db_path =
            env::var("FONTCLARA_DB").unwrap_or_else(|_| "fontclara.sqlite".to_string());
        let admin_token = env::var("FONTCLARA_ADMIN_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        Self {
            host,
            port,
            db_path,
            admin_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        // Only checks the defaults that no test environment overrides.
        let config = Config::from_env();
        assert!(!config.db_path.is_empty());
        assert!(config.port > 0);
    }
}
