//! Environment-driven database configuration
//!
//! Settings come from the process environment, with `.env` files supported
//! for local development.

use std::path::PathBuf;

use rusqlite::Connection;

use crate::db;
use crate::errors::Result;

/// Environment variable naming the database file
pub const ENV_DB_PATH: &str = "SCHOLAR_DB_PATH";

/// Fallback database file used when the environment is silent
pub const DEFAULT_DB_PATH: &str = "scholar.db";

/// Database settings resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Path of the SQLite database file
    pub path: PathBuf,
}

impl DbConfig {
    /// Resolve configuration from the environment
    ///
    /// Loads a `.env` file if one is present, then reads `SCHOLAR_DB_PATH`,
    /// falling back to `scholar.db` in the working directory.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let path = std::env::var(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));
        Self { path }
    }

    /// Open and configure a connection to the configured database
    pub fn open(&self) -> Result<Connection> {
        tracing::debug!(path = %self.path.display(), "opening database");
        let conn = db::open(&self.path)?;
        db::configure(&conn)?;
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        // Only meaningful when the variable is unset in the test environment
        if std::env::var(ENV_DB_PATH).is_err() {
            let config = DbConfig::from_env();
            assert_eq!(config.path, PathBuf::from(DEFAULT_DB_PATH));
        }
    }

    #[test]
    fn test_open_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = DbConfig {
            path: dir.path().join("scholar-test.db"),
        };
        let conn = config.open().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
