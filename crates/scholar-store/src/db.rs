//! Database connection management
//!
//! Provides utilities for opening and managing SQLite connections. The store
//! never pools: callers open a connection, use it, and close it.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(|e| from_rusqlite("connection", "open", e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| from_rusqlite("connection", "open_in_memory", e))
}

/// Configure a connection with the settings the schema relies on
///
/// Foreign keys are off by default in SQLite and must be switched on per
/// connection for the schema's referential integrity to hold.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|e| from_rusqlite("connection", "configure", e))?;

    // WAL for better read concurrency on file-backed databases
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(|e| from_rusqlite("connection", "configure", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_enables_foreign_keys() {
        let conn = open_in_memory().unwrap();
        configure(&conn).unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
