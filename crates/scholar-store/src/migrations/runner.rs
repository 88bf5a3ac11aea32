//! Migration runner
//!
//! Applies migrations with checksums, gap detection, and idempotency, and
//! reverts them in reverse order for a full schema replay.

use std::collections::HashSet;

use rusqlite::Connection;

use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, migration_gap, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::get_migrations;

/// Apply all pending migrations to the database
///
/// Creates the `schema_version` table on first use. Each migration runs in
/// its own transaction and is recorded with its checksum; already-applied
/// migrations are verified against the recorded checksum and skipped. A
/// pending migration ordered before an applied one is a history gap and
/// fails the whole run.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    let applied: HashSet<String> = applied_migrations(conn)?.into_iter().collect();
    let migrations = get_migrations();

    // Gap detection: the applied set must be a prefix of the embedded order
    let mut seen_pending = None;
    for migration in &migrations {
        if applied.contains(migration.id) {
            if let Some(pending_id) = seen_pending {
                return Err(migration_gap(pending_id));
            }
        } else {
            seen_pending.get_or_insert(migration.id);
        }
    }

    for migration in migrations {
        apply_migration(conn, migration.id, migration.up_sql)?;
    }

    Ok(())
}

/// Revert every applied migration, last first
///
/// Runs each backward script in its own transaction and removes the version
/// row, returning the schema to its initial empty state (only
/// `schema_version` itself remains, with no rows).
pub fn revert_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    let applied: HashSet<String> = applied_migrations(conn)?.into_iter().collect();

    for migration in get_migrations().into_iter().rev() {
        if !applied.contains(migration.id) {
            continue;
        }
        revert_migration(conn, migration.id, migration.down_sql)?;
    }

    Ok(())
}

/// List applied migration ids in application order
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let table_exists: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'",
            [],
            |_| Ok(true),
        )
        .unwrap_or(false);
    if !table_exists {
        return Ok(Vec::new());
    }

    let mut stmt = conn
        .prepare("SELECT migration_id FROM schema_version ORDER BY id")
        .map_err(|e| from_rusqlite("schema_version", "applied_migrations", e))?;
    let ids = stmt
        .query_map([], |row| row.get(0))
        .map_err(|e| from_rusqlite("schema_version", "applied_migrations", e))?
        .collect::<std::result::Result<Vec<String>, _>>()
        .map_err(|e| from_rusqlite("schema_version", "applied_migrations", e))?;
    Ok(ids)
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(|e| from_rusqlite("schema_version", "create", e))?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    let checksum = compute_checksum(sql);

    let recorded: Option<Option<String>> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            [migration_id],
            |row| row.get(0),
        )
        .map(Some)
        .unwrap_or(None);

    if let Some(recorded) = recorded {
        // Idempotent: already applied, but the SQL must not have changed
        if let Some(recorded) = recorded {
            if recorded != checksum {
                return Err(checksum_mismatch(migration_id, &recorded, &checksum));
            }
        }
        return Ok(());
    }

    let tx = conn
        .transaction()
        .map_err(|e| from_rusqlite("schema_version", "transaction", e))?;

    tx.execute_batch(sql)
        .map_err(|e| migration_error(migration_id, &e.to_string()))?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
        rusqlite::params![migration_id, now, checksum],
    )
    .map_err(|e| from_rusqlite("schema_version", "record", e))?;

    tx.commit()
        .map_err(|e| from_rusqlite("schema_version", "commit", e))?;

    tracing::info!(migration_id, "migration applied");
    Ok(())
}

/// Revert a single applied migration
fn revert_migration(conn: &mut Connection, migration_id: &str, down_sql: &str) -> Result<()> {
    let tx = conn
        .transaction()
        .map_err(|e| from_rusqlite("schema_version", "transaction", e))?;

    tx.execute_batch(down_sql)
        .map_err(|e| migration_error(migration_id, &e.to_string()))?;

    tx.execute(
        "DELETE FROM schema_version WHERE migration_id = ?",
        [migration_id],
    )
    .map_err(|e| from_rusqlite("schema_version", "unrecord", e))?;

    tx.commit()
        .map_err(|e| from_rusqlite("schema_version", "commit", e))?;

    tracing::info!(migration_id, "migration reverted");
    Ok(())
}
