// Integration tests for the migration framework: forward application,
// idempotency, tamper/gap detection, and full backward replay.

use rusqlite::Connection;
use scholar_core::errors::ScErrorKind;
use scholar_store::{db, migrations};

fn setup_test_db() -> Connection {
    let conn = db::open_in_memory().expect("Failed to create in-memory database");
    db::configure(&conn).expect("Failed to configure connection");
    conn
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: Migrations are applied
    let result = migrations::apply_migrations(&mut conn);

    // Then: All migrations succeed
    assert!(
        result.is_ok(),
        "Migrations should succeed: {:?}",
        result.err()
    );

    // And: Every domain table plus schema_version exists
    let tables = get_table_names(&conn);
    let expected_tables = vec![
        "schema_version",
        "users",
        "roles",
        "roles_users",
        "degrees",
        "academic_periods",
        "teachers",
        "students",
        "courses",
        "course_enrollments",
        "units",
        "topics",
        "platforms",
        "evaluation_components",
        "tasks",
        "task_submissions",
        "grades",
        "attendance",
    ];
    assert_eq!(tables.len(), expected_tables.len());
    for expected_table in &expected_tables {
        assert!(
            tables.contains(&expected_table.to_string()),
            "Missing table: {}",
            expected_table
        );
    }
}

#[test]
fn test_migration_idempotency() {
    // Given: A database with migrations already applied
    let mut conn = setup_test_db();
    migrations::apply_migrations(&mut conn).unwrap();

    // When: Migrations are applied again
    let result = migrations::apply_migrations(&mut conn);

    // Then: The second run is a no-op success
    assert!(result.is_ok());
    let version_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version_count, 3, "Should have exactly 3 migrations applied");
}

#[test]
fn test_checksums_are_recorded() {
    let mut conn = setup_test_db();
    migrations::apply_migrations(&mut conn).unwrap();

    let missing: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM schema_version WHERE checksum IS NULL OR LENGTH(checksum) <> 64",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(missing, 0, "Every migration should record a SHA256 checksum");
}

#[test]
fn test_tampered_checksum_is_rejected() {
    // Given: An applied history whose recorded checksum no longer matches
    let mut conn = setup_test_db();
    migrations::apply_migrations(&mut conn).unwrap();
    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '001_identity'",
        [],
    )
    .unwrap();

    // When: Migrations are applied again
    let err = migrations::apply_migrations(&mut conn).unwrap_err();

    // Then: The run fails with a migration error
    assert_eq!(err.kind(), ScErrorKind::Migration);
}

#[test]
fn test_history_gap_is_rejected() {
    // Given: A history where a middle migration is missing
    let mut conn = setup_test_db();
    migrations::apply_migrations(&mut conn).unwrap();
    conn.execute(
        "DELETE FROM schema_version WHERE migration_id = '002_academics'",
        [],
    )
    .unwrap();

    // When: Migrations are applied again
    let err = migrations::apply_migrations(&mut conn).unwrap_err();

    // Then: The gap is detected before anything is re-run
    assert_eq!(err.kind(), ScErrorKind::Migration);
}

#[test]
fn test_full_replay_returns_to_empty_schema() {
    // Given: A fully migrated database
    let mut conn = setup_test_db();
    migrations::apply_migrations(&mut conn).unwrap();

    // When: Every migration is reverted, last first
    migrations::revert_migrations(&mut conn).unwrap();

    // Then: Only the empty version ledger remains
    let tables = get_table_names(&conn);
    assert_eq!(tables, vec!["schema_version".to_string()]);
    let version_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version_count, 0);

    // And: The forward path is replayable from scratch
    migrations::apply_migrations(&mut conn).unwrap();
    assert_eq!(
        migrations::applied_migrations(&conn).unwrap(),
        vec!["001_identity", "002_academics", "003_assessment"]
    );
}

#[test]
fn test_migrations_on_disk_database() {
    // Given: A file-backed database
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scholar-migrations.db");
    let mut conn = db::open(&path).unwrap();
    db::configure(&conn).unwrap();

    // When: Migrations are applied and the database is reopened
    migrations::apply_migrations(&mut conn).unwrap();
    drop(conn);
    let conn = db::open(&path).unwrap();

    // Then: The applied history survives the reopen
    assert_eq!(migrations::applied_migrations(&conn).unwrap().len(), 3);
}
