//! Error handling for scholar-store
//!
//! Wraps the scholar-core error facility with store-specific constructors.
//! Every rusqlite failure crossing the repository boundary goes through
//! [`from_rusqlite`], which classifies constraint failures and tags the
//! error with the entity (table) and operation involved.

use scholar_core::errors::{ScError, ScErrorKind};

/// Result type alias using ScError
pub type Result<T> = scholar_core::errors::Result<T>;

/// Create a database error from rusqlite::Error
///
/// SQLite constraint failures (CHECK, UNIQUE, NOT NULL, FOREIGN KEY) map to
/// `ConstraintViolation`; everything else maps to `Persistence`.
pub fn from_rusqlite(entity: &str, op: &str, err: rusqlite::Error) -> ScError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            ScErrorKind::ConstraintViolation
        }
        _ => ScErrorKind::Persistence,
    };
    ScError::new(kind)
        .with_entity(entity)
        .with_op(op)
        .with_message(err.to_string())
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ScError {
    ScError::new(ScErrorKind::Migration)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ScError {
    ScError::new(ScErrorKind::Migration)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a migration-history gap error
pub fn migration_gap(migration_id: &str) -> ScError {
    ScError::new(ScErrorKind::Migration)
        .with_op("migration")
        .with_message(format!(
            "Migration history has a gap: {} is pending but a later migration is already applied",
            migration_id
        ))
}

/// Create an ambiguous single-record fetch error
pub fn ambiguous_match(entity: &str, op: &str) -> ScError {
    ScError::new(ScErrorKind::AmbiguousMatch)
        .with_entity(entity)
        .with_op(op)
        .with_message("more than one row matched a single-record fetch")
}

/// Create an invalid-input error
pub fn invalid_input(entity: &str, op: &str, reason: &str) -> ScError {
    ScError::new(ScErrorKind::InvalidInput)
        .with_entity(entity)
        .with_op(op)
        .with_message(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_classification() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t (v INTEGER CHECK (v > 0))", [])
            .unwrap();
        let err = conn
            .execute("INSERT INTO t (v) VALUES (-1)", [])
            .unwrap_err();
        let wrapped = from_rusqlite("t", "add", err);
        assert_eq!(wrapped.kind(), ScErrorKind::ConstraintViolation);
        assert_eq!(wrapped.entity(), Some("t"));
        assert_eq!(wrapped.op(), Some("add"));
    }

    #[test]
    fn test_non_constraint_classification() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err = conn.execute("INSERT INTO missing VALUES (1)", []).unwrap_err();
        let wrapped = from_rusqlite("missing", "add", err);
        assert_eq!(wrapped.kind(), ScErrorKind::Persistence);
    }
}
