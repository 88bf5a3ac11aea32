//! Generic repository over any schema-bound entity
//!
//! One reusable CRUD contract, parametrized by an [`Entity`] binding and a
//! live connection supplied by the caller. Every operation autocommits and
//! surfaces failures as `ScError`s tagged with the table and operation.

use std::marker::PhantomData;

use chrono::Utc;
use rusqlite::{params_from_iter, Connection, Row};
use scholar_core::errors::Result;

use crate::errors::{ambiguous_match, from_rusqlite, invalid_input};
use crate::repo::predicate::{render_where, Changes, Predicate, SqlValue};

/// Binding between a domain model and its table
///
/// Implementations live in [`crate::repo::bindings`], one per entity. The
/// column lists drive SELECT/INSERT/RETURNING statements, so `from_row`
/// must hydrate fields in exactly `COLUMNS` order.
pub trait Entity: Sized {
    /// Table name
    const TABLE: &'static str;

    /// All columns, in hydration order
    const COLUMNS: &'static [&'static str];

    /// Columns written on insert (engine-assigned ids excluded)
    const INSERT_COLUMNS: &'static [&'static str];

    /// Whether the table carries `created_at`/`updated_at`
    const TIMESTAMPS: bool = true;

    /// Hydrate an entity from a row shaped like `COLUMNS`
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Values for `INSERT_COLUMNS`, in the same order
    fn insert_values(&self) -> Vec<SqlValue>;

    /// Field-level checks run before insert; engine CHECKs still apply
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Marker for entities retired by stamping `deleted_at`
pub trait SoftDelete: Entity {}

/// Generic CRUD access to one entity type over a borrowed connection
///
/// ```no_run
/// use scholar_core::model::Degree;
/// use scholar_store::{db, migrations, Predicate, Repository};
///
/// # fn main() -> scholar_store::Result<()> {
/// let mut conn = db::open_in_memory()?;
/// db::configure(&conn)?;
/// migrations::apply_migrations(&mut conn)?;
///
/// let degrees = Repository::<Degree>::new(&conn);
/// let saved = degrees.add(&Degree::new("Computer Science", None))?;
/// let found = degrees.get(&[Predicate::eq("id", saved.id)])?;
/// assert_eq!(found, Some(saved));
/// # Ok(())
/// # }
/// ```
pub struct Repository<'c, T: Entity> {
    conn: &'c Connection,
    _entity: PhantomData<T>,
}

impl<'c, T: Entity> Repository<'c, T> {
    /// Create a repository over an externally managed connection
    pub fn new(conn: &'c Connection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    /// Retrieve at most one entity matching all predicates
    ///
    /// Returns `None` when nothing matches. Matching more than one row is
    /// an `ERR_AMBIGUOUS_MATCH` error: a single-record fetch with an
    /// under-constrained filter is a caller bug, not a result.
    pub fn get(&self, predicates: &[Predicate]) -> Result<Option<T>> {
        let (clause, params) = render_where(predicates, 1);
        let sql = format!(
            "SELECT {} FROM {}{} LIMIT 2",
            T::COLUMNS.join(", "),
            T::TABLE,
            clause
        );

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| from_rusqlite(T::TABLE, "get", e))?;
        let rows = stmt
            .query_map(params_from_iter(params), |row| T::from_row(row))
            .map_err(|e| from_rusqlite(T::TABLE, "get", e))?
            .collect::<std::result::Result<Vec<T>, _>>()
            .map_err(|e| from_rusqlite(T::TABLE, "get", e))?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.into_iter().next()),
            _ => Err(ambiguous_match(T::TABLE, "get")),
        }
    }

    /// Retrieve every entity matching all predicates
    ///
    /// An empty predicate list returns all rows. Row order is whatever the
    /// engine produces; use [`Repository::get_all_ordered`] when order
    /// matters.
    pub fn get_all(&self, predicates: &[Predicate]) -> Result<Vec<T>> {
        self.query_all(predicates, None)
    }

    /// Retrieve every matching entity, ordered ascending by `order_column`
    pub fn get_all_ordered(&self, predicates: &[Predicate], order_column: &str) -> Result<Vec<T>> {
        self.query_all(predicates, Some(order_column))
    }

    fn query_all(&self, predicates: &[Predicate], order_column: Option<&str>) -> Result<Vec<T>> {
        if let Some(column) = order_column {
            if !T::COLUMNS.contains(&column) {
                return Err(invalid_input(
                    T::TABLE,
                    "get_all",
                    &format!("unknown order column '{}'", column),
                ));
            }
        }

        let (clause, params) = render_where(predicates, 1);
        let order = order_column
            .map(|c| format!(" ORDER BY {}", c))
            .unwrap_or_default();
        let sql = format!(
            "SELECT {} FROM {}{}{}",
            T::COLUMNS.join(", "),
            T::TABLE,
            clause,
            order
        );

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| from_rusqlite(T::TABLE, "get_all", e))?;
        let rows = stmt
            .query_map(params_from_iter(params), |row| T::from_row(row))
            .map_err(|e| from_rusqlite(T::TABLE, "get_all", e))?
            .collect::<std::result::Result<Vec<T>, _>>()
            .map_err(|e| from_rusqlite(T::TABLE, "get_all", e))?;

        tracing::debug!(table = T::TABLE, rows = rows.len(), "get_all");
        Ok(rows)
    }

    /// Persist a new entity and return the row as the engine wrote it
    ///
    /// Generated identifiers and column defaults are populated in the
    /// returned value (INSERT ... RETURNING write-back).
    pub fn add(&self, entity: &T) -> Result<T> {
        entity.validate()?;

        let values = entity.insert_values();
        debug_assert_eq!(values.len(), T::INSERT_COLUMNS.len());
        let placeholders: Vec<String> = (1..=values.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            T::TABLE,
            T::INSERT_COLUMNS.join(", "),
            placeholders.join(", "),
            T::COLUMNS.join(", ")
        );

        let written = self
            .conn
            .query_row(&sql, params_from_iter(&values), |row| T::from_row(row))
            .map_err(|e| from_rusqlite(T::TABLE, "add", e))?;

        tracing::debug!(table = T::TABLE, "add");
        Ok(written)
    }

    /// Apply a value map to every entity matching all predicates
    ///
    /// `updated_at` is refreshed automatically on timestamped tables unless
    /// the caller set it explicitly. All matching rows are updated; the
    /// first updated row is returned, or `None` when nothing matched.
    pub fn update(&self, predicates: &[Predicate], changes: Changes) -> Result<Option<T>> {
        if changes.is_empty() {
            return Err(invalid_input(T::TABLE, "update", "empty value map"));
        }

        let mut changes = changes;
        if T::TIMESTAMPS && !changes.contains("updated_at") {
            changes.push("updated_at", SqlValue::Integer(Utc::now().timestamp()));
        }

        let mut set_fragments = Vec::new();
        let mut params: Vec<&SqlValue> = Vec::new();
        for (column, value) in changes.iter() {
            set_fragments.push(format!("{} = ?{}", column, params.len() + 1));
            params.push(value);
        }

        let (clause, where_params) = render_where(predicates, params.len() + 1);
        params.extend(where_params);

        let sql = format!(
            "UPDATE {} SET {}{} RETURNING {}",
            T::TABLE,
            set_fragments.join(", "),
            clause,
            T::COLUMNS.join(", ")
        );

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| from_rusqlite(T::TABLE, "update", e))?;
        let mut updated = stmt
            .query_map(params_from_iter(params), |row| T::from_row(row))
            .map_err(|e| from_rusqlite(T::TABLE, "update", e))?
            .collect::<std::result::Result<Vec<T>, _>>()
            .map_err(|e| from_rusqlite(T::TABLE, "update", e))?;

        tracing::debug!(table = T::TABLE, rows = updated.len(), "update");
        if updated.is_empty() {
            Ok(None)
        } else {
            Ok(Some(updated.swap_remove(0)))
        }
    }

    /// Physically remove every entity matching all predicates
    ///
    /// Returns true iff at least one row was removed.
    pub fn delete(&self, predicates: &[Predicate]) -> Result<bool> {
        let (clause, params) = render_where(predicates, 1);
        let sql = format!("DELETE FROM {}{}", T::TABLE, clause);

        let removed = self
            .conn
            .execute(&sql, params_from_iter(params))
            .map_err(|e| from_rusqlite(T::TABLE, "delete", e))?;

        tracing::debug!(table = T::TABLE, rows = removed, "delete");
        Ok(removed > 0)
    }
}

impl<'c, T: SoftDelete> Repository<'c, T> {
    /// Logically delete every live entity matching all predicates
    ///
    /// Stamps `deleted_at` (and `updated_at`) instead of removing rows;
    /// rows already marked deleted are left untouched. Returns true iff at
    /// least one row was stamped.
    pub fn soft_delete(&self, predicates: &[Predicate]) -> Result<bool> {
        let now = Utc::now().timestamp();
        let mut params: Vec<&SqlValue> = Vec::new();
        let stamp = SqlValue::Integer(now);
        params.push(&stamp);
        params.push(&stamp);

        let mut live = predicates.to_vec();
        live.push(Predicate::is_null("deleted_at"));
        let (clause, where_params) = render_where(&live, params.len() + 1);
        params.extend(where_params);

        let sql = format!(
            "UPDATE {} SET deleted_at = ?1, updated_at = ?2{}",
            T::TABLE,
            clause
        );

        let stamped = self
            .conn
            .execute(&sql, params_from_iter(params))
            .map_err(|e| from_rusqlite(T::TABLE, "soft_delete", e))?;

        tracing::debug!(table = T::TABLE, rows = stamped, "soft_delete");
        Ok(stamped > 0)
    }
}
