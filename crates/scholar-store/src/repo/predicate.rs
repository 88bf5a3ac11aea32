//! Typed filter conditions and update value maps
//!
//! Callers express row selection as a list of [`Predicate`]s over entity
//! columns; the repository combines them with logical AND. Keeping the
//! filter surface typed (instead of leaking SQL fragments) keeps the
//! repository swappable across storage backends.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::{ToSqlOutput, Value as SqliteValue};
use rusqlite::ToSql;

/// A storable scalar value
///
/// The bridge between domain field types and SQLite's storage classes:
/// booleans become integers, dates become ISO-8601 text, timestamps become
/// epoch seconds.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Null,
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlValue::Integer(i) => ToSqlOutput::Owned(SqliteValue::Integer(*i)),
            SqlValue::Real(r) => ToSqlOutput::Owned(SqliteValue::Real(*r)),
            SqlValue::Text(s) => ToSqlOutput::Owned(SqliteValue::Text(s.clone())),
            SqlValue::Null => ToSqlOutput::Owned(SqliteValue::Null),
        })
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Real(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Integer(if v { 1 } else { 0 })
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(v: NaiveDate) -> Self {
        SqlValue::Text(v.format("%Y-%m-%d").to_string())
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(v: DateTime<Utc>) -> Self {
        SqlValue::Integer(v.timestamp())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => SqlValue::Null,
        }
    }
}

/// Comparison operator of a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Like,
    IsNull,
    IsNotNull,
}

impl Op {
    fn sql(&self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "<>",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Like => "LIKE",
            Op::IsNull => "IS NULL",
            Op::IsNotNull => "IS NOT NULL",
        }
    }
}

/// A boolean filter condition over one entity column
///
/// ```
/// use scholar_store::repo::Predicate;
///
/// let live = Predicate::is_null("deleted_at");
/// let named = Predicate::eq("username", "alovelace");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    column: &'static str,
    op: Op,
    value: Option<SqlValue>,
}

impl Predicate {
    fn comparison(column: &'static str, op: Op, value: impl Into<SqlValue>) -> Self {
        Self {
            column,
            op,
            value: Some(value.into()),
        }
    }

    /// `column = value`
    pub fn eq(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::comparison(column, Op::Eq, value)
    }

    /// `column <> value`
    pub fn ne(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::comparison(column, Op::Ne, value)
    }

    /// `column > value`
    pub fn gt(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::comparison(column, Op::Gt, value)
    }

    /// `column >= value`
    pub fn ge(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::comparison(column, Op::Ge, value)
    }

    /// `column < value`
    pub fn lt(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::comparison(column, Op::Lt, value)
    }

    /// `column <= value`
    pub fn le(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::comparison(column, Op::Le, value)
    }

    /// `column LIKE pattern`
    pub fn like(column: &'static str, pattern: impl Into<String>) -> Self {
        Self::comparison(column, Op::Like, pattern.into())
    }

    /// `column IS NULL`
    pub fn is_null(column: &'static str) -> Self {
        Self {
            column,
            op: Op::IsNull,
            value: None,
        }
    }

    /// `column IS NOT NULL`
    pub fn is_not_null(column: &'static str) -> Self {
        Self {
            column,
            op: Op::IsNotNull,
            value: None,
        }
    }

    pub(crate) fn value(&self) -> Option<&SqlValue> {
        self.value.as_ref()
    }

    /// Render this predicate as a SQL fragment; `index` is the 1-based
    /// placeholder number to use when the predicate carries a value.
    pub(crate) fn sql_fragment(&self, index: usize) -> String {
        match self.value {
            Some(_) => format!("{} {} ?{}", self.column, self.op.sql(), index),
            None => format!("{} {}", self.column, self.op.sql()),
        }
    }
}

/// Render an AND-combined WHERE clause for `predicates`
///
/// Placeholder numbering starts at `first_index` so the clause can follow
/// earlier parameters (e.g. an UPDATE's SET list). Returns the clause
/// (empty when there are no predicates, meaning "all rows") and the
/// parameter values in placeholder order.
pub(crate) fn render_where(
    predicates: &[Predicate],
    first_index: usize,
) -> (String, Vec<&SqlValue>) {
    let mut params = Vec::new();
    let mut fragments = Vec::new();
    for predicate in predicates {
        match predicate.value() {
            Some(value) => {
                fragments.push(predicate.sql_fragment(first_index + params.len()));
                params.push(value);
            }
            None => fragments.push(predicate.sql_fragment(0)),
        }
    }
    if fragments.is_empty() {
        (String::new(), params)
    } else {
        (format!(" WHERE {}", fragments.join(" AND ")), params)
    }
}

/// An ordered field/value map for `update`
///
/// ```
/// use scholar_store::repo::Changes;
///
/// let changes = Changes::new()
///     .set("status", "finished")
///     .set("weight", 30.0);
/// assert!(!changes.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Changes {
    fields: Vec<(&'static str, SqlValue)>,
}

impl Changes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or append) a field assignment
    pub fn set(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.fields.push((column, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.iter().any(|(c, _)| *c == column)
    }

    pub(crate) fn push(&mut self, column: &'static str, value: SqlValue) {
        self.fields.push((column, value));
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'static str, &SqlValue)> {
        self.fields.iter().map(|(c, v)| (*c, v))
    }
}
