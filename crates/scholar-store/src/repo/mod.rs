//! Repository layer
//!
//! A single generic CRUD contract over any schema-bound entity, plus the
//! typed predicate/value surface callers filter with.

pub mod bindings;
pub mod predicate;
pub mod repository;

pub use predicate::{Changes, Predicate, SqlValue};
pub use repository::{Entity, Repository, SoftDelete};
