//! Field-level rules mirroring the schema's CHECK constraints
//!
//! The storage engine enforces these at write time; the functions here let
//! the repository (and any caller) reject malformed entities before a
//! statement is ever prepared, with the same error kind either way.

pub mod validation;

pub use validation::{
    validate_component, validate_degree, validate_grade, validate_period, validate_role,
    validate_student, validate_task, validate_teacher, validate_unit, validate_user,
};
