//! scholar-core - Domain layer of the school-management persistence stack
//!
//! Provides:
//! - Domain models for users, academics, courses, and assessment
//! - Field-level validation rules mirroring the schema constraints
//! - The canonical structured error facility
//! - Logging initialization

pub mod errors;
pub mod logging;
pub mod model;
pub mod rules;

// Re-export key types
pub use errors::{Result, ScError, ScErrorKind};
