//! Migration framework
//!
//! Provides:
//! - Migration runner with checksums and gap detection
//! - Idempotent forward application
//! - Reverse application (full schema teardown) for replay
//! - Embedded SQL migrations

mod checksums;
mod embedded;
mod runner;

pub use runner::{applied_migrations, apply_migrations, revert_migrations};
