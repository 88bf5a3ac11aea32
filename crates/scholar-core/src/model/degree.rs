//! Academic degrees

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A degree program students enroll under
///
/// Soft-deletable: rows are retired by stamping `deleted_at` rather than
/// being removed, so historical student records keep a valid reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Degree {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    /// Program name, unique, longer than 3 characters
    pub name: String,

    /// Optional description, longer than 3 characters when present
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Logical-deletion marker
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Degree {
    /// Create a new unpersisted Degree with current timestamps
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            description,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check whether this degree has been logically deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
