//! Teaching staff

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A teacher profile layered over a [`super::User`] account
///
/// One-to-one with users (`user_id` is unique). Soft-deletable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    /// Backing user account, unique per teacher
    pub user_id: i64,

    /// Optional subject specialization, longer than 3 characters when present
    pub specialization: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Logical-deletion marker
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Teacher {
    /// Create a new unpersisted Teacher with current timestamps
    pub fn new(user_id: i64, specialization: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            specialization,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
