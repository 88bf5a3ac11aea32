//! Enrolled students

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student profile layered over a [`super::User`] account
///
/// One-to-one with users and many-to-one with degrees. The registration key
/// is the institution-issued matricula, unique and at least 5 characters.
/// Soft-deletable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    /// Backing user account, unique per student
    pub user_id: i64,

    /// Degree program this student belongs to
    pub degree_id: i64,

    /// Institution-issued registration key, unique, at least 5 characters
    pub key_registration: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Logical-deletion marker
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Student {
    /// Create a new unpersisted Student with current timestamps
    pub fn new(user_id: i64, degree_id: i64, key_registration: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            degree_id,
            key_registration: key_registration.into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
