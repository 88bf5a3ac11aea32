//! Courses and course enrollment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Active,
    Finished,
    Cancelled,
    Planned,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Active => "active",
            CourseStatus::Finished => "finished",
            CourseStatus::Cancelled => "cancelled",
            CourseStatus::Planned => "planned",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(CourseStatus::Active),
            "finished" => Some(CourseStatus::Finished),
            "cancelled" => Some(CourseStatus::Cancelled),
            "planned" => Some(CourseStatus::Planned),
            _ => None,
        }
    }
}

/// A course taught by one teacher within one academic period
///
/// The course code is the unique catalog identifier (e.g. `CS-101-2026A`).
/// Units, evaluation components, tasks, enrollments, and attendance records
/// all hang off a course. Soft-deletable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    pub name: String,

    /// Catalog code, unique
    pub code: String,

    pub teacher_id: i64,

    pub period_id: i64,

    pub description: Option<String>,

    pub status: CourseStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Logical-deletion marker
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Course {
    /// Create a new unpersisted course, `active` by default
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        teacher_id: i64,
        period_id: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            code: code.into(),
            teacher_id,
            period_id,
            description: None,
            status: CourseStatus::Active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Outcome state of a student's enrollment in a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Dropped,
    Completed,
    Failed,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Dropped => "dropped",
            EnrollmentStatus::Completed => "completed",
            EnrollmentStatus::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(EnrollmentStatus::Active),
            "dropped" => Some(EnrollmentStatus::Dropped),
            "completed" => Some(EnrollmentStatus::Completed),
            "failed" => Some(EnrollmentStatus::Failed),
            _ => None,
        }
    }
}

/// A student's membership in a course
///
/// Keyed by (student_id, course_id); a student enrolls in a given course at
/// most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEnrollment {
    pub student_id: i64,
    pub course_id: i64,

    pub enrollment_date: DateTime<Utc>,

    pub status: EnrollmentStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CourseEnrollment {
    /// Create a new unpersisted enrollment, `active` and dated now
    pub fn new(student_id: i64, course_id: i64) -> Self {
        let now = Utc::now();
        Self {
            student_id,
            course_id,
            enrollment_date: now,
            status: EnrollmentStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }
}
