//! Attendance records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Presence state for one student on one class date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Excused => "excused",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "present" => Some(AttendanceStatus::Present),
            "absent" => Some(AttendanceStatus::Absent),
            "late" => Some(AttendanceStatus::Late),
            "excused" => Some(AttendanceStatus::Excused),
            _ => None,
        }
    }
}

/// One student's attendance mark for one course session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    pub course_id: i64,
    pub student_id: i64,

    /// Session timestamp the mark applies to
    pub date: DateTime<Utc>,

    pub status: AttendanceStatus,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Attendance {
    /// Create a new unpersisted record, `present` by default
    pub fn new(course_id: i64, student_id: i64, date: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            course_id,
            student_id,
            date,
            status: AttendanceStatus::Present,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }
}
