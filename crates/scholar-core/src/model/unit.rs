//! Course units and topics

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An ordered block of content within a course
///
/// Units are sequenced by `order_index`. Scheduling dates are optional, but
/// when both are present the end can never precede the start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    pub course_id: i64,

    pub name: String,

    pub description: Option<String>,

    /// Position within the course
    pub order_index: i64,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Unit {
    /// Create a new unpersisted unit with no scheduled dates
    pub fn new(course_id: i64, name: impl Into<String>, order_index: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            course_id,
            name: name.into(),
            description: None,
            order_index,
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// An ordered topic within a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    pub unit_id: i64,

    pub name: String,

    pub description: Option<String>,

    /// Position within the unit
    pub order_index: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    pub fn new(unit_id: i64, name: impl Into<String>, order_index: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            unit_id,
            name: name.into(),
            description: None,
            order_index,
            created_at: now,
            updated_at: now,
        }
    }
}
