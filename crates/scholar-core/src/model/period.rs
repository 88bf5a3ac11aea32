//! Academic periods (terms)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an academic period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    Active,
    Finished,
    Cancelled,
    Planned,
}

impl PeriodStatus {
    /// Wire/storage name for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodStatus::Active => "active",
            PeriodStatus::Finished => "finished",
            PeriodStatus::Cancelled => "cancelled",
            PeriodStatus::Planned => "planned",
        }
    }

    /// Parse a storage name back into a status
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(PeriodStatus::Active),
            "finished" => Some(PeriodStatus::Finished),
            "cancelled" => Some(PeriodStatus::Cancelled),
            "planned" => Some(PeriodStatus::Planned),
            _ => None,
        }
    }
}

/// A term in the academic calendar
///
/// Courses are taught within exactly one period. The end date can never
/// precede the start date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicPeriod {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    pub name: String,

    pub start_date: NaiveDate,

    /// Must be on or after `start_date`
    pub end_date: NaiveDate,

    pub status: PeriodStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AcademicPeriod {
    /// Create a new unpersisted period, `active` by default
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            start_date,
            end_date,
            status: PeriodStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }
}
