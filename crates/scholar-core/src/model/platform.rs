//! External learning platforms

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An external platform tasks can be hosted on (e.g. an LMS or judge)
///
/// `api_config` is an opaque structured blob (keys, endpoints, tenant ids)
/// persisted as JSON; the schema does not interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    /// Platform name, unique
    pub name: String,

    pub base_url: Option<String>,

    /// Opaque integration configuration
    pub api_config: Option<serde_json::Value>,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Platform {
    /// Create a new unpersisted platform, active by default
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            base_url: None,
            api_config: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
