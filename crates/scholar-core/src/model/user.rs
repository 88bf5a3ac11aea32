//! Users, roles, and the role-assignment link

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account in the system
///
/// Teachers and students both reference a User row for identity; the User
/// itself only carries credentials and contact data. Usernames and email
/// addresses are unique across the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    /// Display name
    pub fullname: String,

    /// Login name, unique, longer than 3 characters
    pub username: String,

    /// Contact address, unique, must look like an email address
    pub email: String,

    /// Credential material, longer than 6 characters
    pub password: String,

    /// Timestamp when this row was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this row was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new unpersisted User with current timestamps
    pub fn new(
        fullname: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            fullname: fullname.into(),
            username: username.into(),
            email: email.into(),
            password: password.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A named role, attached to users through [`UserRole`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    /// Role name, unique, longer than 3 characters
    pub name: String,

    /// Timestamp when this row was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this row was last updated
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Create a new unpersisted Role with current timestamps
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Many-to-many link between users and roles
///
/// A bare join row; it carries no surrogate id and no timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    pub user_id: i64,
    pub role_id: i64,
}

impl UserRole {
    pub fn new(user_id: i64, role_id: i64) -> Self {
        Self { user_id, role_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_unpersisted() {
        let user = User::new("Ada Lovelace", "alovelace", "ada@example.com", "s3cr3t-pw");
        assert_eq!(user.id, 0);
        assert_eq!(user.created_at, user.updated_at);
    }
}
