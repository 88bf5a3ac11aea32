//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!. Each entry is
//! a forward/backward pair; the backward script must undo exactly what the
//! forward script created so the full sequence replays to an empty schema.

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub up_sql: &'static str,
    pub down_sql: &'static str,
}

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_identity",
            up_sql: include_str!("../../migrations/001_identity.sql"),
            down_sql: include_str!("../../migrations/001_identity.down.sql"),
        },
        Migration {
            id: "002_academics",
            up_sql: include_str!("../../migrations/002_academics.sql"),
            down_sql: include_str!("../../migrations/002_academics.down.sql"),
        },
        Migration {
            id: "003_assessment",
            up_sql: include_str!("../../migrations/003_assessment.sql"),
            down_sql: include_str!("../../migrations/003_assessment.down.sql"),
        },
    ]
}
