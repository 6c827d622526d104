//! Database schema definitions for parkpass.

/// SQL schema for creating all database tables.
///
/// Visits are keyed uniquely by (user, park): the passport records at most
/// one completed questionnaire per checkpoint per user, and upserting on
/// that key makes retried saves idempotent.
pub const SCHEMA: &str = r#"
-- Completed park visits
CREATE TABLE IF NOT EXISTS park_visits (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    park_id INTEGER NOT NULL,
    visit_date TEXT NOT NULL,
    responses_json TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL,
    UNIQUE(user_id, park_id)
);

CREATE INDEX IF NOT EXISTS idx_park_visits_user_id ON park_visits(user_id);
CREATE INDEX IF NOT EXISTS idx_park_visits_visit_date ON park_visits(user_id, visit_date);
"#;

/// SQL for schema version tracking (migrations)
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version
pub const CURRENT_VERSION: i32 = 1;
