//! Database operations using rusqlite.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result as SqliteResult};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::CheckpointId;
use crate::passport::types::ParkVisit;
use crate::storage::schema::{CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &PathBuf) -> Result<Self, DatabaseError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::IoError(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Initialize the database schema.
    fn initialize(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

        let current_version = self.get_schema_version()?;

        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    /// Get the current schema version.
    fn get_schema_version(&self) -> Result<i32, DatabaseError> {
        let result: SqliteResult<i32> = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Run database migrations.
    fn migrate(&self, from_version: i32) -> Result<(), DatabaseError> {
        if from_version < 1 {
            self.conn
                .execute_batch(SCHEMA)
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            self.conn
                .execute(
                    "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                    [CURRENT_VERSION],
                )
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            tracing::info!("Database migrated to version {}", CURRENT_VERSION);
        }

        // Future migrations would go here:
        // if from_version < 2 { ... }

        Ok(())
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // ========== Park Visit Operations ==========

    /// Insert or replace a visit, keyed by (user, park).
    ///
    /// Upsert semantics make retried saves idempotent: a duplicate save of
    /// the same visit overwrites rather than duplicates.
    pub fn upsert_visit(&self, visit: &ParkVisit) -> Result<(), DatabaseError> {
        let responses_json = serde_json::to_string(&visit.responses)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO park_visits (id, user_id, park_id, visit_date, responses_json, completed, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, datetime('now'))
                 ON CONFLICT(user_id, park_id) DO UPDATE SET
                     visit_date = excluded.visit_date,
                     responses_json = excluded.responses_json,
                     completed = excluded.completed",
                params![
                    visit.id.to_string(),
                    visit.user_id.to_string(),
                    visit.park_id,
                    visit.visit_date.to_rfc3339(),
                    responses_json,
                    visit.completed as i32,
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    /// Get a user's visit for one park, if recorded.
    pub fn get_visit(
        &self,
        user_id: &Uuid,
        park_id: CheckpointId,
    ) -> Result<Option<ParkVisit>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, user_id, park_id, visit_date, responses_json, completed
                 FROM park_visits WHERE user_id = ?1 AND park_id = ?2",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let result = stmt.query_row(params![user_id.to_string(), park_id], |row| {
            Ok(VisitRow {
                id: row.get(0)?,
                user_id: row.get(1)?,
                park_id: row.get(2)?,
                visit_date: row.get(3)?,
                responses_json: row.get(4)?,
                completed: row.get(5)?,
            })
        });

        match result {
            Ok(row) => Ok(Some(row.into_visit()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// List all visits for a user, most recent first.
    pub fn list_visits(&self, user_id: &Uuid) -> Result<Vec<ParkVisit>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, user_id, park_id, visit_date, responses_json, completed
                 FROM park_visits WHERE user_id = ?1 ORDER BY visit_date DESC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![user_id.to_string()], |row| {
                Ok(VisitRow {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    park_id: row.get(2)?,
                    visit_date: row.get(3)?,
                    responses_json: row.get(4)?,
                    completed: row.get(5)?,
                })
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut visits = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            visits.push(row.into_visit()?);
        }

        Ok(visits)
    }

    /// Count visits for a user.
    pub fn count_visits(&self, user_id: &Uuid) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM park_visits WHERE user_id = ?1",
                params![user_id.to_string()],
                |row| row.get(0),
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(count as usize)
    }
}

/// Intermediate struct for reading visit rows from database.
struct VisitRow {
    id: String,
    user_id: String,
    park_id: CheckpointId,
    visit_date: String,
    responses_json: String,
    completed: i32,
}

impl VisitRow {
    fn into_visit(self) -> Result<ParkVisit, DatabaseError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| DatabaseError::DeserializationError(format!("Invalid UUID: {}", e)))?;

        let user_id = Uuid::parse_str(&self.user_id).map_err(|e| {
            DatabaseError::DeserializationError(format!("Invalid user UUID: {}", e))
        })?;

        let visit_date = DateTime::parse_from_rfc3339(&self.visit_date)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                DatabaseError::DeserializationError(format!("Invalid visit date: {}", e))
            })?;

        let responses: BTreeMap<usize, String> = serde_json::from_str(&self.responses_json)
            .map_err(|e| {
                DatabaseError::DeserializationError(format!("Invalid responses JSON: {}", e))
            })?;

        Ok(ParkVisit {
            id,
            user_id,
            park_id: self.park_id,
            visit_date,
            responses,
            completed: self.completed != 0,
        })
    }
}

/// Database errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}
