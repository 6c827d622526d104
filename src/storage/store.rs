//! Persistence gateway for visit records.

use std::sync::Mutex;

use thiserror::Error;
use uuid::Uuid;

use crate::passport::types::ParkVisit;

use super::database::{Database, DatabaseError};

/// Durable store for completed park visits.
///
/// Saves must be at-least-once safe: a retried save of the same visit may
/// not create a duplicate record. Implementations are shared with the
/// background save worker, so they must be usable across threads.
pub trait VisitStore: Send + Sync {
    /// Durably record a completed visit.
    fn save(&self, visit: &ParkVisit) -> Result<(), StoreError>;

    /// Load all recorded visits for a user, most recent first.
    fn load_all(&self, user_id: Uuid) -> Result<Vec<ParkVisit>, StoreError>;
}

/// Visit store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Visit store backed by the embedded SQLite database.
pub struct SqliteVisitStore {
    db: Mutex<Database>,
}

impl SqliteVisitStore {
    /// Wrap an opened database.
    pub fn new(db: Database) -> Self {
        Self { db: Mutex::new(db) }
    }
}

impl VisitStore for SqliteVisitStore {
    fn save(&self, visit: &ParkVisit) -> Result<(), StoreError> {
        let db = self
            .db
            .lock()
            .map_err(|_| StoreError::Unavailable("database lock poisoned".to_string()))?;
        db.upsert_visit(visit)?;
        Ok(())
    }

    fn load_all(&self, user_id: Uuid) -> Result<Vec<ParkVisit>, StoreError> {
        let db = self
            .db
            .lock()
            .map_err(|_| StoreError::Unavailable("database lock poisoned".to_string()))?;
        Ok(db.list_visits(&user_id)?)
    }
}

/// In-memory visit store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryVisitStore {
    visits: Mutex<Vec<ParkVisit>>,
}

impl MemoryVisitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisitStore for MemoryVisitStore {
    fn save(&self, visit: &ParkVisit) -> Result<(), StoreError> {
        let mut visits = self
            .visits
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        // Same upsert key as the SQLite store.
        visits.retain(|v| !(v.user_id == visit.user_id && v.park_id == visit.park_id));
        visits.push(visit.clone());
        Ok(())
    }

    fn load_all(&self, user_id: Uuid) -> Result<Vec<ParkVisit>, StoreError> {
        let visits = self
            .visits
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        let mut result: Vec<ParkVisit> = visits
            .iter()
            .filter(|v| v.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.visit_date.cmp(&a.visit_date));
        Ok(result)
    }
}
