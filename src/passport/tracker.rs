//! In-memory visit tracking and derived progress.

use std::collections::BTreeSet;

use crate::catalog::{CheckpointCatalog, CheckpointId};

use super::types::{ParkVisit, PassportError, Progress};

/// Tracks which catalog checkpoints have a completed questionnaire.
///
/// Membership is monotonic: this subsystem never un-records a visit. Only
/// ids present in the catalog are accepted, so `completed <= total` holds.
#[derive(Debug, Clone)]
pub struct VisitTracker {
    known: BTreeSet<CheckpointId>,
    visited: BTreeSet<CheckpointId>,
}

impl VisitTracker {
    /// Create an empty tracker over the given catalog.
    pub fn new(catalog: &CheckpointCatalog) -> Self {
        Self {
            known: catalog.list().iter().map(|cp| cp.id).collect(),
            visited: BTreeSet::new(),
        }
    }

    /// Create a tracker seeded from persisted visit records.
    ///
    /// Records referencing ids no longer in the catalog are skipped with a
    /// warning rather than rejected, so a trimmed catalog does not brick a
    /// returning user's passport.
    pub fn from_visits(catalog: &CheckpointCatalog, visits: &[ParkVisit]) -> Self {
        let mut tracker = Self::new(catalog);
        for visit in visits {
            if !visit.completed {
                continue;
            }
            if tracker.mark_visited(visit.park_id).is_err() {
                tracing::warn!(
                    park_id = visit.park_id,
                    "persisted visit references unknown checkpoint, skipping"
                );
            }
        }
        tracker
    }

    /// Whether the park's questionnaire has been completed.
    pub fn is_visited(&self, park_id: CheckpointId) -> bool {
        self.visited.contains(&park_id)
    }

    /// Record a completed visit.
    ///
    /// Idempotent: returns `Ok(false)` if the id was already recorded.
    /// Unknown ids are rejected; that is a caller error, not a user outcome.
    pub fn mark_visited(&mut self, park_id: CheckpointId) -> Result<bool, PassportError> {
        if !self.known.contains(&park_id) {
            return Err(PassportError::UnknownCheckpoint(park_id));
        }
        let newly = self.visited.insert(park_id);
        if newly {
            tracing::debug!(park_id, completed = self.visited.len(), "visit recorded");
        }
        Ok(newly)
    }

    /// Current completion statistics.
    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.visited.len(),
            total: self.known.len(),
        }
    }

    /// Visited checkpoint ids in ascending order.
    pub fn visited_ids(&self) -> impl Iterator<Item = CheckpointId> + '_ {
        self.visited.iter().copied()
    }
}
