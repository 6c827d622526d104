//! Background save worker with bounded retry.
//!
//! The tracker marks a visit locally first for responsiveness; durable
//! persistence happens here, off the interaction path. A failed save is
//! retried with growing delays and never rolls back the in-memory state.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::passport::types::ParkVisit;

use super::config::SavingSettings;
use super::store::VisitStore;

/// Retry policy for background saves.
#[derive(Debug, Clone)]
pub struct SaverConfig {
    /// Total attempts per visit before giving up
    pub max_attempts: u32,
    /// Delay before the first retry; doubles each attempt
    pub base_delay: Duration,
}

impl Default for SaverConfig {
    fn default() -> Self {
        Self::from(&SavingSettings::default())
    }
}

impl From<&SavingSettings> for SaverConfig {
    fn from(settings: &SavingSettings) -> Self {
        Self {
            max_attempts: settings.max_attempts,
            base_delay: Duration::from_millis(settings.base_delay_ms),
        }
    }
}

/// Handle for queueing visits to the save worker.
#[derive(Debug, Clone)]
pub struct SaveHandle {
    tx: mpsc::UnboundedSender<ParkVisit>,
}

impl SaveHandle {
    /// Queue a visit for durable save.
    ///
    /// Returns false if the worker has shut down; the caller's in-memory
    /// state is already committed either way.
    pub fn queue(&self, visit: ParkVisit) -> bool {
        let park_id = visit.park_id;
        if self.tx.send(visit).is_err() {
            tracing::warn!(park_id, "save worker is gone, visit not queued");
            return false;
        }
        true
    }
}

/// Spawn the save worker over the given store.
///
/// Dropping every `SaveHandle` shuts the worker down after it drains the
/// queue; await the returned handle to ensure pending saves finished.
pub fn spawn(store: Box<dyn VisitStore>, config: SaverConfig) -> (SaveHandle, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<ParkVisit>();

    let worker = tokio::spawn(async move {
        while let Some(visit) = rx.recv().await {
            save_with_retry(store.as_ref(), &visit, &config).await;
        }
        tracing::debug!("save worker drained and stopped");
    });

    (SaveHandle { tx }, worker)
}

async fn save_with_retry(store: &dyn VisitStore, visit: &ParkVisit, config: &SaverConfig) {
    let mut delay = config.base_delay;

    for attempt in 1..=config.max_attempts {
        match store.save(visit) {
            Ok(()) => {
                tracing::info!(park_id = visit.park_id, attempt, "visit saved");
                return;
            }
            Err(e) if attempt < config.max_attempts => {
                tracing::warn!(
                    park_id = visit.park_id,
                    attempt,
                    error = %e,
                    "visit save failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => {
                tracing::error!(
                    park_id = visit.park_id,
                    attempts = config.max_attempts,
                    error = %e,
                    "visit save gave up"
                );
            }
        }
    }
}
