//! Passport state types: visits, progress, scan outcomes, and errors.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{Checkpoint, CheckpointId};

/// Durable record of one completed checkpoint questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkVisit {
    /// Unique record identifier
    pub id: Uuid,
    /// User who completed the visit
    pub user_id: Uuid,
    /// Checkpoint that was visited
    pub park_id: CheckpointId,
    /// When the questionnaire was submitted
    pub visit_date: DateTime<Utc>,
    /// Answers keyed by question index
    pub responses: BTreeMap<usize, String>,
    /// Whether the questionnaire was fully completed
    pub completed: bool,
}

impl ParkVisit {
    /// Create a completed visit record with the current timestamp.
    pub fn new(user_id: Uuid, park_id: CheckpointId, responses: BTreeMap<usize, String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            park_id,
            visit_date: Utc::now(),
            responses,
            completed: true,
        }
    }
}

/// Passport completion statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Parks with a completed questionnaire
    pub completed: usize,
    /// Catalog size
    pub total: usize,
}

impl Progress {
    /// Completion ratio in [0, 1]; defined as 0 for an empty catalog.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    /// Parks still to visit.
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// Whether the passport is complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

/// Home-screen summary: progress plus the challenge countdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassportSummary {
    pub progress: Progress,
    /// Parks still to visit
    pub parks_to_go: usize,
    /// Days until the program deadline, if one is configured (0 if past)
    pub days_remaining: Option<i64>,
}

impl PassportSummary {
    /// Build a summary from progress and an optional program deadline.
    pub fn new(progress: Progress, deadline: Option<NaiveDate>) -> Self {
        let days_remaining = deadline.map(|date| {
            let today = Utc::now().date_naive();
            (date - today).num_days().max(0)
        });
        Self {
            progress,
            parks_to_go: progress.remaining(),
            days_remaining,
        }
    }
}

/// Input shape accepted by scan resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanInput {
    /// Direct marker tap on the map
    MarkerTap(CheckpointId),
    /// Decoded QR payload from the camera
    QrPayload(String),
}

/// Outcome of classifying one scan input.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// The identifier or payload matched no catalog entry
    InvalidCode,
    /// The matched park's questionnaire is already completed
    AlreadyCompleted(CheckpointId),
    /// Valid, unvisited checkpoint; a fresh session should open
    SessionReady(Checkpoint),
}

/// Passport state machine errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassportError {
    #[error("checkpoint {0} is not in the catalog")]
    UnknownCheckpoint(CheckpointId),

    #[error("a questionnaire session is already open for checkpoint {0}")]
    SessionActive(CheckpointId),

    #[error("no questionnaire session is open")]
    NoActiveSession,

    #[error("question index {index} is out of range ({len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("answer for question {0} is empty")]
    EmptyAnswer(usize),

    #[error("answer {answer:?} is not an offered option for question {index}")]
    AnswerNotOffered { index: usize, answer: String },

    #[error("missing answers for questions {missing:?}")]
    IncompleteSubmission { missing: Vec<usize> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_ratio_bounds() {
        assert_eq!(Progress { completed: 0, total: 0 }.ratio(), 0.0);
        assert_eq!(Progress { completed: 0, total: 10 }.ratio(), 0.0);
        assert_eq!(Progress { completed: 1, total: 10 }.ratio(), 0.1);
        assert_eq!(Progress { completed: 10, total: 10 }.ratio(), 1.0);
    }

    #[test]
    fn test_progress_remaining() {
        let p = Progress { completed: 4, total: 10 };
        assert_eq!(p.remaining(), 6);
        assert!(!p.is_complete());
        assert!(Progress { completed: 10, total: 10 }.is_complete());
    }

    #[test]
    fn test_summary_deadline_never_negative() {
        let progress = Progress { completed: 4, total: 10 };
        let past = Utc::now().date_naive() - chrono::Duration::days(30);
        let summary = PassportSummary::new(progress, Some(past));
        assert_eq!(summary.days_remaining, Some(0));
        assert_eq!(summary.parks_to_go, 6);

        let none = PassportSummary::new(progress, None);
        assert_eq!(none.days_remaining, None);
    }
}
