//! Passport controller: coordinates scans, sessions, visit tracking and
//! background persistence behind one interaction surface.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::catalog::{CheckpointCatalog, CheckpointId, QuestionnaireCatalog};
use crate::services::{project_markers, MapMarker, QrFrameSource};
use crate::storage::SaveHandle;

use super::badges::{badge_statuses, BadgeStatus};
use super::scanner::ScanResolver;
use super::session::QuestionnaireSession;
use super::tracker::VisitTracker;
use super::types::{
    ParkVisit, PassportError, PassportSummary, Progress, ScanInput, ScanOutcome,
};

/// Single-user passport state machine.
///
/// Owns the tracker, the scan debounce, and at most one open questionnaire
/// session. A scan that resolves to an unvisited park opens a session; a
/// complete submission commits the visit locally and queues the durable
/// save, in that order. The save path never rolls visit state back.
pub struct PassportController {
    checkpoints: Arc<CheckpointCatalog>,
    questionnaires: Arc<QuestionnaireCatalog>,
    tracker: VisitTracker,
    session: Option<QuestionnaireSession>,
    resolver: ScanResolver,
    user_id: Uuid,
    save_handle: Option<SaveHandle>,
}

impl PassportController {
    /// Create a controller for a user over the given catalogs.
    pub fn new(
        checkpoints: Arc<CheckpointCatalog>,
        questionnaires: Arc<QuestionnaireCatalog>,
        user_id: Uuid,
    ) -> Self {
        Self {
            tracker: VisitTracker::new(&checkpoints),
            checkpoints,
            questionnaires,
            session: None,
            resolver: ScanResolver::new(),
            user_id,
            save_handle: None,
        }
    }

    /// Attach the background save worker handle.
    ///
    /// Without one, submissions still commit locally; they just are not
    /// persisted. Tests and previews run in that mode.
    pub fn attach_saver(&mut self, handle: SaveHandle) {
        self.save_handle = Some(handle);
    }

    /// Seed visit state from persisted records, replacing current state.
    pub fn hydrate(&mut self, visits: &[ParkVisit]) {
        self.tracker = VisitTracker::from_visits(&self.checkpoints, visits);
        tracing::info!(
            completed = self.tracker.progress().completed,
            "passport hydrated from stored visits"
        );
    }

    /// Handle a marker tap on the map.
    ///
    /// Rejected while a questionnaire session is open: the user must finish
    /// or cancel before starting another park.
    pub fn handle_tap(&mut self, park_id: CheckpointId) -> Result<ScanOutcome, PassportError> {
        if let Some(session) = &self.session {
            return Err(PassportError::SessionActive(session.park_id()));
        }
        let outcome = super::scanner::classify(
            &self.checkpoints,
            &self.tracker,
            &ScanInput::MarkerTap(park_id),
        );
        self.open_session_if_ready(&outcome);
        Ok(outcome)
    }

    /// Reset the QR debounce for a freshly opened scanner view.
    pub fn open_scanner(&mut self) {
        self.resolver.reopen();
    }

    /// Handle one decoded QR frame from the camera feed.
    ///
    /// Returns `Ok(None)` for frames debounced after a match this episode.
    pub fn handle_qr_frame(&mut self, payload: &str) -> Result<Option<ScanOutcome>, PassportError> {
        if let Some(session) = &self.session {
            return Err(PassportError::SessionActive(session.park_id()));
        }
        let outcome = self
            .resolver
            .handle_frame(&self.checkpoints, &self.tracker, payload);
        if let Some(outcome) = &outcome {
            self.open_session_if_ready(outcome);
        }
        Ok(outcome)
    }

    /// Drain pending decoder frames, returning the first classified outcome.
    ///
    /// Called once per UI tick while the scanner view is open. Frames
    /// debounced after a match are skipped silently.
    pub fn pump_frames(
        &mut self,
        source: &mut dyn QrFrameSource,
    ) -> Result<Option<ScanOutcome>, PassportError> {
        while let Some(payload) = source.try_next_frame() {
            if let Some(outcome) = self.handle_qr_frame(&payload)? {
                return Ok(Some(outcome));
            }
        }
        Ok(None)
    }

    fn open_session_if_ready(&mut self, outcome: &ScanOutcome) {
        if let ScanOutcome::SessionReady(checkpoint) = outcome {
            let questions = self.questionnaires.questions_for(checkpoint.id).to_vec();
            tracing::info!(
                park_id = checkpoint.id,
                questions = questions.len(),
                "questionnaire session opened"
            );
            self.session = Some(QuestionnaireSession::new(checkpoint.id, questions));
        }
    }

    /// The open questionnaire session, if any.
    pub fn active_session(&self) -> Option<&QuestionnaireSession> {
        self.session.as_ref()
    }

    /// Record an answer in the open session.
    pub fn record_response(&mut self, index: usize, answer: &str) -> Result<(), PassportError> {
        let session = self.session.as_mut().ok_or(PassportError::NoActiveSession)?;
        session.record_response(index, answer)
    }

    /// Submit the open session's questionnaire.
    ///
    /// On success the visit is marked in the tracker, queued for durable
    /// save, and the session is discarded. On any error the session stays
    /// open with its answers intact.
    pub fn submit(&mut self) -> Result<Progress, PassportError> {
        let session = self.session.as_ref().ok_or(PassportError::NoActiveSession)?;
        let visit = session.submit(self.user_id)?;

        self.tracker.mark_visited(visit.park_id)?;
        if let Some(handle) = &self.save_handle {
            handle.queue(visit);
        }
        self.session = None;

        let progress = self.tracker.progress();
        tracing::info!(
            completed = progress.completed,
            total = progress.total,
            "questionnaire submitted"
        );
        Ok(progress)
    }

    /// Discard the open session without recording anything.
    ///
    /// Returns false if no session was open.
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Current completion statistics.
    pub fn progress(&self) -> Progress {
        self.tracker.progress()
    }

    /// Home-screen summary with the optional program countdown.
    pub fn summary(&self, deadline: Option<NaiveDate>) -> PassportSummary {
        PassportSummary::new(self.tracker.progress(), deadline)
    }

    /// Badge states derived from current progress.
    pub fn badges(&self) -> Vec<BadgeStatus> {
        badge_statuses(self.tracker.progress())
    }

    /// Marker entries for the map surface, with visited flags.
    pub fn map_markers(&self) -> Vec<MapMarker> {
        project_markers(&self.checkpoints, &self.tracker)
    }
}
