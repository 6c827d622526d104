//! Scan resolution: classifying marker taps and decoded QR payloads.

use crate::catalog::CheckpointCatalog;

use super::tracker::VisitTracker;
use super::types::{ScanInput, ScanOutcome};

/// Classify a scan input against the catalog and visit state.
///
/// Pure and synchronous: no retries, no state changes. `InvalidCode` and
/// `AlreadyCompleted` are terminal user-visible outcomes; `SessionReady`
/// tells the caller to open a fresh questionnaire session.
pub fn classify(
    catalog: &CheckpointCatalog,
    tracker: &VisitTracker,
    input: &ScanInput,
) -> ScanOutcome {
    let checkpoint = match input {
        ScanInput::MarkerTap(id) => catalog.checkpoint_by_id(*id),
        ScanInput::QrPayload(payload) => catalog.checkpoint_by_qr(payload),
    };

    let Some(checkpoint) = checkpoint else {
        tracing::debug!(?input, "scan matched no checkpoint");
        return ScanOutcome::InvalidCode;
    };

    if tracker.is_visited(checkpoint.id) {
        return ScanOutcome::AlreadyCompleted(checkpoint.id);
    }

    ScanOutcome::SessionReady(checkpoint.clone())
}

/// Debounces duplicate camera frames within one open-scanner episode.
///
/// A live QR decoder keeps emitting the same payload while the code is in
/// view. The resolver acts on the first frame that matches a catalog entry
/// and ignores everything after, until the scanner view is reopened.
/// Unknown payloads do not latch, so the user can keep aiming.
#[derive(Debug, Default)]
pub struct ScanResolver {
    latched: bool,
}

impl ScanResolver {
    /// Create a resolver for a freshly opened scanner view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the debounce when the scanner view is reopened.
    pub fn reopen(&mut self) {
        self.latched = false;
    }

    /// Whether a match has already been emitted this episode.
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Classify one decoded frame, debounced.
    ///
    /// Returns `None` for frames ignored after a match has been emitted.
    pub fn handle_frame(
        &mut self,
        catalog: &CheckpointCatalog,
        tracker: &VisitTracker,
        payload: &str,
    ) -> Option<ScanOutcome> {
        if self.latched {
            return None;
        }
        let outcome = classify(catalog, tracker, &ScanInput::QrPayload(payload.to_string()));
        if !matches!(outcome, ScanOutcome::InvalidCode) {
            self.latched = true;
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (CheckpointCatalog, VisitTracker) {
        let catalog = CheckpointCatalog::builtin();
        let tracker = VisitTracker::new(&catalog);
        (catalog, tracker)
    }

    #[test]
    fn test_unknown_id_is_invalid() {
        let (catalog, tracker) = fixtures();
        let outcome = classify(&catalog, &tracker, &ScanInput::MarkerTap(99));
        assert_eq!(outcome, ScanOutcome::InvalidCode);
    }

    #[test]
    fn test_unknown_payload_is_invalid() {
        let (catalog, tracker) = fixtures();
        let outcome = classify(
            &catalog,
            &tracker,
            &ScanInput::QrPayload("bogus".to_string()),
        );
        assert_eq!(outcome, ScanOutcome::InvalidCode);
    }

    #[test]
    fn test_unvisited_checkpoint_opens_session() {
        let (catalog, tracker) = fixtures();
        match classify(&catalog, &tracker, &ScanInput::MarkerTap(1)) {
            ScanOutcome::SessionReady(cp) => assert_eq!(cp.id, 1),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_visited_checkpoint_reports_already_completed() {
        let (catalog, mut tracker) = fixtures();
        tracker.mark_visited(1).unwrap();
        // Both input shapes resolve to the same park.
        assert_eq!(
            classify(&catalog, &tracker, &ScanInput::MarkerTap(1)),
            ScanOutcome::AlreadyCompleted(1)
        );
        assert_eq!(
            classify(
                &catalog,
                &tracker,
                &ScanInput::QrPayload("pp-kaylas-playground".to_string())
            ),
            ScanOutcome::AlreadyCompleted(1)
        );
    }

    #[test]
    fn test_duplicate_frames_ignored_after_match() {
        let (catalog, tracker) = fixtures();
        let mut resolver = ScanResolver::new();

        let first = resolver.handle_frame(&catalog, &tracker, "pp-friendship-park");
        assert!(matches!(first, Some(ScanOutcome::SessionReady(_))));

        // The decoder keeps streaming the same payload.
        assert_eq!(
            resolver.handle_frame(&catalog, &tracker, "pp-friendship-park"),
            None
        );
        assert_eq!(
            resolver.handle_frame(&catalog, &tracker, "pp-lions-legend-park"),
            None
        );
    }

    #[test]
    fn test_unknown_frames_do_not_latch() {
        let (catalog, tracker) = fixtures();
        let mut resolver = ScanResolver::new();

        assert_eq!(
            resolver.handle_frame(&catalog, &tracker, "glare-misread"),
            Some(ScanOutcome::InvalidCode)
        );
        // A later good frame still gets through.
        let next = resolver.handle_frame(&catalog, &tracker, "pp-cascade-creek-park");
        assert!(matches!(next, Some(ScanOutcome::SessionReady(_))));
    }

    #[test]
    fn test_reopen_resets_debounce() {
        let (catalog, tracker) = fixtures();
        let mut resolver = ScanResolver::new();

        resolver.handle_frame(&catalog, &tracker, "pp-friendship-park");
        assert!(resolver.is_latched());

        resolver.reopen();
        let again = resolver.handle_frame(&catalog, &tracker, "pp-friendship-park");
        assert!(matches!(again, Some(ScanOutcome::SessionReady(_))));
    }
}
