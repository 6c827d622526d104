//! Integration tests for the complete passport flow.
//!
//! Tests the end-to-end path:
//! 1. Scan a park (marker tap or QR frame)
//! 2. Answer the park's questionnaire
//! 3. Submit and verify progress
//! 4. Persist through the background saver and hydrate a fresh controller

use std::sync::Arc;

use uuid::Uuid;

use parkpass::catalog::{CheckpointCatalog, QuestionKind, QuestionnaireCatalog};
use parkpass::passport::{PassportController, PassportError, ScanOutcome};
use parkpass::storage::{spawn, MemoryVisitStore, SaverConfig, StoreError, VisitStore};
use parkpass::{AppConfig, ParkVisit};

fn new_controller(user: Uuid) -> PassportController {
    PassportController::new(
        Arc::new(CheckpointCatalog::builtin()),
        Arc::new(QuestionnaireCatalog::builtin()),
        user,
    )
}

/// Answer every question in the open session with a valid response.
fn answer_all(controller: &mut PassportController) {
    let answers: Vec<(usize, String)> = controller
        .active_session()
        .expect("session should be open")
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| match &q.kind {
            QuestionKind::FreeText => (i, "The splash pad and the shady picnic spots".to_string()),
            QuestionKind::MultipleChoice { options } => (i, options[0].clone()),
        })
        .collect();
    for (i, text) in answers {
        controller.record_response(i, &text).unwrap();
    }
}

#[test]
fn first_visit_from_tap_to_stamp() {
    let mut controller = new_controller(Uuid::new_v4());

    let outcome = controller.handle_tap(1).unwrap();
    let checkpoint = match outcome {
        ScanOutcome::SessionReady(cp) => cp,
        other => panic!("expected a session, got {other:?}"),
    };
    assert_eq!(checkpoint.title, "Kayla's Playground");

    // Park 1 has its own tailored question set.
    assert_eq!(controller.active_session().unwrap().questions().len(), 3);

    answer_all(&mut controller);
    let progress = controller.submit().unwrap();
    assert_eq!((progress.completed, progress.total), (1, 10));
    assert_eq!(progress.ratio(), 0.1);

    // Both scan shapes now report the stamp.
    assert_eq!(
        controller.handle_tap(1).unwrap(),
        ScanOutcome::AlreadyCompleted(1)
    );
    controller.open_scanner();
    assert_eq!(
        controller.handle_qr_frame("pp-kaylas-playground").unwrap(),
        Some(ScanOutcome::AlreadyCompleted(1))
    );
}

#[test]
fn unknown_inputs_never_open_a_session() {
    let mut controller = new_controller(Uuid::new_v4());

    assert_eq!(controller.handle_tap(99).unwrap(), ScanOutcome::InvalidCode);

    controller.open_scanner();
    assert_eq!(
        controller.handle_qr_frame("not-a-park-code").unwrap(),
        Some(ScanOutcome::InvalidCode)
    );

    assert!(controller.active_session().is_none());
    assert_eq!(controller.progress().completed, 0);
}

#[test]
fn incomplete_submission_leaves_everything_intact() {
    let mut controller = new_controller(Uuid::new_v4());
    controller.handle_tap(4).unwrap();

    let total = controller.active_session().unwrap().questions().len();
    controller.record_response(0, "Yes").unwrap();

    let err = controller.submit().unwrap_err();
    match err {
        PassportError::IncompleteSubmission { missing } => {
            assert_eq!(missing, (1..total).collect::<Vec<_>>());
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Session survives the failed submit and can be completed.
    assert!(controller.active_session().is_some());
    assert_eq!(controller.progress().completed, 0);
    answer_all(&mut controller);
    controller.submit().unwrap();
    assert_eq!(controller.progress().completed, 1);
}

#[test]
fn parks_without_tailored_questions_use_the_default_set() {
    let questionnaires = QuestionnaireCatalog::builtin();
    // Park 4 has no tailored set; park 8 does.
    assert_eq!(
        questionnaires.questions_for(4),
        questionnaires.default_set()
    );
    assert_ne!(
        questionnaires.questions_for(8),
        questionnaires.default_set()
    );
    assert_eq!(questionnaires.questions_for(8).len(), 2);
}

#[test]
fn full_passport_earns_every_badge() {
    let mut controller = new_controller(Uuid::new_v4());

    for id in 1..=10 {
        assert!(matches!(
            controller.handle_tap(id).unwrap(),
            ScanOutcome::SessionReady(_)
        ));
        answer_all(&mut controller);
        controller.submit().unwrap();
    }

    let progress = controller.progress();
    assert!(progress.is_complete());
    assert!(controller.badges().iter().all(|b| b.earned));

    let summary = controller.summary(None);
    assert_eq!(summary.parks_to_go, 0);
}

/// Store wrapper so the test can inspect what the save worker persisted.
struct SharedStore(Arc<MemoryVisitStore>);

impl VisitStore for SharedStore {
    fn save(&self, visit: &ParkVisit) -> Result<(), StoreError> {
        self.0.save(visit)
    }

    fn load_all(&self, user_id: Uuid) -> Result<Vec<ParkVisit>, StoreError> {
        self.0.load_all(user_id)
    }
}

#[tokio::test]
async fn submissions_persist_and_hydrate_a_fresh_controller() {
    let user = Uuid::new_v4();
    let store = Arc::new(MemoryVisitStore::new());
    // Retry policy flows from configuration, as in the real application.
    let (handle, worker) = spawn(
        Box::new(SharedStore(store.clone())),
        SaverConfig::from(&AppConfig::default().saving),
    );

    let mut controller = new_controller(user);
    controller.attach_saver(handle);

    for id in [2, 7] {
        controller.handle_tap(id).unwrap();
        answer_all(&mut controller);
        controller.submit().unwrap();
    }

    // Dropping the controller drops its save handle; the worker drains.
    drop(controller);
    worker.await.unwrap();

    let visits = store.load_all(user).unwrap();
    assert_eq!(visits.len(), 2);
    assert!(visits.iter().all(|v| v.completed));
    assert!(visits.iter().any(|v| v.park_id == 7 && !v.responses.is_empty()));

    // A fresh controller hydrated from the store picks up the stamps.
    let mut restored = new_controller(user);
    restored.hydrate(&visits);
    assert_eq!(restored.progress().completed, 2);
    assert_eq!(
        restored.handle_tap(7).unwrap(),
        ScanOutcome::AlreadyCompleted(7)
    );
}
