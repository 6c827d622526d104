//! Questionnaire catalog keyed by checkpoint id, with a default set.

use std::collections::HashMap;

use super::types::{CatalogError, CheckpointId, QuestionKind, QuizQuestion};

/// Mapping from checkpoint id to its ordered question set.
///
/// The default set is a separate, explicit field rather than a magic key in
/// the map, so a numeric id can never collide with it. `questions_for` never
/// fails: parks without a tailored set get the default set.
#[derive(Debug, Clone)]
pub struct QuestionnaireCatalog {
    sets: HashMap<CheckpointId, Vec<QuizQuestion>>,
    default_set: Vec<QuizQuestion>,
}

impl QuestionnaireCatalog {
    /// Build a questionnaire catalog.
    ///
    /// Every set (including the default) must be non-empty, and every
    /// multiple-choice question must offer at least one option.
    pub fn new(
        sets: HashMap<CheckpointId, Vec<QuizQuestion>>,
        default_set: Vec<QuizQuestion>,
    ) -> Result<Self, CatalogError> {
        validate_set(None, &default_set)?;
        for (id, set) in &sets {
            validate_set(Some(*id), set)?;
        }
        Ok(Self { sets, default_set })
    }

    /// The built-in questionnaires for the passport program.
    pub fn builtin() -> Self {
        Self {
            sets: builtin_sets(),
            default_set: default_questions(),
        }
    }

    /// Questions for the given park, falling back to the default set.
    ///
    /// Callers must not assume a fixed length across parks.
    pub fn questions_for(&self, park_id: CheckpointId) -> &[QuizQuestion] {
        self.sets
            .get(&park_id)
            .map(Vec::as_slice)
            .unwrap_or(&self.default_set)
    }

    /// The default question set used for parks without a tailored set.
    pub fn default_set(&self) -> &[QuizQuestion] {
        &self.default_set
    }
}

fn validate_set(id: Option<CheckpointId>, set: &[QuizQuestion]) -> Result<(), CatalogError> {
    if set.is_empty() {
        return Err(CatalogError::EmptyQuestionSet(id));
    }
    for q in set {
        if let QuestionKind::MultipleChoice { options } = &q.kind {
            if options.is_empty() {
                return Err(CatalogError::EmptyOptions {
                    prompt: q.prompt.clone(),
                });
            }
        }
    }
    Ok(())
}

/// The three questions asked at any park without a tailored set.
fn default_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::multiple_choice("Did you enjoy your visit today?", ["Yes", "Somewhat", "No"]),
        QuizQuestion::free_text("What was your favorite part of this park?"),
        QuizQuestion::multiple_choice(
            "How likely are you to visit again?",
            ["Very likely", "Maybe", "Unlikely"],
        ),
    ]
}

fn builtin_sets() -> HashMap<CheckpointId, Vec<QuizQuestion>> {
    let mut sets = HashMap::new();

    // Kayla's Playground: accessibility feedback for the parks department.
    sets.insert(
        1,
        vec![
            QuizQuestion::multiple_choice(
                "Which accessible feature did you try?",
                ["Ramp play structure", "Sensory panels", "Adaptive swings"],
            ),
            QuizQuestion::multiple_choice(
                "Was the playground surface easy to get around on?",
                ["Yes", "No"],
            ),
            QuizQuestion::free_text("What would make the playground even better?"),
        ],
    );

    sets.insert(
        7,
        vec![
            QuizQuestion::free_text("Which animal or plant did you spot from the boardwalk?"),
            QuizQuestion::multiple_choice("Was the trail loop well marked?", ["Yes", "Mostly", "No"]),
        ],
    );

    sets.insert(
        8,
        vec![
            QuizQuestion::multiple_choice("Did you find the butterfly garden?", ["Yes", "No"]),
            QuizQuestion::free_text("Share a favorite moment from your walk."),
        ],
    );

    sets
}
