//! In-progress questionnaire session for one checkpoint.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::catalog::{CheckpointId, QuizQuestion};

use super::types::{ParkVisit, PassportError};

/// Transient answer state for the currently active park questionnaire.
///
/// One session exists per successful scan; it is discarded on cancel or
/// after a successful submit. Answers are validated against the question
/// at record time: empty answers and multiple-choice answers outside the
/// offered options are rejected.
#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    park_id: CheckpointId,
    questions: Vec<QuizQuestion>,
    responses: BTreeMap<usize, String>,
}

impl QuestionnaireSession {
    /// Open a session for the given park with its question set.
    pub fn new(park_id: CheckpointId, questions: Vec<QuizQuestion>) -> Self {
        Self {
            park_id,
            questions,
            responses: BTreeMap::new(),
        }
    }

    /// The checkpoint under quiz.
    pub fn park_id(&self) -> CheckpointId {
        self.park_id
    }

    /// The ordered question set for this session.
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Record (or overwrite) the answer for a question index.
    pub fn record_response(&mut self, index: usize, answer: &str) -> Result<(), PassportError> {
        let question = self
            .questions
            .get(index)
            .ok_or(PassportError::QuestionOutOfRange {
                index,
                len: self.questions.len(),
            })?;

        if answer.trim().is_empty() {
            return Err(PassportError::EmptyAnswer(index));
        }
        if !question.accepts(answer) {
            return Err(PassportError::AnswerNotOffered {
                index,
                answer: answer.to_string(),
            });
        }

        self.responses.insert(index, answer.to_string());
        Ok(())
    }

    /// The recorded answer for a question index, if any.
    pub fn response(&self, index: usize) -> Option<&str> {
        self.responses.get(&index).map(String::as_str)
    }

    /// All recorded answers, keyed by question index.
    pub fn responses(&self) -> &BTreeMap<usize, String> {
        &self.responses
    }

    /// Question indices that still lack an answer, in display order.
    pub fn missing_indices(&self) -> Vec<usize> {
        (0..self.questions.len())
            .filter(|i| !self.responses.contains_key(i))
            .collect()
    }

    /// Whether every question has a non-empty recorded answer.
    pub fn is_complete(&self) -> bool {
        self.missing_indices().is_empty()
    }

    /// Validate completeness and build the durable visit record.
    ///
    /// Fails with `IncompleteSubmission` (listing every missing index) and
    /// changes nothing if any question is unanswered. On success the caller
    /// commits the visit to the tracker and store, then discards the session.
    pub fn submit(&self, user_id: Uuid) -> Result<ParkVisit, PassportError> {
        let missing = self.missing_indices();
        if !missing.is_empty() {
            return Err(PassportError::IncompleteSubmission { missing });
        }
        Ok(ParkVisit::new(user_id, self.park_id, self.responses.clone()))
    }
}
