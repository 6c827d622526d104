//! Checkpoint and questionnaire type definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier for a park checkpoint within the program catalog.
pub type CheckpointId = u32;

/// A park location eligible for a visit-and-quiz interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Unique identifier within the catalog
    pub id: CheckpointId,
    /// Display name
    pub title: String,
    /// Short display description
    pub description: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Token matched against decoded QR payloads
    pub qr_token: String,
}

impl Checkpoint {
    /// Create a new checkpoint record.
    pub fn new(
        id: CheckpointId,
        title: impl Into<String>,
        description: impl Into<String>,
        latitude: f64,
        longitude: f64,
        qr_token: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            latitude,
            longitude,
            qr_token: qr_token.into(),
        }
    }
}

/// One question within a park's questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Display prompt
    pub prompt: String,
    /// Answer kind
    pub kind: QuestionKind,
}

impl QuizQuestion {
    /// Create a free-text question.
    pub fn free_text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            kind: QuestionKind::FreeText,
        }
    }

    /// Create a multiple-choice question with the offered options.
    pub fn multiple_choice(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            kind: QuestionKind::MultipleChoice {
                options: options.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Whether the given answer is acceptable for this question.
    ///
    /// Free-text accepts any non-empty answer; multiple-choice requires an
    /// answer matching one of the offered options exactly.
    pub fn accepts(&self, answer: &str) -> bool {
        if answer.trim().is_empty() {
            return false;
        }
        match &self.kind {
            QuestionKind::FreeText => true,
            QuestionKind::MultipleChoice { options } => options.iter().any(|o| o == answer),
        }
    }
}

/// Answer kind for a quiz question.
///
/// The options list lives inside the `MultipleChoice` variant, so a question
/// has exactly one of free-text behavior or an options list by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Free-form text answer
    FreeText,
    /// Answer must be one of the offered options (non-empty list)
    MultipleChoice { options: Vec<String> },
}

/// Catalog construction errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate checkpoint id {0}")]
    DuplicateId(CheckpointId),

    #[error("duplicate QR token {0:?}")]
    DuplicateQrToken(String),

    #[error("questionnaire set for checkpoint {0:?} is empty")]
    EmptyQuestionSet(Option<CheckpointId>),

    #[error("multiple-choice question {prompt:?} has no options")]
    EmptyOptions { prompt: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_accepts_any_nonempty() {
        let q = QuizQuestion::free_text("What was your favorite part?");
        assert!(q.accepts("The splash pad"));
        assert!(!q.accepts(""));
        assert!(!q.accepts("   "));
    }

    #[test]
    fn test_multiple_choice_accepts_only_offered_options() {
        let q = QuizQuestion::multiple_choice("Did you enjoy your visit?", ["Yes", "No"]);
        assert!(q.accepts("Yes"));
        assert!(q.accepts("No"));
        assert!(!q.accepts("Maybe"));
        assert!(!q.accepts(""));
    }
}
