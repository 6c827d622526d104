//! Static program data: park checkpoints and their questionnaires.
//!
//! Both catalogs are immutable process-wide data, owned by the application
//! and shared read-only by the passport components.

pub mod checkpoints;
pub mod qr;
pub mod questionnaires;
pub mod types;

// Re-exports for convenience
pub use checkpoints::CheckpointCatalog;
pub use questionnaires::QuestionnaireCatalog;
pub use types::{CatalogError, Checkpoint, CheckpointId, QuestionKind, QuizQuestion};
