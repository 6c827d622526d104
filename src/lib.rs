//! ParkPass - Municipal Parks Passport
//!
//! Core logic for a parks passport program: a catalog of park checkpoints
//! with QR codes, per-park questionnaires, scan resolution with duplicate
//! frame debouncing, visit tracking with badges, and SQLite-backed
//! persistence with a retrying background save worker.

pub mod catalog;
pub mod passport;
pub mod services;
pub mod storage;

// Re-export commonly used types
pub use catalog::{CheckpointCatalog, QuestionnaireCatalog};
pub use passport::controller::PassportController;
pub use passport::types::{ParkVisit, PassportError, Progress, ScanOutcome};
pub use storage::config::AppConfig;
pub use storage::database::Database;
