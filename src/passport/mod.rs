//! Passport state: visit tracking, scan resolution, questionnaire
//! sessions, badges, and the coordinating controller.

pub mod badges;
pub mod controller;
pub mod scanner;
pub mod session;
pub mod tracker;
pub mod types;

pub use badges::{badge_statuses, Badge, BadgeStatus, BADGES};
pub use controller::PassportController;
pub use scanner::{classify, ScanResolver};
pub use session::QuestionnaireSession;
pub use tracker::VisitTracker;
pub use types::{
    ParkVisit, PassportError, PassportSummary, Progress, ScanInput, ScanOutcome,
};
