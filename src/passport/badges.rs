//! Passport achievement badges.
//!
//! Badges are derived purely from the completed-visit count, so there is
//! nothing extra to persist: re-deriving from progress always agrees with
//! the visit records.

use serde::Serialize;

use super::types::Progress;

/// A passport badge definition.
///
/// Serialize-only: badges are derived for display, never parsed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Display name
    pub name: &'static str,
    /// Icon identifier used by the presentation layer
    pub icon: &'static str,
    /// Completed visits required to earn the badge
    pub threshold: usize,
}

/// Badge definitions in ascending threshold order.
pub const BADGES: [Badge; 4] = [
    Badge {
        name: "Explorer",
        icon: "trail-sign",
        threshold: 1,
    },
    Badge {
        name: "Adventurer",
        icon: "footsteps",
        threshold: 4,
    },
    Badge {
        name: "Nature Lover",
        icon: "leaf",
        threshold: 7,
    },
    Badge {
        name: "Park Champion",
        icon: "trophy",
        threshold: 10,
    },
];

/// A badge with earned state and progress toward its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BadgeStatus {
    pub badge: Badge,
    pub earned: bool,
    /// Fraction of the threshold reached, clamped to [0, 1]
    pub progress: f64,
}

/// Evaluate every badge against current passport progress.
pub fn badge_statuses(progress: Progress) -> Vec<BadgeStatus> {
    BADGES
        .iter()
        .map(|badge| {
            let earned = progress.completed >= badge.threshold;
            let fraction = if badge.threshold == 0 {
                1.0
            } else {
                (progress.completed as f64 / badge.threshold as f64).min(1.0)
            };
            BadgeStatus {
                badge: *badge,
                earned,
                progress: fraction,
            }
        })
        .collect()
}
