//! Map surface seam: marker projection and tap events.

use crate::catalog::CheckpointCatalog;
use crate::passport::tracker::VisitTracker;

use super::types::{MapEvent, MapMarker};

/// Opaque rendering surface for checkpoint markers.
///
/// The core hands it marker entries and polls it for tap events; rendering
/// details (pins, callouts, clustering) are entirely the surface's concern.
pub trait MapSurface {
    /// Replace the displayed markers.
    fn set_markers(&mut self, markers: Vec<MapMarker>);

    /// Next pending user event, if any.
    fn poll_event(&mut self) -> Option<MapEvent>;
}

/// Project the catalog and visit state into map marker entries.
pub fn project_markers(catalog: &CheckpointCatalog, tracker: &VisitTracker) -> Vec<MapMarker> {
    catalog
        .list()
        .iter()
        .map(|cp| MapMarker {
            id: cp.id,
            latitude: cp.latitude,
            longitude: cp.longitude,
            title: cp.title.clone(),
            description: cp.description.clone(),
            visited: tracker.is_visited(cp.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_reflect_visit_state() {
        let catalog = CheckpointCatalog::builtin();
        let mut tracker = VisitTracker::new(&catalog);
        tracker.mark_visited(2).unwrap();

        let markers = project_markers(&catalog, &tracker);
        assert_eq!(markers.len(), 10);
        assert!(markers.iter().find(|m| m.id == 2).unwrap().visited);
        assert!(!markers.iter().find(|m| m.id == 3).unwrap().visited);
    }

    #[test]
    fn test_markers_carry_display_fields() {
        let catalog = CheckpointCatalog::builtin();
        let tracker = VisitTracker::new(&catalog);
        let markers = project_markers(&catalog, &tracker);
        let kayla = markers.iter().find(|m| m.id == 1).unwrap();
        assert_eq!(kayla.title, "Kayla's Playground");
        assert!(!kayla.description.is_empty());
    }
}
