//! Checkpoint catalog with id and QR token lookups.

use super::types::{CatalogError, Checkpoint, CheckpointId};

/// Read-only registry of the program's park checkpoints.
///
/// The catalog is defined once at startup and shared read-only afterwards.
/// Lookups are linear; the program covers ten parks, not ten thousand.
#[derive(Debug, Clone)]
pub struct CheckpointCatalog {
    checkpoints: Vec<Checkpoint>,
}

impl CheckpointCatalog {
    /// Build a catalog from the given checkpoints.
    ///
    /// Rejects duplicate ids and duplicate QR tokens, since both are used
    /// as lookup keys for scan resolution.
    pub fn new(checkpoints: Vec<Checkpoint>) -> Result<Self, CatalogError> {
        for (i, cp) in checkpoints.iter().enumerate() {
            for other in &checkpoints[..i] {
                if other.id == cp.id {
                    return Err(CatalogError::DuplicateId(cp.id));
                }
                if other.qr_token == cp.qr_token {
                    return Err(CatalogError::DuplicateQrToken(cp.qr_token.clone()));
                }
            }
        }
        Ok(Self { checkpoints })
    }

    /// The built-in catalog for the Franklin parks passport program.
    pub fn builtin() -> Self {
        Self {
            checkpoints: builtin_checkpoints(),
        }
    }

    /// Look up a checkpoint by id.
    pub fn checkpoint_by_id(&self, id: CheckpointId) -> Option<&Checkpoint> {
        self.checkpoints.iter().find(|cp| cp.id == id)
    }

    /// Look up a checkpoint by decoded QR payload.
    pub fn checkpoint_by_qr(&self, code: &str) -> Option<&Checkpoint> {
        self.checkpoints.iter().find(|cp| cp.qr_token == code)
    }

    /// All checkpoints, in catalog order.
    pub fn list(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Number of checkpoints in the catalog.
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Whether the catalog contains the given id.
    pub fn contains(&self, id: CheckpointId) -> bool {
        self.checkpoint_by_id(id).is_some()
    }
}

/// The ten parks of the passport program.
fn builtin_checkpoints() -> Vec<Checkpoint> {
    vec![
        Checkpoint::new(
            1,
            "Kayla's Playground",
            "All-accessible playground with rubberized surfaces and sensory panels",
            42.9089,
            -88.0403,
            "pp-kaylas-playground",
        ),
        Checkpoint::new(
            2,
            "Lions Legend Park",
            "Sports fields, the lions fountain, and a paved walking loop",
            42.9102,
            -88.0366,
            "pp-lions-legend-park",
        ),
        Checkpoint::new(
            3,
            "Cascade Creek Park",
            "Shaded creekside picnic areas and a fishing pier",
            42.8954,
            -88.0210,
            "pp-cascade-creek-park",
        ),
        Checkpoint::new(
            4,
            "Friendship Park",
            "Community gathering green with a bandshell and gardens",
            42.8888,
            -88.0075,
            "pp-friendship-park",
        ),
        Checkpoint::new(
            5,
            "Pleasant View Park",
            "Hilltop overlook, sledding hill, and prairie restoration",
            42.9173,
            -88.0492,
            "pp-pleasant-view-park",
        ),
        Checkpoint::new(
            6,
            "Ken Windl Park",
            "Neighborhood park with ball diamonds and a splash pad",
            42.8991,
            -88.0568,
            "pp-ken-windl-park",
        ),
        Checkpoint::new(
            7,
            "Woodland Trails Preserve",
            "Boardwalk loop through oak woodland and wetland",
            42.8842,
            -88.0321,
            "pp-woodland-trails",
        ),
        Checkpoint::new(
            8,
            "Christine Rathke Memorial Park",
            "Memorial grove, butterfly garden, and walking paths",
            42.9036,
            -87.9987,
            "pp-rathke-memorial-park",
        ),
        Checkpoint::new(
            9,
            "River Bend Landing",
            "Canoe launch and riverside nature play area",
            42.8797,
            -88.0148,
            "pp-river-bend-landing",
        ),
        Checkpoint::new(
            10,
            "Dr. Lynette Fox Memorial Park",
            "Arboretum plantings and an education pavilion",
            42.9211,
            -88.0269,
            "pp-lynette-fox-park",
        ),
    ]
}
