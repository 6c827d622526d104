//! Types shared across the external service seams.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::CheckpointId;

/// A geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Map viewport: a center with latitude/longitude spans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Coordinates,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// One marker entry handed to the map surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: CheckpointId,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub description: String,
    pub visited: bool,
}

/// Event emitted by the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    /// The user tapped a checkpoint marker
    MarkerTapped(CheckpointId),
}

/// A signed-in user identity from the auth provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: Uuid,
    pub display_name: String,
    pub email: Option<String>,
}

/// Credential handed over by the identity provider's sign-in flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCredential {
    pub id_token: String,
    pub access_token: Option<String>,
}

/// Errors surfaced by external services.
///
/// These are reported to the user with a retry affordance; the core never
/// silently proceeds without the dependent service and never retries on
/// its own.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("{service} unavailable: {reason}")]
    Unavailable { service: &'static str, reason: String },

    #[error("sign-in failed: {0}")]
    AuthFailed(String),
}
