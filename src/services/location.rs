//! One-shot device location for the initial map viewport.

use async_trait::async_trait;

use super::types::{Coordinates, ServiceError, Viewport};

/// Span used for the initial map viewport around the user's position.
pub const DEFAULT_VIEWPORT_DELTA: f64 = 0.01;

/// One-shot location fix provider.
///
/// Either resolves with a coordinate pair or fails with a permission /
/// availability error. The surrounding UI prompts the user to retry; this
/// layer never retries automatically.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Request the current device position.
    async fn current_position(&self) -> Result<Coordinates, ServiceError>;
}

/// Build the initial map viewport centered on the user's position.
///
/// Location is only used to aim the map; no passport invariant depends on
/// it, so a failure here leaves the rest of the screen functional.
pub async fn initial_viewport(provider: &dyn LocationProvider) -> Result<Viewport, ServiceError> {
    let center = provider.current_position().await?;
    Ok(Viewport {
        center,
        latitude_delta: DEFAULT_VIEWPORT_DELTA,
        longitude_delta: DEFAULT_VIEWPORT_DELTA,
    })
}
