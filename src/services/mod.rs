//! Narrow contracts for the external collaborators the core consumes:
//! map surface, camera/QR decoder, location service, and auth provider.

pub mod auth;
pub mod location;
pub mod map;
pub mod scanner_feed;
pub mod types;

pub use auth::AuthProvider;
pub use location::{initial_viewport, LocationProvider, DEFAULT_VIEWPORT_DELTA};
pub use map::{project_markers, MapSurface};
pub use scanner_feed::{ChannelFrameSource, QrFrameSource};
pub use types::{
    Coordinates, MapEvent, MapMarker, ProviderCredential, ServiceError, UserIdentity, Viewport,
};
