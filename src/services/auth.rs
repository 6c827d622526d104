//! Authentication provider seam.
//!
//! Sign-in is a precondition gate before the passport screen is reachable;
//! the token exchange itself is entirely the provider's concern.

use async_trait::async_trait;

use super::types::{ProviderCredential, ServiceError, UserIdentity};

/// Exchanges a provider credential for a signed-in user identity.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Exchange the credential from the provider's sign-in flow.
    async fn sign_in(&self, credential: &ProviderCredential)
        -> Result<UserIdentity, ServiceError>;
}
