// File: drobe-common/src/traits/auth_traits.rs

use async_trait::async_trait;

use crate::error::Error;
use crate::models::auth::UserIdentity;

/// The auth collaborator. The wardrobe core never validates tokens itself;
/// it only asks whoever embeds it for the identity behind the current
/// request. `Ok(None)` means the request is anonymous.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn current_identity(&self) -> Result<Option<UserIdentity>, Error>;
}
