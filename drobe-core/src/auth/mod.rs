// drobe-core/src/auth/mod.rs

use async_trait::async_trait;

use drobe_common::models::UserIdentity;
use drobe_common::traits::auth_traits::AuthProvider;
use crate::Error;

/// Identity source for one established session. The surrounding host (an
/// API gateway, a device session) verifies credentials with the managed
/// auth provider and hands the resolved subject here; the services only
/// ever ask "who is calling".
pub struct SessionAuth {
    identity: Option<UserIdentity>,
}

impl SessionAuth {
    /// A session signed in as `subject`.
    pub fn authenticated(subject: impl Into<String>) -> Self {
        Self {
            identity: Some(UserIdentity::new(subject)),
        }
    }

    /// A session with nobody signed in.
    pub fn anonymous() -> Self {
        Self { identity: None }
    }
}

#[async_trait]
impl AuthProvider for SessionAuth {
    async fn current_identity(&self) -> Result<Option<UserIdentity>, Error> {
        Ok(self.identity.clone())
    }
}
