// File: drobe-common/src/models/auth.rs

use serde::{Deserialize, Serialize};

/// The identity the auth collaborator resolved for the current request.
/// `subject` is the managed auth provider's stable user id and is the only
/// field the wardrobe core keys on.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub subject: String,
}

impl UserIdentity {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}
