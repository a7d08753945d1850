// File: drobe-common/src/traits/storage_traits.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Error;

/// The blob-store collaborator: mints single-use upload URLs and resolves
/// stored blob ids to display URLs. `Ok(None)` from `resolve_url` means the
/// blob is unknown (deleted or never finished uploading).
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn generate_upload_url(&self) -> Result<String, Error>;
    async fn resolve_url(&self, blob_id: Uuid) -> Result<Option<String>, Error>;
}
