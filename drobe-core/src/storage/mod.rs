// drobe-core/src/storage/mod.rs

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use drobe_common::traits::storage_traits::BlobStore;
use crate::Error;

#[derive(Deserialize)]
struct UploadUrlResponse {
    upload_url: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    storage_id: Uuid,
}

#[derive(Deserialize)]
struct BlobUrlResponse {
    url: String,
}

/// Blob store client speaking the storage service's HTTP surface: short
/// lived upload URLs, multipart upload, and blob-id to display-URL lookup.
pub struct HttpBlobStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBlobStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Push file bytes to a previously issued upload URL and return the
    /// storage id of the stored blob. A non-success response surfaces its
    /// body verbatim as the upload error message.
    pub async fn upload(
        &self,
        upload_url: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Uuid, Error> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = multipart::Form::new().part("file", part);

        let resp = self.client.post(upload_url).multipart(form).send().await?;
        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            let msg = if body.is_empty() {
                "Upload failed".to_string()
            } else {
                body
            };
            return Err(Error::Upload(msg));
        }

        let parsed = resp.json::<UploadResponse>().await?;
        Ok(parsed.storage_id)
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn generate_upload_url(&self) -> Result<String, Error> {
        let resp = self
            .client
            .post(format!("{}/upload-urls", self.base_url))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Error::Upload(format!(
                "upload URL request returned HTTP {}",
                resp.status()
            )));
        }

        let parsed = resp.json::<UploadUrlResponse>().await?;
        Ok(parsed.upload_url)
    }

    async fn resolve_url(&self, blob_id: Uuid) -> Result<Option<String>, Error> {
        let resp = self
            .client
            .get(format!("{}/blobs/{}/url", self.base_url, blob_id))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(Error::Upload(format!(
                "blob URL lookup returned HTTP {}",
                resp.status()
            )));
        }

        let parsed = resp.json::<BlobUrlResponse>().await?;
        Ok(Some(parsed.url))
    }
}
