// drobe-core/src/services/mod.rs

pub mod item_service;
pub mod outfit_service;

pub use item_service::ItemService;
pub use outfit_service::OutfitService;

use futures_util::future::try_join_all;

use drobe_common::models::{Item, ItemWithUrl, UserIdentity};
use drobe_common::traits::auth_traits::AuthProvider;
use drobe_common::traits::storage_traits::BlobStore;
use crate::Error;

/// Resolve the calling identity, or fail with `Unauthenticated`.
pub(crate) async fn require_identity(auth: &dyn AuthProvider) -> Result<UserIdentity, Error> {
    match auth.current_identity().await? {
        Some(identity) => Ok(identity),
        None => Err(Error::Unauthenticated),
    }
}

/// Attach the display URL for an item's image, if it has one.
pub(crate) async fn with_url(blobs: &dyn BlobStore, item: Item) -> Result<ItemWithUrl, Error> {
    let url = match item.image {
        Some(blob_id) => blobs.resolve_url(blob_id).await?,
        None => None,
    };
    Ok(ItemWithUrl { item, url })
}

/// Resolve URLs for a whole list concurrently. Output order matches input
/// order, so reordering done upstream survives.
pub(crate) async fn with_urls(
    blobs: &dyn BlobStore,
    items: Vec<Item>,
) -> Result<Vec<ItemWithUrl>, Error> {
    try_join_all(items.into_iter().map(|item| with_url(blobs, item))).await
}
