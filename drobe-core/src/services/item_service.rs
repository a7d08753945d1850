// drobe-core/src/services/item_service.rs

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use drobe_common::models::{Category, Item, ItemFilter, ItemPatch, ItemWithUrl, NewItem, UserIdentity};
use drobe_common::traits::auth_traits::AuthProvider;
use drobe_common::traits::repository_traits::{ItemRepository, OutfitRepository};
use drobe_common::traits::storage_traits::BlobStore;

use crate::selection;
use crate::services::{require_identity, with_url, with_urls};
use crate::Error;

/// Item CRUD and queries, all scoped to the authenticated caller.
pub struct ItemService {
    items: Arc<dyn ItemRepository>,
    outfits: Arc<dyn OutfitRepository>,
    auth: Arc<dyn AuthProvider>,
    blobs: Arc<dyn BlobStore>,
}

impl ItemService {
    pub fn new(
        items: Arc<dyn ItemRepository>,
        outfits: Arc<dyn OutfitRepository>,
        auth: Arc<dyn AuthProvider>,
        blobs: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            items,
            outfits,
            auth,
            blobs,
        }
    }

    /// Insert a new item owned by the caller. When the item arrives with a
    /// wearable category and no current choice occupies that slot yet, the
    /// item becomes the current choice (first added wins; an existing
    /// choice is never overwritten).
    pub async fn add(&self, fields: NewItem) -> Result<Uuid, Error> {
        let identity = require_identity(self.auth.as_ref()).await?;
        let item = Item::new(&identity.subject, fields);
        self.items.create(&item).await?;
        info!("added item {} for user '{}'", item.item_id, identity.subject);

        if let Some(slot) = item.category.and_then(|c| c.outfit_slot()) {
            self.outfits
                .adopt_slot_if_empty(&identity.subject, slot, item.item_id)
                .await?;
        }
        Ok(item.item_id)
    }

    /// Sparse update: only fields present in the patch overwrite. Changing
    /// the category away from a slot the item currently occupies clears
    /// that slot in the same write, so the registry never commits without
    /// the rewritten item.
    pub async fn update(&self, item_id: Uuid, patch: ItemPatch) -> Result<Uuid, Error> {
        let identity = require_identity(self.auth.as_ref()).await?;
        let mut item = self.owned_item(&identity, item_id).await?;

        let recategorized = matches!(patch.category, Some(new) if item.category != Some(new));
        let left_slot = item
            .category
            .filter(|old| recategorized && old.outfit_slot().is_some());

        item.apply(patch);
        match left_slot {
            Some(old) => {
                self.items.update_clearing_refs(&item).await?;
                info!(
                    "item {} left category '{}', current-outfit reference cleared",
                    item_id, old
                );
            }
            None => self.items.update(&item).await?,
        }
        Ok(item_id)
    }

    /// Delete an owned item. The delete clears any current-outfit slot
    /// pointing at the item in the same transaction, so the registry never
    /// holds a dangling reference and a failed delete leaves it untouched.
    pub async fn remove(&self, item_id: Uuid) -> Result<Uuid, Error> {
        let identity = require_identity(self.auth.as_ref()).await?;
        let item = self.owned_item(&identity, item_id).await?;

        self.items.delete(&identity.subject, item.item_id).await?;
        info!("removed item {} for user '{}'", item.item_id, identity.subject);
        Ok(item.item_id)
    }

    /// All of the caller's items in one category, current choice first,
    /// each with its display URL resolved.
    pub async fn list_by_category(&self, category: Category) -> Result<Vec<ItemWithUrl>, Error> {
        let identity = require_identity(self.auth.as_ref()).await?;
        debug!("list_by_category '{}' for user '{}'", category, identity.subject);

        let mut items = self
            .items
            .list_for_user_in_category(&identity.subject, category)
            .await?;

        let current = match category.outfit_slot() {
            Some(slot) => self
                .outfits
                .get_for_user(&identity.subject)
                .await?
                .and_then(|outfit| outfit.slot(slot)),
            None => None,
        };
        selection::front_load(&mut items, current, |item| item.item_id);

        with_urls(self.blobs.as_ref(), items).await
    }

    /// All of the caller's items, narrowed by the optional filters, each
    /// with its display URL resolved.
    pub async fn list_all_with_filters(
        &self,
        filter: ItemFilter,
    ) -> Result<Vec<ItemWithUrl>, Error> {
        let identity = require_identity(self.auth.as_ref()).await?;
        debug!("list_all_with_filters for user '{}'", identity.subject);

        let items = self
            .items
            .list_for_user(&identity.subject)
            .await?
            .into_iter()
            .filter(|item| matches_filter(item, &filter))
            .collect();

        with_urls(self.blobs.as_ref(), items).await
    }

    /// Point lookup with URL resolution. `None` when the id does not
    /// exist; `Forbidden` when it exists but belongs to someone else.
    pub async fn get_by_id_with_url(&self, item_id: Uuid) -> Result<Option<ItemWithUrl>, Error> {
        let identity = require_identity(self.auth.as_ref()).await?;

        let Some(item) = self.items.get(item_id).await? else {
            return Ok(None);
        };
        if item.user_id != identity.subject {
            return Err(Error::Forbidden(format!(
                "item {} belongs to another user",
                item_id
            )));
        }
        Ok(Some(with_url(self.blobs.as_ref(), item).await?))
    }

    /// Ask the blob store for a fresh short-lived upload URL.
    pub async fn generate_upload_url(&self) -> Result<String, Error> {
        require_identity(self.auth.as_ref()).await?;
        self.blobs.generate_upload_url().await
    }

    async fn owned_item(&self, identity: &UserIdentity, item_id: Uuid) -> Result<Item, Error> {
        let item = self
            .items
            .get(item_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("item {}", item_id)))?;
        if item.user_id != identity.subject {
            return Err(Error::Forbidden(format!(
                "item {} belongs to another user",
                item_id
            )));
        }
        Ok(item)
    }
}

/// Exact season/color match when given, plus AND-semantics token search
/// over the brand/season/color haystack.
fn matches_filter(item: &Item, filter: &ItemFilter) -> bool {
    if let Some(season) = filter.season {
        if item.season != Some(season) {
            return false;
        }
    }
    if let Some(color) = filter.color {
        if item.color != Some(color) {
            return false;
        }
    }
    if let Some(search) = &filter.search {
        let haystack = search_haystack(item);
        let matches = search
            .split_whitespace()
            .all(|token| haystack.contains(&token.to_lowercase()));
        if !matches {
            return false;
        }
    }
    true
}

/// Brand, season and color concatenated back to back, lowercased. No
/// separator: a token may run across the field boundaries.
fn search_haystack(item: &Item) -> String {
    let mut haystack = String::new();
    if let Some(brand) = &item.brand {
        haystack.push_str(&brand.to_lowercase());
    }
    if let Some(season) = item.season {
        haystack.push_str(season.as_str());
    }
    if let Some(color) = item.color {
        haystack.push_str(color.as_str());
    }
    haystack
}
