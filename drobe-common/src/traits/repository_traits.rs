// File: drobe-common/src/traits/repository_traits.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Error;
use crate::models::item::{Category, Item};
use crate::models::outfit::{CurrentOutfit, OutfitPicks, OutfitSlot};

/// Storage primitives for clothing items. Implementations keep each call
/// transaction-isolated; everything above this trait (ownership checks,
/// cascades, ordering) lives in the service layer.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, item: &Item) -> Result<(), Error>;
    async fn get(&self, item_id: Uuid) -> Result<Option<Item>, Error>;
    /// Full-row write keyed on `item_id`; `user_id` and `created_at` are
    /// never touched.
    async fn update(&self, item: &Item) -> Result<(), Error>;
    /// Full-row write that also clears, in the same transaction, any
    /// current-outfit slot of the item's owner still referencing it. Used
    /// when the item leaves the category its slot expects.
    async fn update_clearing_refs(&self, item: &Item) -> Result<(), Error>;
    /// Delete the item and clear, in the same transaction, any
    /// current-outfit slot of `user_id` referencing it.
    async fn delete(&self, user_id: &str, item_id: Uuid) -> Result<(), Error>;
    /// All items owned by `user_id`, in insertion order.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Item>, Error>;
    async fn list_for_user_in_category(
        &self,
        user_id: &str,
        category: Category,
    ) -> Result<Vec<Item>, Error>;
}

/// Storage primitives for the per-user current-outfit registry row. All
/// writes are atomic upserts keyed on `user_id`, so the row is created
/// lazily on first use and is never racy to initialize.
#[async_trait]
pub trait OutfitRepository: Send + Sync {
    async fn get_for_user(&self, user_id: &str) -> Result<Option<CurrentOutfit>, Error>;

    /// Set one slot (or clear it with `None`). Returns the registry row id.
    async fn upsert_slot(
        &self,
        user_id: &str,
        slot: OutfitSlot,
        item_id: Option<Uuid>,
    ) -> Result<Uuid, Error>;

    /// Set one slot only if it is currently empty; an existing selection is
    /// never overwritten (first-added-wins). Returns the registry row id.
    async fn adopt_slot_if_empty(
        &self,
        user_id: &str,
        slot: OutfitSlot,
        item_id: Uuid,
    ) -> Result<Uuid, Error>;

    /// Replace all four slots in one write. Returns the registry row id.
    async fn replace_all(&self, user_id: &str, picks: &OutfitPicks) -> Result<Uuid, Error>;
}
