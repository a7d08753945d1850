// drobe-core/src/services/outfit_service.rs

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use drobe_common::models::{
    Category, CurrentOutfit, Item, ItemWithUrl, OutfitPicks, OutfitSlot, OutfitView,
};
use drobe_common::traits::auth_traits::AuthProvider;
use drobe_common::traits::repository_traits::{ItemRepository, OutfitRepository};
use drobe_common::traits::storage_traits::BlobStore;

use crate::selection;
use crate::services::{require_identity, with_url};
use crate::Error;

/// Reads and validated writes against the caller's current outfit.
pub struct OutfitService {
    items: Arc<dyn ItemRepository>,
    outfits: Arc<dyn OutfitRepository>,
    auth: Arc<dyn AuthProvider>,
    blobs: Arc<dyn BlobStore>,
}

impl OutfitService {
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

    /// The caller's outfit with every slot resolved to its item and display
    /// URL. Users who never made a selection get the all-empty view. The
    /// four slots resolve concurrently.
    pub async fn get_current_with_urls(&self) -> Result<OutfitView, Error> {
        let identity = require_identity(self.auth.as_ref()).await?;
        debug!("get_current_with_urls for user '{}'", identity.subject);

        let Some(outfit) = self.outfits.get_for_user(&identity.subject).await? else {
            return Ok(OutfitView::default());
        };

        let (accessories, tops, bottoms, shoes) = tokio::try_join!(
            self.resolve_slot(&outfit, OutfitSlot::Accessories),
            self.resolve_slot(&outfit, OutfitSlot::Tops),
            self.resolve_slot(&outfit, OutfitSlot::Bottoms),
            self.resolve_slot(&outfit, OutfitSlot::Shoes),
        )?;

        Ok(OutfitView {
            accessories,
            tops,
            bottoms,
            shoes,
        })
    }

    /// Point one slot at an owned item of the matching category, or clear
    /// it with `None`. The only user-facing write path into the registry,
    /// and the only one that validates.
    pub async fn set_current(
        &self,
        slot: OutfitSlot,
        item_id: Option<Uuid>,
    ) -> Result<Uuid, Error> {
        let identity = require_identity(self.auth.as_ref()).await?;

        if let Some(item_id) = item_id {
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
            if item.category != Some(slot.category()) {
                return Err(Error::CategoryMismatch(format!(
                    "item {} is not a '{}' item",
                    item_id,
                    slot.category()
                )));
            }
        }

        let outfit_id = self
            .outfits
            .upsert_slot(&identity.subject, slot, item_id)
            .await?;
        info!(
            "set current {} = {:?} for user '{}'",
            slot, item_id, identity.subject
        );
        Ok(outfit_id)
    }

    /// Reroll the whole outfit: one uniform random pick per slot, drawn
    /// from the caller's items of that category. Slots whose category has
    /// no items come back empty, clearing any previous pick. All four
    /// draws are independent.
    pub async fn randomize_current(&self) -> Result<Uuid, Error> {
        let identity = require_identity(self.auth.as_ref()).await?;
        let user = identity.subject.as_str();

        let (accessories, tops, bottoms, shoes) = tokio::try_join!(
            self.items.list_for_user_in_category(user, Category::Accessories),
            self.items.list_for_user_in_category(user, Category::Tops),
            self.items.list_for_user_in_category(user, Category::Bottoms),
            self.items.list_for_user_in_category(user, Category::Shoes),
        )?;

        // ThreadRng is not Send, so the draws happen in a plain block
        // between the two awaits.
        let picks = {
            let mut rng = rand::rng();
            OutfitPicks {
                accessories: pick_id(&accessories, &mut rng),
                tops: pick_id(&tops, &mut rng),
                bottoms: pick_id(&bottoms, &mut rng),
                shoes: pick_id(&shoes, &mut rng),
            }
        };

        let outfit_id = self.outfits.replace_all(user, &picks).await?;
        info!("randomized outfit for user '{}'", user);
        Ok(outfit_id)
    }

    async fn resolve_slot(
        &self,
        outfit: &CurrentOutfit,
        slot: OutfitSlot,
    ) -> Result<Option<ItemWithUrl>, Error> {
        let Some(item_id) = outfit.slot(slot) else {
            return Ok(None);
        };
        let Some(item) = self.items.get(item_id).await? else {
            // A slot pointing at a missing item renders as empty.
            warn!("outfit slot '{}' references missing item {}", slot, item_id);
            return Ok(None);
        };
        Ok(Some(with_url(self.blobs.as_ref(), item).await?))
    }
}

fn pick_id<R: Rng>(items: &[Item], rng: &mut R) -> Option<Uuid> {
    selection::pick_random(items, rng).map(|item| item.item_id)
}
