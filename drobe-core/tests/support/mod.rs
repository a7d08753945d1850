// File: drobe-core/tests/support/mod.rs
//
// In-memory collaborators shared by the service tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use drobe_common::models::{Category, CurrentOutfit, Item, OutfitPicks, OutfitSlot};
use drobe_common::traits::repository_traits::{ItemRepository, OutfitRepository};
use drobe_common::traits::storage_traits::BlobStore;
use drobe_core::auth::SessionAuth;
use drobe_core::services::{ItemService, OutfitService};
use drobe_core::Error;

/// Route service tracing through the test writer. RUST_LOG picks the
/// level; repeated calls after the first are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Registry rows keyed by user id, shared between the item and the outfit
/// repositories the way the two tables share one database: the compound
/// item mutations clear slots under the same lock hold as the item write.
pub type OutfitRows = Arc<Mutex<HashMap<String, CurrentOutfit>>>;

/// Item storage on a plain Vec, which keeps insertion order the way the
/// real repository's created_at ordering does.
pub struct MemoryItemRepository {
    items: Mutex<Vec<Item>>,
    outfits: OutfitRows,
}

impl MemoryItemRepository {
    pub fn new(outfits: OutfitRows) -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            outfits,
        }
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn create(&self, item: &Item) -> Result<(), Error> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn get(&self, item_id: Uuid) -> Result<Option<Item>, Error> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.item_id == item_id)
            .cloned())
    }

    async fn update(&self, item: &Item) -> Result<(), Error> {
        let mut items = self.items.lock().unwrap();
        if let Some(stored) = items.iter_mut().find(|i| i.item_id == item.item_id) {
            *stored = item.clone();
        }
        Ok(())
    }

    async fn update_clearing_refs(&self, item: &Item) -> Result<(), Error> {
        let mut rows = self.outfits.lock().unwrap();
        let mut items = self.items.lock().unwrap();
        if let Some(stored) = items.iter_mut().find(|i| i.item_id == item.item_id) {
            *stored = item.clone();
        }
        clear_refs(&mut rows, &item.user_id, item.item_id);
        Ok(())
    }

    async fn delete(&self, user_id: &str, item_id: Uuid) -> Result<(), Error> {
        let mut rows = self.outfits.lock().unwrap();
        self.items.lock().unwrap().retain(|i| i.item_id != item_id);
        clear_refs(&mut rows, user_id, item_id);
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Item>, Error> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_for_user_in_category(
        &self,
        user_id: &str,
        category: Category,
    ) -> Result<Vec<Item>, Error> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.user_id == user_id && i.category == Some(category))
            .cloned()
            .collect())
    }
}

/// Registry storage over the shared rows.
pub struct MemoryOutfitRepository {
    outfits: OutfitRows,
}

impl MemoryOutfitRepository {
    pub fn new(outfits: OutfitRows) -> Self {
        Self { outfits }
    }
}

fn blank_outfit(user_id: &str) -> CurrentOutfit {
    let now = Utc::now();
    CurrentOutfit {
        outfit_id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        accessories: None,
        tops: None,
        bottoms: None,
        shoes: None,
        created_at: now,
        updated_at: now,
    }
}

fn set_slot(outfit: &mut CurrentOutfit, slot: OutfitSlot, item_id: Option<Uuid>) {
    match slot {
        OutfitSlot::Accessories => outfit.accessories = item_id,
        OutfitSlot::Tops => outfit.tops = item_id,
        OutfitSlot::Bottoms => outfit.bottoms = item_id,
        OutfitSlot::Shoes => outfit.shoes = item_id,
    }
    outfit.updated_at = Utc::now();
}

fn clear_refs(rows: &mut HashMap<String, CurrentOutfit>, user_id: &str, item_id: Uuid) {
    if let Some(outfit) = rows.get_mut(user_id) {
        for slot in OutfitSlot::ALL {
            if outfit.slot(slot) == Some(item_id) {
                set_slot(outfit, slot, None);
            }
        }
    }
}

#[async_trait]
impl OutfitRepository for MemoryOutfitRepository {
    async fn get_for_user(&self, user_id: &str) -> Result<Option<CurrentOutfit>, Error> {
        Ok(self.outfits.lock().unwrap().get(user_id).cloned())
    }

    async fn upsert_slot(
        &self,
        user_id: &str,
        slot: OutfitSlot,
        item_id: Option<Uuid>,
    ) -> Result<Uuid, Error> {
        let mut outfits = self.outfits.lock().unwrap();
        let outfit = outfits
            .entry(user_id.to_string())
            .or_insert_with(|| blank_outfit(user_id));
        set_slot(outfit, slot, item_id);
        Ok(outfit.outfit_id)
    }

    async fn adopt_slot_if_empty(
        &self,
        user_id: &str,
        slot: OutfitSlot,
        item_id: Uuid,
    ) -> Result<Uuid, Error> {
        let mut outfits = self.outfits.lock().unwrap();
        let outfit = outfits
            .entry(user_id.to_string())
            .or_insert_with(|| blank_outfit(user_id));
        if outfit.slot(slot).is_none() {
            set_slot(outfit, slot, Some(item_id));
        }
        Ok(outfit.outfit_id)
    }

    async fn replace_all(&self, user_id: &str, picks: &OutfitPicks) -> Result<Uuid, Error> {
        let mut outfits = self.outfits.lock().unwrap();
        let outfit = outfits
            .entry(user_id.to_string())
            .or_insert_with(|| blank_outfit(user_id));
        for slot in OutfitSlot::ALL {
            set_slot(outfit, slot, picks.get(slot));
        }
        Ok(outfit.outfit_id)
    }
}

/// Blob store that hands out stable fake URLs for registered blob ids.
#[derive(Default)]
pub struct MemoryBlobStore {
    urls: Mutex<HashMap<Uuid, String>>,
}

impl MemoryBlobStore {
    /// Register a blob and return the URL it will resolve to.
    pub fn put(&self, blob_id: Uuid) -> String {
        let url = format!("https://blobs.test/{}", blob_id);
        self.urls.lock().unwrap().insert(blob_id, url.clone());
        url
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn generate_upload_url(&self) -> Result<String, Error> {
        Ok("https://blobs.test/upload".to_string())
    }

    async fn resolve_url(&self, blob_id: Uuid) -> Result<Option<String>, Error> {
        Ok(self.urls.lock().unwrap().get(&blob_id).cloned())
    }
}

/// One backend shared by every service a test builds, so different users
/// and services observe the same stored state.
pub struct TestBackend {
    pub items: Arc<MemoryItemRepository>,
    pub outfits: Arc<MemoryOutfitRepository>,
    pub blobs: Arc<MemoryBlobStore>,
}

impl TestBackend {
    pub fn new() -> Self {
        init_tracing();
        let rows: OutfitRows = Arc::new(Mutex::new(HashMap::new()));
        Self {
            items: Arc::new(MemoryItemRepository::new(rows.clone())),
            outfits: Arc::new(MemoryOutfitRepository::new(rows)),
            blobs: Arc::new(MemoryBlobStore::default()),
        }
    }

    pub fn item_service(&self, subject: &str) -> ItemService {
        ItemService::new(
            self.items.clone(),
            self.outfits.clone(),
            Arc::new(SessionAuth::authenticated(subject)),
            self.blobs.clone(),
        )
    }

    pub fn anonymous_item_service(&self) -> ItemService {
        ItemService::new(
            self.items.clone(),
            self.outfits.clone(),
            Arc::new(SessionAuth::anonymous()),
            self.blobs.clone(),
        )
    }

    pub fn outfit_service(&self, subject: &str) -> OutfitService {
        OutfitService::new(
            self.items.clone(),
            self.outfits.clone(),
            Arc::new(SessionAuth::authenticated(subject)),
            self.blobs.clone(),
        )
    }

    pub fn anonymous_outfit_service(&self) -> OutfitService {
        OutfitService::new(
            self.items.clone(),
            self.outfits.clone(),
            Arc::new(SessionAuth::anonymous()),
            self.blobs.clone(),
        )
    }
}
