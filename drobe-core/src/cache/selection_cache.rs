// drobe-core/src/cache/selection_cache.rs
//
// Ephemeral highlight state for the category browsing views. Nothing here
// is persisted; the owning view holds the cache for one session and drops
// it on teardown.

use std::collections::HashMap;

use uuid::Uuid;

use drobe_common::models::{Category, ItemWithUrl};

/// Which item is highlighted per category while the user browses.
#[derive(Debug, Default)]
pub struct SelectionCache {
    selected_by_category: HashMap<Category, Uuid>,
}

impl SelectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, category: Category) -> Option<Uuid> {
        self.selected_by_category.get(&category).copied()
    }

    pub fn select(&mut self, category: Category, item_id: Uuid) {
        self.selected_by_category.insert(category, item_id);
    }

    pub fn clear(&mut self, category: Category) {
        self.selected_by_category.remove(&category);
    }

    pub fn reset(&mut self) {
        self.selected_by_category.clear();
    }
}

/// Seed-once guard for a single browsing view.
///
/// The first non-empty item list a view receives seeds the highlight from
/// its head (the server already front-loads the current choice). Later
/// refreshes of the same category must not re-seed, or they would clobber
/// whatever the user has highlighted since. Navigating the view to another
/// category re-arms the guard for that category.
#[derive(Debug, Default)]
pub struct BrowseSession {
    seeded: Option<Category>,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_from_first(
        &mut self,
        cache: &mut SelectionCache,
        category: Category,
        items: &[ItemWithUrl],
    ) {
        let Some(first) = items.first() else {
            return;
        };
        if self.seeded != Some(category) {
            cache.select(category, first.item.item_id);
            self.seeded = Some(category);
        }
    }
}
