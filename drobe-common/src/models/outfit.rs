// File: drobe-common/src/models/outfit.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::item::{Category, ItemWithUrl};

/// The four outfit slots. Jackets deliberately has no slot: outfits are
/// composed of accessories, tops, bottoms and shoes only.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OutfitSlot {
    Accessories,
    Tops,
    Bottoms,
    Shoes,
}

impl OutfitSlot {
    pub const ALL: [OutfitSlot; 4] = [
        OutfitSlot::Accessories,
        OutfitSlot::Tops,
        OutfitSlot::Bottoms,
        OutfitSlot::Shoes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutfitSlot::Accessories => "accessories",
            OutfitSlot::Tops => "tops",
            OutfitSlot::Bottoms => "bottoms",
            OutfitSlot::Shoes => "shoes",
        }
    }

    /// The item category a slot accepts.
    pub fn category(self) -> Category {
        match self {
            OutfitSlot::Accessories => Category::Accessories,
            OutfitSlot::Tops => Category::Tops,
            OutfitSlot::Bottoms => Category::Bottoms,
            OutfitSlot::Shoes => Category::Shoes,
        }
    }
}

impl fmt::Display for OutfitSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutfitSlot {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accessories" => Ok(OutfitSlot::Accessories),
            "tops" => Ok(OutfitSlot::Tops),
            "bottoms" => Ok(OutfitSlot::Bottoms),
            "shoes" => Ok(OutfitSlot::Shoes),
            _ => Err(format!("Unknown outfit slot: {}", s)),
        }
    }
}

/// The per-user singleton registry row: at most one per user, one optional
/// item reference per slot.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentOutfit {
    pub outfit_id: Uuid,
    pub user_id: String,
    pub accessories: Option<Uuid>,
    pub tops: Option<Uuid>,
    pub bottoms: Option<Uuid>,
    pub shoes: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CurrentOutfit {
    pub fn slot(&self, slot: OutfitSlot) -> Option<Uuid> {
        match slot {
            OutfitSlot::Accessories => self.accessories,
            OutfitSlot::Tops => self.tops,
            OutfitSlot::Bottoms => self.bottoms,
            OutfitSlot::Shoes => self.shoes,
        }
    }
}

/// One candidate item id per slot; the payload of a whole-row registry
/// replace (randomize writes all four at once).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct OutfitPicks {
    pub accessories: Option<Uuid>,
    pub tops: Option<Uuid>,
    pub bottoms: Option<Uuid>,
    pub shoes: Option<Uuid>,
}

impl OutfitPicks {
    pub fn get(&self, slot: OutfitSlot) -> Option<Uuid> {
        match slot {
            OutfitSlot::Accessories => self.accessories,
            OutfitSlot::Tops => self.tops,
            OutfitSlot::Bottoms => self.bottoms,
            OutfitSlot::Shoes => self.shoes,
        }
    }

    pub fn set(&mut self, slot: OutfitSlot, item_id: Option<Uuid>) {
        match slot {
            OutfitSlot::Accessories => self.accessories = item_id,
            OutfitSlot::Tops => self.tops = item_id,
            OutfitSlot::Bottoms => self.bottoms = item_id,
            OutfitSlot::Shoes => self.shoes = item_id,
        }
    }
}

/// The fully resolved outfit as the UI renders it: each slot either absent
/// or the item record with its display URL.
#[derive(Debug, Serialize, Clone, Default)]
pub struct OutfitView {
    pub accessories: Option<ItemWithUrl>,
    pub tops: Option<ItemWithUrl>,
    pub bottoms: Option<ItemWithUrl>,
    pub shoes: Option<ItemWithUrl>,
}

impl OutfitView {
    pub fn slot(&self, slot: OutfitSlot) -> Option<&ItemWithUrl> {
        match slot {
            OutfitSlot::Accessories => self.accessories.as_ref(),
            OutfitSlot::Tops => self.tops.as_ref(),
            OutfitSlot::Bottoms => self.bottoms.as_ref(),
            OutfitSlot::Shoes => self.shoes.as_ref(),
        }
    }
}
