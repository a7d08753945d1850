// File: drobe-common/src/models/item.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::outfit::OutfitSlot;

/// Fixed clothing categories. Jackets exist as a wardrobe category but do
/// not participate in outfit composition (there is no jackets slot).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Jackets,
    Tops,
    Bottoms,
    Shoes,
    Accessories,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Jackets => "jackets",
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
        }
    }

    /// The outfit slot this category feeds, if any.
    pub fn outfit_slot(self) -> Option<OutfitSlot> {
        match self {
            Category::Jackets => None,
            Category::Tops => Some(OutfitSlot::Tops),
            Category::Bottoms => Some(OutfitSlot::Bottoms),
            Category::Shoes => Some(OutfitSlot::Shoes),
            Category::Accessories => Some(OutfitSlot::Accessories),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jackets" => Ok(Category::Jackets),
            "tops" => Ok(Category::Tops),
            "bottoms" => Ok(Category::Bottoms),
            "shoes" => Ok(Category::Shoes),
            "accessories" => Ok(Category::Accessories),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" => Ok(Season::Autumn),
            "winter" => Ok(Season::Winter),
            _ => Err(format!("Unknown season: {}", s)),
        }
    }
}

/// The fixed 14-value color palette users can tag items with.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Gray,
    Navy,
    Blue,
    Red,
    Green,
    Yellow,
    Brown,
    Beige,
    Pink,
    Purple,
    Orange,
    Olive,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Gray => "gray",
            Color::Navy => "navy",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Brown => "brown",
            Color::Beige => "beige",
            Color::Pink => "pink",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Olive => "olive",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Color {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            "gray" => Ok(Color::Gray),
            "navy" => Ok(Color::Navy),
            "blue" => Ok(Color::Blue),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "brown" => Ok(Color::Brown),
            "beige" => Ok(Color::Beige),
            "pink" => Ok(Color::Pink),
            "purple" => Ok(Color::Purple),
            "orange" => Ok(Color::Orange),
            "olive" => Ok(Color::Olive),
            _ => Err(format!("Unknown color: {}", s)),
        }
    }
}

/// A single clothing entry, owned by one user.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Item {
    pub item_id: Uuid,
    /// Identity subject of the owner; immutable after creation.
    pub user_id: String,
    pub category: Option<Category>,
    pub brand: Option<String>,
    pub season: Option<Season>,
    pub color: Option<Color>,
    pub size: Option<String>,
    /// Blob reference for the item photo, if one was uploaded.
    pub image: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    pub fn new(user_id: &str, fields: NewItem) -> Self {
        let now = Utc::now();
        Self {
            item_id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            category: fields.category,
            brand: fields.brand,
            season: fields.season,
            color: fields.color,
            size: fields.size,
            image: fields.image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a sparse patch: only fields the caller actually provided
    /// overwrite; everything else is left untouched.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(brand) = patch.brand {
            self.brand = Some(brand);
        }
        if let Some(season) = patch.season {
            self.season = Some(season);
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
        if let Some(size) = patch.size {
            self.size = Some(size);
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
        self.updated_at = Utc::now();
    }
}

/// Fields accepted when adding an item. All optional; ownership comes from
/// the authenticated identity, never from the caller.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NewItem {
    pub category: Option<Category>,
    pub brand: Option<String>,
    pub season: Option<Season>,
    pub color: Option<Color>,
    pub size: Option<String>,
    pub image: Option<Uuid>,
}

/// Sparse update: `None` means "leave the stored value alone".
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ItemPatch {
    pub category: Option<Category>,
    pub brand: Option<String>,
    pub season: Option<Season>,
    pub color: Option<Color>,
    pub size: Option<String>,
    pub image: Option<Uuid>,
}

/// Query filters for the wardrobe grid.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ItemFilter {
    pub search: Option<String>,
    pub season: Option<Season>,
    pub color: Option<Color>,
}

/// An item augmented with its resolved display URL (absent when the item
/// has no image, or the blob is gone).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ItemWithUrl {
    pub item: Item,
    pub url: Option<String>,
}
