// File: drobe-common/src/models/mod.rs
pub mod auth;
pub mod item;
pub mod outfit;

pub use auth::UserIdentity;
pub use item::{Category, Color, Item, ItemFilter, ItemPatch, ItemWithUrl, NewItem, Season};
pub use outfit::{CurrentOutfit, OutfitPicks, OutfitSlot, OutfitView};
