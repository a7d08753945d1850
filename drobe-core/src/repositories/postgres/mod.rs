// drobe-core/src/repositories/postgres/mod.rs

pub mod items;
pub mod outfits;

pub use items::PostgresItemRepository;
pub use outfits::PostgresOutfitRepository;
