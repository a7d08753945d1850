// drobe-core/src/repositories/mod.rs

pub mod postgres;

pub use postgres::items::PostgresItemRepository;
pub use postgres::outfits::PostgresOutfitRepository;
