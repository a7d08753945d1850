// drobe-core/src/cache/mod.rs

pub mod selection_cache;

pub use selection_cache::{BrowseSession, SelectionCache};
