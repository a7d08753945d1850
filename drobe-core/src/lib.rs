// drobe-core/src/lib.rs

pub mod db;
pub mod repositories;
pub mod auth;
pub mod storage;
pub mod selection;
pub mod cache;
pub mod services;

pub use db::Database;
pub use drobe_common::error::Error;
