//! Inventory item update engine.
//!
//! This crate contains the nightly quality rules for the shop's inventory,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod dispatch;
pub mod item;

pub use category::{AGED_BRIE, BACKSTAGE_PASS, Category, MAX_QUALITY, NORMAL};
pub use dispatch::{advance_days, update_quality};
pub use item::{Item, ItemRecord};
