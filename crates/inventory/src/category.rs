//! Category rules: how one simulated day changes an item.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Name of the plain, degrading item.
pub const NORMAL: &str = "normal";
/// Name of the cheese that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";
/// Name of the concert ticket whose value peaks right before the show.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Quality ceiling the rising rules check before applying a day's increments.
pub const MAX_QUALITY: i64 = 50;

/// Behavioral classification of an item.
///
/// Selected by exact match on the item's name. Anything not recognized falls
/// back to `Unrecognized`, whose rule leaves the item untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Normal,
    AgedBrie,
    BackstagePass,
    Unrecognized,
}

impl Category {
    pub fn from_name(name: &str) -> Self {
        match name {
            NORMAL => Category::Normal,
            AGED_BRIE => Category::AgedBrie,
            BACKSTAGE_PASS => Category::BackstagePass,
            _ => Category::Unrecognized,
        }
    }

    /// Apply one day's update to `item`.
    pub fn apply(self, item: &mut Item) {
        match self {
            Category::Normal => age_normal(item),
            Category::AgedBrie => age_brie(item),
            Category::BackstagePass => age_backstage_pass(item),
            Category::Unrecognized => {}
        }
    }
}

fn age_normal(item: &mut Item) {
    item.days = item.days.saturating_sub(1);
    if item.quality == 0 {
        return;
    }
    item.quality = item.quality.saturating_sub(1);
    // Past the sell-by date quality degrades twice as fast. Only the
    // day-start zero check guards the band, so quality 1 ends the day at -1.
    if item.days <= 0 {
        item.quality = item.quality.saturating_sub(1);
    }
}

fn age_brie(item: &mut Item) {
    item.days = item.days.saturating_sub(1);
    if item.quality >= MAX_QUALITY {
        return;
    }
    // Past the sell-by date brie ages twice as fast.
    if item.days <= 0 {
        item.quality += 1;
    }
    if item.quality < MAX_QUALITY {
        item.quality += 1;
    }
}

fn age_backstage_pass(item: &mut Item) {
    item.days = item.days.saturating_sub(1);
    if item.quality >= MAX_QUALITY {
        return;
    }
    if item.days < 0 {
        item.quality = 0;
        return;
    }
    // Increments are not re-checked against the ceiling until the next day.
    item.quality += 1;
    if item.days < 10 {
        item.quality += 1;
    }
    if item.days < 5 {
        item.quality += 1;
    }
}
