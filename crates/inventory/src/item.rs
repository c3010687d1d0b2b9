use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Item on the shop floor.
///
/// The category is derived from the name once, at construction, and never
/// changes afterwards. `days` and `quality` are only mutated by the item's
/// category rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct Item {
    name: String,
    category: Category,
    pub(crate) days: i64,
    pub(crate) quality: i64,
}

/// Plain `{name, days, quality}` record, the input shape of an item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub days: i64,
    pub quality: i64,
}

impl Item {
    /// Create an item. No validation is performed on `days` or `quality`.
    pub fn new(name: impl Into<String>, days: i64, quality: i64) -> Self {
        let name = name.into();
        Self {
            category: Category::from_name(&name),
            name,
            days,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Days left to sell the item in (negative once the sale window has passed).
    pub fn days_remaining(&self) -> i64 {
        self.days
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Self::new(record.name, record.days, record.quality)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {} days left, quality is {}",
            self.name, self.days, self.quality
        )
    }
}
