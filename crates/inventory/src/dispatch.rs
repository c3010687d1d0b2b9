//! Dispatcher: advances items by whole simulated days.

use crate::item::Item;

/// Age every item by one day, in input order.
///
/// Each item is updated by the rule of its own category; items never affect
/// each other. Unrecognized items are passed through unchanged.
pub fn update_quality<'a, I>(items: I)
where
    I: IntoIterator<Item = &'a mut Item>,
{
    for item in items {
        let category = item.category();
        category.apply(item);
    }
}

/// Age every item by `days` days.
pub fn advance_days(items: &mut [Item], days: u32) {
    for _ in 0..days {
        update_quality(items.iter_mut());
    }
}
