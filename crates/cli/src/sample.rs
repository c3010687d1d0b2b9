use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASS, Item, NORMAL};

/// Stock used when no inventory file is given.
pub fn sample_inventory() -> Vec<Item> {
    vec![
        Item::new(NORMAL, 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new(NORMAL, 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new(BACKSTAGE_PASS, 10, 49),
        Item::new(BACKSTAGE_PASS, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}
