//! Common test utilities

#![allow(dead_code)]

use item_forge::host::MemoryItem;
use item_forge::{AliasTable, EnchantmentDescriptor, EnchantmentId};

/// Canonical id from a literal
pub fn id(raw: &str) -> EnchantmentId {
    EnchantmentId::new(raw).expect("valid enchantment id")
}

/// `sharpness`, safe range 1..=5
pub fn sharpness() -> EnchantmentDescriptor {
    EnchantmentDescriptor::new(id("sharpness"), 1, 5).expect("valid descriptor")
}

/// Table with a single smite group
pub fn smite_table() -> AliasTable {
    AliasTable::from_json(r#"{ "undeaddamage|smite": "minecraft:smite" }"#)
        .expect("valid alias table")
}

/// Every kind of item the in-memory host can hold, including the absent one
pub fn item_zoo() -> Vec<Option<MemoryItem>> {
    vec![
        None,
        Some(MemoryItem::air()),
        Some(MemoryItem::block("AIR")),
        Some(MemoryItem::block("stone")),
        Some(MemoryItem::book("book")),
        Some(MemoryItem::tool("golden_hoe", 17)),
    ]
}
