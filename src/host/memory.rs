//! In-memory host
//!
//! Plain-data items and players implementing the capability contracts.
//! Used by the console binary and by tests in place of a game engine.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

use crate::domain::{
    CommandSender, DamageableView, EnchantableView, EnchantmentId, ItemHandle,
};

/// Material name of the empty slot
pub const AIR: &str = "air";

/// Storage slots of a player inventory (hotbar is 0..9)
pub const INVENTORY_SIZE: usize = 36;

/// Health of a freshly created player
pub const MAX_HEALTH: f64 = 20.0;

/// Durability facet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durability {
    damage: u32,
}

impl DamageableView for Durability {
    fn damage(&self) -> u32 {
        self.damage
    }

    fn set_damage(&mut self, value: u32) {
        self.damage = value;
    }
}

/// Enchantment facet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Enchantments(BTreeMap<EnchantmentId, u32>);

impl EnchantableView for Enchantments {
    fn level(&self, id: &EnchantmentId) -> Option<u32> {
        self.0.get(id).copied()
    }

    fn set_level(&mut self, id: &EnchantmentId, level: u32) {
        self.0.insert(id.clone(), level);
    }

    fn remove(&mut self, id: &EnchantmentId) {
        self.0.remove(id);
    }
}

/// An item stack held in memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryItem {
    material: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    durability: Option<Durability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enchantments: Option<Enchantments>,
}

impl MemoryItem {
    /// The empty material; no facets
    pub fn air() -> Self {
        Self {
            material: AIR.to_string(),
            durability: None,
            enchantments: None,
        }
    }

    /// Damageable and enchantable (swords, pickaxes, armor, bows)
    pub fn tool(material: impl Into<String>, damage: u32) -> Self {
        Self {
            material: material.into(),
            durability: Some(Durability { damage }),
            enchantments: Some(Enchantments::default()),
        }
    }

    /// No facets (stone, dirt, food)
    pub fn block(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            durability: None,
            enchantments: None,
        }
    }

    /// Enchantable but not damageable (books)
    pub fn book(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            durability: None,
            enchantments: Some(Enchantments::default()),
        }
    }

    /// Builder: pre-apply an enchantment (ignored without the facet)
    pub fn with_enchantment(mut self, id: &EnchantmentId, level: u32) -> Self {
        if let Some(enchantments) = self.enchantments.as_mut() {
            enchantments.set_level(id, level);
        }
        self
    }

    pub fn material_name(&self) -> &str {
        &self.material
    }

    /// Current damage, `None` without the durability facet
    pub fn damage(&self) -> Option<u32> {
        self.durability.as_ref().map(DamageableView::damage)
    }

    /// Current level of one enchantment
    pub fn enchantment_level(&self, id: &EnchantmentId) -> Option<u32> {
        self.enchantments.as_ref().and_then(|e| e.level(id))
    }

    /// All enchantments in id order
    pub fn enchantments(&self) -> impl Iterator<Item = (&EnchantmentId, u32)> {
        self.enchantments
            .iter()
            .flat_map(|e| e.0.iter().map(|(id, level)| (id, *level)))
    }
}

impl ItemHandle for MemoryItem {
    fn is_present(&self) -> bool {
        true
    }

    fn is_empty_material(&self) -> bool {
        self.material.eq_ignore_ascii_case(AIR)
    }

    fn material(&self) -> Option<&str> {
        Some(&self.material)
    }

    fn as_damageable(&mut self) -> Option<&mut dyn DamageableView> {
        self.durability
            .as_mut()
            .map(|d| d as &mut dyn DamageableView)
    }

    fn as_enchantable(&mut self) -> Option<&mut dyn EnchantableView> {
        self.enchantments
            .as_mut()
            .map(|e| e as &mut dyn EnchantableView)
    }
}

/// A player held in memory
#[derive(Debug, Clone)]
pub struct MemoryPlayer {
    id: Uuid,
    name: String,
    permissions: HashSet<String>,
    selected_slot: usize,
    inventory: Vec<Option<MemoryItem>>,
    health: f64,
}

impl MemoryPlayer {
    /// Player with an empty inventory and no permissions
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            permissions: HashSet::new(),
            selected_slot: 0,
            inventory: vec![None; INVENTORY_SIZE],
            health: MAX_HEALTH,
        }
    }

    /// Builder: grant a permission node (`*` grants everything)
    pub fn with_permission(mut self, node: impl Into<String>) -> Self {
        self.permissions.insert(node.into());
        self
    }

    /// Builder: place an item in a slot (out-of-range slots are ignored)
    pub fn with_item(mut self, slot: usize, item: MemoryItem) -> Self {
        if let Some(entry) = self.inventory.get_mut(slot) {
            *entry = Some(item);
        }
        self
    }

    /// Select the main-hand slot; returns `false` for slots outside the inventory
    pub fn select_slot(&mut self, slot: usize) -> bool {
        if slot < self.inventory.len() {
            self.selected_slot = slot;
            true
        } else {
            false
        }
    }

    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    pub fn slot(&self, slot: usize) -> Option<&MemoryItem> {
        self.inventory.get(slot).and_then(Option::as_ref)
    }

    pub fn main_hand(&self) -> Option<&MemoryItem> {
        self.slot(self.selected_slot)
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Occupied slots with their index
    pub fn items(&self) -> impl Iterator<Item = (usize, &MemoryItem)> {
        self.inventory
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.as_ref().map(|item| (i, item)))
    }
}

impl CommandSender for MemoryPlayer {
    type Item = Option<MemoryItem>;

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.contains("*") || self.permissions.contains(node)
    }

    fn main_hand_mut(&mut self) -> &mut Self::Item {
        &mut self.inventory[self.selected_slot]
    }

    fn inventory_mut(&mut self) -> &mut [Self::Item] {
        &mut self.inventory
    }

    fn kill(&mut self) {
        self.health = 0.0;
    }
}
