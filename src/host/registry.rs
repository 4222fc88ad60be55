//! Enchantment registry
//!
//! Canonical id -> descriptor lookup, performed by the command layer before
//! calling the mutation engine.

use std::collections::HashMap;

use crate::domain::{DomainError, EnchantmentDescriptor, EnchantmentId};

/// Host lookup of enchantment descriptors
pub trait EnchantmentRegistry {
    fn get(&self, id: &EnchantmentId) -> Option<&EnchantmentDescriptor>;
}

/// `(id, start level, max level)` for every vanilla enchantment
const VANILLA: &[(&str, u32, u32)] = &[
    ("minecraft:protection", 1, 4),
    ("minecraft:fire_protection", 1, 4),
    ("minecraft:feather_falling", 1, 4),
    ("minecraft:blast_protection", 1, 4),
    ("minecraft:projectile_protection", 1, 4),
    ("minecraft:respiration", 1, 3),
    ("minecraft:aqua_affinity", 1, 1),
    ("minecraft:thorns", 1, 3),
    ("minecraft:depth_strider", 1, 3),
    ("minecraft:frost_walker", 1, 2),
    ("minecraft:binding_curse", 1, 1),
    ("minecraft:sharpness", 1, 5),
    ("minecraft:smite", 1, 5),
    ("minecraft:bane_of_arthropods", 1, 5),
    ("minecraft:knockback", 1, 2),
    ("minecraft:fire_aspect", 1, 2),
    ("minecraft:looting", 1, 3),
    ("minecraft:sweeping", 1, 3),
    ("minecraft:efficiency", 1, 5),
    ("minecraft:silk_touch", 1, 1),
    ("minecraft:unbreaking", 1, 3),
    ("minecraft:fortune", 1, 3),
    ("minecraft:power", 1, 5),
    ("minecraft:punch", 1, 2),
    ("minecraft:flame", 1, 1),
    ("minecraft:infinity", 1, 1),
    ("minecraft:luck_of_the_sea", 1, 3),
    ("minecraft:lure", 1, 3),
    ("minecraft:loyalty", 1, 3),
    ("minecraft:impaling", 1, 5),
    ("minecraft:riptide", 1, 3),
    ("minecraft:channeling", 1, 1),
    ("minecraft:multishot", 1, 1),
    ("minecraft:quick_charge", 1, 3),
    ("minecraft:piercing", 1, 4),
    ("minecraft:mending", 1, 1),
    ("minecraft:vanishing_curse", 1, 1),
    ("minecraft:soul_speed", 1, 3),
];

/// Fixed registry held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    descriptors: HashMap<EnchantmentId, EnchantmentDescriptor>,
}

impl StaticRegistry {
    /// Build from descriptors; later duplicates replace earlier ones
    pub fn new(descriptors: impl IntoIterator<Item = EnchantmentDescriptor>) -> Self {
        Self {
            descriptors: descriptors
                .into_iter()
                .map(|d| (d.id().clone(), d))
                .collect(),
        }
    }

    /// Build from `(id, start level, max level)` rows
    pub fn from_levels(rows: &[(&str, u32, u32)]) -> Result<Self, DomainError> {
        let descriptors = rows
            .iter()
            .map(|&(id, start, max)| EnchantmentDescriptor::new(id.parse()?, start, max))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(descriptors))
    }

    /// The vanilla enchantment table
    pub fn vanilla() -> Self {
        Self::from_levels(VANILLA).expect("Invalid VANILLA enchantment table")
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl EnchantmentRegistry for StaticRegistry {
    fn get(&self, id: &EnchantmentId) -> Option<&EnchantmentDescriptor> {
        self.descriptors.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::config::BUNDLED_ALIASES;

    #[test]
    fn test_vanilla_lookup() {
        let registry = StaticRegistry::vanilla();
        assert_eq!(registry.len(), VANILLA.len());

        let sharpness = registry.get(&"minecraft:sharpness".parse().unwrap()).unwrap();
        assert_eq!(sharpness.start_level(), 1);
        assert_eq!(sharpness.max_level(), 5);

        assert!(registry.get(&"minecraft:telekinesis".parse().unwrap()).is_none());
    }

    #[test]
    fn test_from_levels_rejects_bad_rows() {
        assert!(matches!(
            StaticRegistry::from_levels(&[("Bad Id", 1, 1)]),
            Err(DomainError::InvalidEnchantmentId { .. })
        ));
        assert!(matches!(
            StaticRegistry::from_levels(&[("minecraft:lure", 2, 1)]),
            Err(DomainError::InvalidLevelRange { .. })
        ));
    }

    #[test]
    fn test_every_bundled_alias_has_a_descriptor() {
        let registry = StaticRegistry::vanilla();
        let table = AliasTable::from_json(BUNDLED_ALIASES).unwrap();

        for group in table.groups() {
            assert!(registry.get(group.id()).is_some(), "no descriptor for {}", group.id());
        }
    }
}
