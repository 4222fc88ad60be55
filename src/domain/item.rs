//! Item capability contracts
//!
//! The engine sees host items only through these narrow traits. A host
//! adapter decides which capabilities a given material exposes; the engine
//! checks presence and material before asking for any of them.

use super::EnchantmentId;

/// A possibly-absent game item
pub trait ItemHandle {
    /// `false` for the "no item" sentinel
    fn is_present(&self) -> bool;

    /// `true` for the empty material kind (air / empty slot)
    fn is_empty_material(&self) -> bool;

    /// Material name for display, if the host exposes one
    fn material(&self) -> Option<&str> {
        None
    }

    /// Durability facet, present only for materials that can take damage
    fn as_damageable(&mut self) -> Option<&mut dyn DamageableView>;

    /// Enchantment facet, present only for materials that can hold enchantments
    fn as_enchantable(&mut self) -> Option<&mut dyn EnchantableView>;
}

/// Mutable durability damage of an item
pub trait DamageableView {
    fn damage(&self) -> u32;

    fn set_damage(&mut self, value: u32);
}

/// Mutable `{enchantment -> level}` set of an item
pub trait EnchantableView {
    fn level(&self, id: &EnchantmentId) -> Option<u32>;

    /// Insert or overwrite, without any range check
    fn set_level(&mut self, id: &EnchantmentId, level: u32);

    /// Remove; absent ids are ignored
    fn remove(&mut self, id: &EnchantmentId);
}

/// `None` is the absent item.
impl<T: ItemHandle> ItemHandle for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(ItemHandle::is_present)
    }

    fn is_empty_material(&self) -> bool {
        self.as_ref().map_or(true, ItemHandle::is_empty_material)
    }

    fn material(&self) -> Option<&str> {
        self.as_ref().and_then(ItemHandle::material)
    }

    fn as_damageable(&mut self) -> Option<&mut dyn DamageableView> {
        self.as_mut().and_then(ItemHandle::as_damageable)
    }

    fn as_enchantable(&mut self) -> Option<&mut dyn EnchantableView> {
        self.as_mut().and_then(ItemHandle::as_enchantable)
    }
}

/// Whether an item is absent or empty; the shared first guard of every
/// mutation.
pub(crate) fn is_air<I: ItemHandle + ?Sized>(item: &I) -> bool {
    !item.is_present() || item.is_empty_material()
}
