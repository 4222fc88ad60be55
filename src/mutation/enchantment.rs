//! Enchantment mutations
//!
//! Two entry points sharing the same guards and the same apply/remove
//! primitive:
//! - `apply_safe` for ordinary users, bounded by the descriptor's range
//! - `apply_unsafe` for privileged callers, unbounded
//!
//! Level 0 means "remove"; it never stores a zero level.

use crate::domain::item::is_air;
use crate::domain::{EnchantResult, EnchantmentDescriptor, ItemHandle};

/// Apply an enchantment within its declared safe range.
///
/// A `None` descriptor stands for an unknown or unresolved enchantment.
/// Level 0 lies below every safe range, so removal is privileged.
pub fn apply_safe<I: ItemHandle + ?Sized>(
    item: &mut I,
    enchantment: Option<&EnchantmentDescriptor>,
    level: u32,
) -> EnchantResult {
    let enchantment = match classify(item, enchantment) {
        Ok(enchantment) => enchantment,
        Err(result) => return result,
    };

    if !enchantment.is_safe_level(level) {
        return EnchantResult::UnsafeEnchantLevel;
    }

    apply_unsafe(item, Some(enchantment), level)
}

/// Apply an enchantment at any level.
///
/// The level is written even when it lies outside the descriptor's range;
/// `SuccessUnsafe` only tells the caller that it did.
pub fn apply_unsafe<I: ItemHandle + ?Sized>(
    item: &mut I,
    enchantment: Option<&EnchantmentDescriptor>,
    level: u32,
) -> EnchantResult {
    let enchantment = match classify(item, enchantment) {
        Ok(enchantment) => enchantment,
        Err(result) => return result,
    };

    let Some(enchantable) = item.as_enchantable() else {
        return EnchantResult::IllegalItem;
    };

    if level == 0 {
        enchantable.remove(enchantment.id());
        return EnchantResult::SuccessRemove;
    }

    enchantable.set_level(enchantment.id(), level);

    if enchantment.is_safe_level(level) {
        EnchantResult::Success
    } else {
        EnchantResult::SuccessUnsafe
    }
}

/// Outcome for a typed level below zero, on either path.
///
/// Runs the shared guards, then refuses the level: no item stores a
/// negative level, so nothing is mutated.
pub fn reject_negative_level<I: ItemHandle + ?Sized>(
    item: &I,
    enchantment: Option<&EnchantmentDescriptor>,
) -> EnchantResult {
    match classify(item, enchantment) {
        Ok(_) => EnchantResult::UnsafeEnchantLevel,
        Err(result) => result,
    }
}

/// Guards shared by both paths: item first, then descriptor.
fn classify<'e, I: ItemHandle + ?Sized>(
    item: &I,
    enchantment: Option<&'e EnchantmentDescriptor>,
) -> Result<&'e EnchantmentDescriptor, EnchantResult> {
    if is_air(item) {
        return Err(EnchantResult::AirItem);
    }
    enchantment.ok_or(EnchantResult::IllegalEnchantment)
}
