//! Durability mutations
//!
//! Repair of single items and whole collections. Each call is terminal at
//! the first matching guard: absent/empty item, missing durability facet,
//! then the write.

use serde::Serialize;

use crate::domain::item::is_air;
use crate::domain::{ItemHandle, RepairResult};

/// Set an item's durability damage.
///
/// No upper bound is checked; the host is trusted to clamp out-of-range
/// values for its own materials.
pub fn set_durability<I: ItemHandle + ?Sized>(item: &mut I, damage: u32) -> RepairResult {
    if is_air(item) {
        return RepairResult::AirItem;
    }

    let Some(damageable) = item.as_damageable() else {
        return RepairResult::IllegalItem;
    };

    damageable.set_damage(damage);
    RepairResult::Success
}

/// Fully repair an item (damage 0)
pub fn repair_item<I: ItemHandle + ?Sized>(item: &mut I) -> RepairResult {
    set_durability(item, 0)
}

/// Fully repair every item of a collection, in order.
///
/// Summarizes to `PartialSuccess` if any member failed, whatever the reason.
/// Use [`repair_collection_detailed`] to see which members failed.
pub fn repair_collection<'a, C, I>(items: C) -> RepairResult
where
    C: IntoIterator<Item = &'a mut I>,
    I: ItemHandle + 'a,
{
    repair_collection_detailed(items).summary()
}

/// Fully repair every item of a collection, reporting each member.
///
/// Never stops early: a failing member does not prevent later members from
/// being repaired.
pub fn repair_collection_detailed<'a, C, I>(items: C) -> CollectionRepairReport
where
    C: IntoIterator<Item = &'a mut I>,
    I: ItemHandle + 'a,
{
    CollectionRepairReport {
        outcomes: items.into_iter().map(repair_item).collect(),
    }
}

/// Per-member outcomes of a collection repair, in collection order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CollectionRepairReport {
    outcomes: Vec<RepairResult>,
}

impl CollectionRepairReport {
    pub fn outcomes(&self) -> &[RepairResult] {
        &self.outcomes
    }

    /// Aggregate code: `Success` only if every member succeeded
    pub fn summary(&self) -> RepairResult {
        if self.outcomes.iter().all(|r| *r == RepairResult::Success) {
            RepairResult::Success
        } else {
            RepairResult::PartialSuccess
        }
    }

    /// Positions of members that were not repaired
    pub fn failed_indices(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, r)| **r != RepairResult::Success)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn repaired_count(&self) -> usize {
        self.outcomes.len() - self.failed_indices().len()
    }
}
