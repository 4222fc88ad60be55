//! Result codes
//!
//! Closed outcome sets returned by every mutation operation.
//! Callers branch on these values; nothing in the engine panics or
//! returns `Err` for an item it cannot mutate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a durability operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepairResult {
    /// Damage was written
    Success,
    /// Collection operation where at least one member failed
    PartialSuccess,
    /// Item is absent or of the empty material
    AirItem,
    /// Item is present but cannot hold durability damage
    IllegalItem,
}

impl RepairResult {
    /// Get the result code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairResult::Success => "SUCCESS",
            RepairResult::PartialSuccess => "PARTIAL_SUCCESS",
            RepairResult::AirItem => "AIR_ITEM",
            RepairResult::IllegalItem => "ILLEGAL_ITEM",
        }
    }

    /// Whether at least part of the operation was applied
    pub fn is_success(&self) -> bool {
        matches!(self, RepairResult::Success | RepairResult::PartialSuccess)
    }
}

impl fmt::Display for RepairResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an enchantment operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnchantResult {
    /// Level written, inside the descriptor's safe range
    Success,
    /// Level written, outside the descriptor's safe range (privileged path)
    SuccessUnsafe,
    /// Level 0 requested; enchantment removed (or was already absent)
    SuccessRemove,
    /// Item is absent or of the empty material
    AirItem,
    /// Item is present but cannot hold enchantments
    IllegalItem,
    /// Descriptor is unset or unknown
    IllegalEnchantment,
    /// Safe path rejected a level outside the declared range
    UnsafeEnchantLevel,
    /// Level text could not be parsed (produced by the command layer)
    IllegalArgument,
}

impl EnchantResult {
    /// Get the result code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EnchantResult::Success => "SUCCESS",
            EnchantResult::SuccessUnsafe => "SUCCESS_UNSAFE",
            EnchantResult::SuccessRemove => "SUCCESS_REMOVE",
            EnchantResult::AirItem => "AIR_ITEM",
            EnchantResult::IllegalItem => "ILLEGAL_ITEM",
            EnchantResult::IllegalEnchantment => "ILLEGAL_ENCHANTMENT",
            EnchantResult::UnsafeEnchantLevel => "UNSAFE_ENCHANT_LEVEL",
            EnchantResult::IllegalArgument => "ILLEGAL_ARGUMENT",
        }
    }

    /// Whether the item was mutated
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            EnchantResult::Success | EnchantResult::SuccessUnsafe | EnchantResult::SuccessRemove
        )
    }
}

impl fmt::Display for EnchantResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
