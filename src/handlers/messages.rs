//! Player-facing messages
//!
//! One line per result code. The engine never renders text itself.

use crate::alias::AliasTable;
use crate::domain::{EnchantResult, RepairResult};

pub const ENCHANT_USAGE: &str = "Usage: /enchant <enchantment> [level]";
pub const ENCHANT_LIST_HINT: &str = "For a list of enchantments: /enchant list";

/// Message for `/repair hand`
pub fn repair_hand_message(result: RepairResult, material: Option<&str>) -> String {
    match result {
        RepairResult::Success | RepairResult::PartialSuccess => match material {
            Some(material) => format!("Successfully repaired your {}.", display_material(material)),
            None => "Successfully repaired your item.".to_string(),
        },
        RepairResult::AirItem => "You cannot repair air!".to_string(),
        RepairResult::IllegalItem => "You cannot repair that item!".to_string(),
    }
}

/// Message for `/repair all`
pub fn repair_all_message(result: RepairResult) -> &'static str {
    match result {
        RepairResult::Success => "Successfully repaired your items.",
        RepairResult::PartialSuccess => "Successfully repaired most of your items.",
        RepairResult::AirItem => "You cannot repair air!",
        RepairResult::IllegalItem => "You cannot repair that item!",
    }
}

/// Message for every enchant result code
pub fn enchant_message(result: EnchantResult) -> &'static str {
    match result {
        EnchantResult::Success => "Successfully enchanted item.",
        EnchantResult::SuccessUnsafe => "Successfully enchanted item. (UNSAFE)",
        EnchantResult::SuccessRemove => "Successfully removed enchantment from item.",
        EnchantResult::AirItem => "You cannot enchant air!",
        EnchantResult::IllegalItem => "You cannot enchant that item!",
        EnchantResult::UnsafeEnchantLevel => "You can't enchant this item to that level.",
        EnchantResult::IllegalEnchantment => ENCHANT_LIST_HINT,
        EnchantResult::IllegalArgument => ENCHANT_USAGE,
    }
}

/// `/enchant list`: one line per canonical id with its synonyms
pub fn enchant_list_message(aliases: &AliasTable) -> String {
    let mut lines: Vec<String> = aliases
        .groups()
        .iter()
        .map(|group| format!("{}: {}", group.id().key(), group.synonyms().join(", ")))
        .collect();
    lines.sort();

    if lines.is_empty() {
        return "No enchantments are configured.".to_string();
    }
    format!("Enchantments ({}):\n{}", lines.len(), lines.join("\n"))
}

/// Message for `/suicide`
pub fn suicide_message(name: &str) -> String {
    format!("Successfully Killed {}.", name)
}

/// `diamond_sword` -> `Diamond Sword`
fn display_material(material: &str) -> String {
    material
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
