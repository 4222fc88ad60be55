//! Scenario tests for handlers
//!
//! Run the handlers end to end against the in-memory host.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::alias::AliasTable;
    use crate::config::BUNDLED_ALIASES;
    use crate::domain::{CommandContext, EnchantResult, EnchantmentId, RepairResult};
    use crate::error::AppError;
    use crate::handlers::{
        EnchantCommand, EnchantHandler, ForgeCommand, RepairCommand, RepairHandler, RepairScope,
        SuicideCommand, SuicideHandler, PERMISSION_ENCHANT, PERMISSION_ENCHANT_UNSAFE,
        PERMISSION_REPAIR, PERMISSION_SUICIDE,
    };
    use crate::host::{MemoryItem, MemoryPlayer, StaticRegistry};

    fn enchant_handler() -> EnchantHandler<StaticRegistry> {
        let aliases = AliasTable::from_json(BUNDLED_ALIASES).unwrap();
        EnchantHandler::new(Arc::new(aliases), Arc::new(StaticRegistry::vanilla()))
    }

    fn id(raw: &str) -> EnchantmentId {
        EnchantmentId::new(raw).unwrap()
    }

    fn enchanter(item: MemoryItem) -> MemoryPlayer {
        MemoryPlayer::new("Steve")
            .with_permission(PERMISSION_ENCHANT)
            .with_item(0, item)
    }

    fn level_in_hand(player: &MemoryPlayer, raw: &str) -> Option<u32> {
        player.main_hand().and_then(|item| item.enchantment_level(&id(raw)))
    }

    // =========================================================================
    // Command parsing
    // =========================================================================

    #[test]
    fn test_parse_line_labels() {
        assert_eq!(
            ForgeCommand::parse_line("/fix all").unwrap(),
            ForgeCommand::Repair(RepairCommand::new(RepairScope::All))
        );
        assert_eq!(
            ForgeCommand::parse_line("erepair").unwrap(),
            ForgeCommand::Repair(RepairCommand::new(RepairScope::Hand))
        );
        assert_eq!(
            ForgeCommand::parse_line("ENCHANTMENT sharp 3").unwrap(),
            ForgeCommand::Enchant(EnchantCommand::new("sharp").with_level("3"))
        );
        assert_eq!(
            ForgeCommand::parse_line("/esuicide please").unwrap(),
            ForgeCommand::Suicide(SuicideCommand)
        );
        assert!(matches!(
            ForgeCommand::parse_line("/fly"),
            Err(AppError::UnknownCommand(label)) if label == "fly"
        ));
        assert!(matches!(
            ForgeCommand::parse_line("   "),
            Err(AppError::InvalidRequest(_))
        ));
    }

    // =========================================================================
    // Repair scenarios
    // =========================================================================

    #[test]
    fn test_repair_hand() {
        let mut player = MemoryPlayer::new("Steve")
            .with_permission(PERMISSION_REPAIR)
            .with_item(0, MemoryItem::tool("diamond_sword", 75));

        let outcome = RepairHandler::new()
            .execute(&mut player, RepairCommand::new(RepairScope::Hand), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.result, RepairResult::Success);
        assert_eq!(outcome.item.as_deref(), Some("diamond_sword"));
        assert_eq!(outcome.message, "Successfully repaired your Diamond Sword.");
        assert_eq!(player.main_hand().and_then(MemoryItem::damage), Some(0));
    }

    #[test]
    fn test_repair_empty_hand() {
        let mut player = MemoryPlayer::new("Steve").with_permission(PERMISSION_REPAIR);

        let outcome = RepairHandler::new()
            .execute(&mut player, RepairCommand::new(RepairScope::Hand), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.result, RepairResult::AirItem);
        assert_eq!(outcome.message, "You cannot repair air!");
    }

    #[test]
    fn test_repair_non_damageable_hand() {
        let mut player = MemoryPlayer::new("Steve")
            .with_permission(PERMISSION_REPAIR)
            .with_item(0, MemoryItem::block("cobblestone"));

        let outcome = RepairHandler::new()
            .execute(&mut player, RepairCommand::new(RepairScope::Hand), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.result, RepairResult::IllegalItem);
    }

    #[test]
    fn test_repair_all_with_empty_slots_is_partial() {
        let mut player = MemoryPlayer::new("Steve")
            .with_permission(PERMISSION_REPAIR)
            .with_item(0, MemoryItem::tool("iron_pickaxe", 10))
            .with_item(2, MemoryItem::tool("bow", 20));

        let outcome = RepairHandler::new()
            .execute(&mut player, RepairCommand::new(RepairScope::All), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.result, RepairResult::PartialSuccess);
        assert_eq!(outcome.message, "Successfully repaired most of your items.");

        let report = outcome.report.unwrap();
        assert_eq!(report.repaired_count(), 2);
        assert_eq!(player.slot(0).and_then(MemoryItem::damage), Some(0));
        assert_eq!(player.slot(2).and_then(MemoryItem::damage), Some(0));
    }

    #[test]
    fn test_repair_requires_permission() {
        let mut player = MemoryPlayer::new("Steve").with_item(0, MemoryItem::tool("shears", 9));

        let result =
            RepairHandler::new().execute(&mut player, RepairCommand::new(RepairScope::Hand), &CommandContext::new());

        match result {
            Err(AppError::PermissionDenied(node)) => assert_eq!(node, PERMISSION_REPAIR),
            other => panic!("Expected PermissionDenied, got: {:?}", other),
        }
        assert_eq!(player.main_hand().and_then(MemoryItem::damage), Some(9));
    }

    // =========================================================================
    // Enchant scenarios
    // =========================================================================

    #[test]
    fn test_enchant_by_alias() {
        let handler = enchant_handler();
        let mut player = enchanter(MemoryItem::tool("iron_sword", 0));

        let outcome = handler
            .execute(&mut player, EnchantCommand::new("undeaddamage").with_level("4"), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.result, Some(EnchantResult::Success));
        assert_eq!(outcome.enchantment, Some(id("minecraft:smite")));
        assert!(!outcome.privileged);
        assert_eq!(level_in_hand(&player, "minecraft:smite"), Some(4));
    }

    #[test]
    fn test_enchant_default_level() {
        let handler = enchant_handler().with_default_level(2);
        let mut player = enchanter(MemoryItem::tool("iron_pickaxe", 0));

        let outcome = handler
            .execute(&mut player, EnchantCommand::new("eff"), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.level, Some(2));
        assert_eq!(level_in_hand(&player, "minecraft:efficiency"), Some(2));
    }

    #[test]
    fn test_enchant_unsafe_level_without_permission() {
        let handler = enchant_handler();
        let mut player = enchanter(MemoryItem::tool("iron_sword", 0));

        let outcome = handler
            .execute(&mut player, EnchantCommand::new("sharpness").with_level("6"), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.result, Some(EnchantResult::UnsafeEnchantLevel));
        assert_eq!(level_in_hand(&player, "minecraft:sharpness"), None);
    }

    #[test]
    fn test_enchant_unsafe_level_with_permission() {
        let handler = enchant_handler();
        let mut player = enchanter(MemoryItem::tool("iron_sword", 0)).with_permission(PERMISSION_ENCHANT_UNSAFE);

        let outcome = handler
            .execute(&mut player, EnchantCommand::new("sharpness").with_level("10"), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.result, Some(EnchantResult::SuccessUnsafe));
        assert_eq!(outcome.message, "Successfully enchanted item. (UNSAFE)");
        assert!(outcome.privileged);
        assert_eq!(level_in_hand(&player, "minecraft:sharpness"), Some(10));
    }

    #[test]
    fn test_enchant_remove_with_permission() {
        let handler = enchant_handler();
        let sword = MemoryItem::tool("iron_sword", 0).with_enchantment(&id("minecraft:knockback"), 2);
        let mut player = enchanter(sword).with_permission(PERMISSION_ENCHANT_UNSAFE);

        let outcome = handler
            .execute(&mut player, EnchantCommand::new("kb").with_level("0"), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.result, Some(EnchantResult::SuccessRemove));
        assert_eq!(level_in_hand(&player, "minecraft:knockback"), None);
    }

    #[test]
    fn test_enchant_unknown_alias() {
        let handler = enchant_handler();
        let mut player = enchanter(MemoryItem::tool("iron_sword", 0));

        let outcome = handler
            .execute(&mut player, EnchantCommand::new("sharpnes"), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.result, Some(EnchantResult::IllegalEnchantment));
        assert!(outcome.enchantment.is_none());
    }

    #[test]
    fn test_enchant_alias_missing_from_registry() {
        let aliases = AliasTable::build([("telekinesis|tk", id("custom:telekinesis"))]).unwrap();
        let handler = EnchantHandler::new(Arc::new(aliases), Arc::new(StaticRegistry::vanilla()));
        let mut player = enchanter(MemoryItem::tool("iron_pickaxe", 0));

        let outcome = handler
            .execute(&mut player, EnchantCommand::new("tk"), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.result, Some(EnchantResult::IllegalEnchantment));
    }

    #[test]
    fn test_enchant_bad_level_text() {
        let handler = enchant_handler();
        let mut player = enchanter(MemoryItem::tool("iron_sword", 0));

        for level in ["five", "2.5", "--1", "99999999999"] {
            let outcome = handler
                .execute(&mut player, EnchantCommand::new("sharp").with_level(level), &CommandContext::new())
                .unwrap();

            assert_eq!(outcome.result, Some(EnchantResult::IllegalArgument));
            assert_eq!(outcome.message, "Usage: /enchant <enchantment> [level]");
        }
        assert_eq!(level_in_hand(&player, "minecraft:sharpness"), None);
    }

    #[test]
    fn test_enchant_signed_level_text() {
        let handler = enchant_handler();
        let mut player = enchanter(MemoryItem::tool("iron_sword", 0));

        let outcome = handler
            .execute(&mut player, EnchantCommand::new("sharp").with_level("-1"), &CommandContext::new())
            .unwrap();
        assert_eq!(outcome.result, Some(EnchantResult::UnsafeEnchantLevel));
        assert_eq!(outcome.level, Some(-1));
        assert_eq!(level_in_hand(&player, "minecraft:sharpness"), None);

        let outcome = handler
            .execute(&mut player, EnchantCommand::new("sharp").with_level("+3"), &CommandContext::new())
            .unwrap();
        assert_eq!(outcome.result, Some(EnchantResult::Success));
        assert_eq!(level_in_hand(&player, "minecraft:sharpness"), Some(3));
    }

    #[test]
    fn test_enchant_negative_level_with_permission() {
        let handler = enchant_handler();
        let sword = MemoryItem::tool("iron_sword", 0).with_enchantment(&id("minecraft:sharpness"), 2);
        let mut player = enchanter(sword).with_permission(PERMISSION_ENCHANT_UNSAFE);

        let outcome = handler
            .execute(&mut player, EnchantCommand::new("sharp").with_level("-5"), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.result, Some(EnchantResult::UnsafeEnchantLevel));
        assert!(outcome.privileged);
        assert_eq!(level_in_hand(&player, "minecraft:sharpness"), Some(2));

        // guards still run first
        let outcome = handler
            .execute(&mut player, EnchantCommand::new("nope").with_level("-5"), &CommandContext::new())
            .unwrap();
        assert_eq!(outcome.result, Some(EnchantResult::IllegalEnchantment));
    }

    #[test]
    fn test_enchant_empty_hand() {
        let handler = enchant_handler();
        let mut player = MemoryPlayer::new("Steve").with_permission(PERMISSION_ENCHANT);

        let outcome = handler
            .execute(&mut player, EnchantCommand::new("mending"), &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.result, Some(EnchantResult::AirItem));
    }

    #[test]
    fn test_enchant_without_arguments_and_list() {
        let handler = enchant_handler();
        let mut player = enchanter(MemoryItem::tool("iron_sword", 0));

        let hint = handler
            .execute(&mut player, EnchantCommand::parse(&[]), &CommandContext::new())
            .unwrap();
        assert!(hint.result.is_none());
        assert_eq!(hint.message, "For a list of enchantments: /enchant list");

        let list = handler
            .execute(&mut player, EnchantCommand::new("list"), &CommandContext::new())
            .unwrap();
        assert!(list.result.is_none());
        assert!(list.message.contains("smite: undeaddamage, smite"));
    }

    #[test]
    fn test_enchant_requires_permission() {
        let handler = enchant_handler();
        let mut player = MemoryPlayer::new("Steve")
            .with_permission(PERMISSION_ENCHANT_UNSAFE)
            .with_item(0, MemoryItem::tool("iron_sword", 0));

        let result = handler.execute(&mut player, EnchantCommand::new("sharp"), &CommandContext::new());
        assert!(matches!(result, Err(AppError::PermissionDenied(PERMISSION_ENCHANT))));
    }

    // =========================================================================
    // Suicide scenarios
    // =========================================================================

    #[test]
    fn test_suicide_kills_sender() {
        let mut player = MemoryPlayer::new("Steve").with_permission(PERMISSION_SUICIDE);

        let outcome = SuicideHandler::new()
            .execute(&mut player, SuicideCommand, &CommandContext::new())
            .unwrap();

        assert_eq!(outcome.sender, "Steve");
        assert_eq!(outcome.message, "Successfully Killed Steve.");
        assert!(player.is_dead());
    }

    #[test]
    fn test_suicide_requires_permission() {
        let mut player = MemoryPlayer::new("Steve").with_permission(PERMISSION_REPAIR);

        let result = SuicideHandler::new().execute(&mut player, SuicideCommand, &CommandContext::new());

        assert!(matches!(result, Err(AppError::PermissionDenied(PERMISSION_SUICIDE))));
        assert!(!player.is_dead());
    }
}
