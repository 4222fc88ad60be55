//! Enchant Handler
//!
//! Handles `/enchant <name> [level]` and `/enchant list`.
//! Resolves the typed name through the alias table, looks the canonical id
//! up in the host registry, then picks the bounded or unbounded mutation
//! path from the sender's permissions.

use std::sync::Arc;

use crate::alias::AliasTable;
use crate::domain::{parse_level, CommandContext, CommandSender, EnchantResult, EnchantmentId};
use crate::error::AppError;
use crate::host::EnchantmentRegistry;
use crate::mutation;

use super::messages::{enchant_list_message, enchant_message, ENCHANT_LIST_HINT};
use super::{EnchantCommand, EnchantOutcome, PERMISSION_ENCHANT, PERMISSION_ENCHANT_UNSAFE};

/// Level used when none is typed and no other default is configured
pub const DEFAULT_LEVEL: i32 = 1;

/// Handler for item enchanting
pub struct EnchantHandler<R> {
    aliases: Arc<AliasTable>,
    registry: Arc<R>,
    default_level: i32,
}

impl<R: EnchantmentRegistry> EnchantHandler<R> {
    pub fn new(aliases: Arc<AliasTable>, registry: Arc<R>) -> Self {
        Self {
            aliases,
            registry,
            default_level: DEFAULT_LEVEL,
        }
    }

    /// Level applied by `/enchant <name>` without a level
    pub fn with_default_level(mut self, level: i32) -> Self {
        self.default_level = level;
        self
    }

    /// Execute the enchant command
    pub fn execute<S: CommandSender>(
        &self,
        sender: &mut S,
        command: EnchantCommand,
        context: &CommandContext,
    ) -> Result<EnchantOutcome, AppError> {
        if !sender.has_permission(PERMISSION_ENCHANT) {
            tracing::warn!(
                sender = %sender.name(),
                correlation_id = ?context.correlation_id,
                permission = PERMISSION_ENCHANT,
                "Enchant denied"
            );
            return Err(AppError::PermissionDenied(PERMISSION_ENCHANT));
        }

        let Some(token) = command.token.as_deref() else {
            return Ok(EnchantOutcome::message_only(ENCHANT_LIST_HINT));
        };

        if command.is_list() {
            return Ok(EnchantOutcome::message_only(enchant_list_message(&self.aliases)));
        }

        // Level text is validated before anything else is looked up
        let level = match command.level.as_deref() {
            None => self.default_level,
            Some(raw) => match parse_level(raw) {
                Ok(level) => level,
                Err(e) => {
                    tracing::debug!(sender = %sender.name(), error = %e, "Rejected enchant level");
                    return Ok(self.outcome(EnchantResult::IllegalArgument, None, None, false));
                }
            },
        };

        let id = self.aliases.resolve(token);
        let descriptor = id.and_then(|id| self.registry.get(id));
        if id.is_some() && descriptor.is_none() {
            tracing::warn!(token, id = ?id, "Alias resolves to an id missing from the registry");
        }

        let privileged = sender.has_permission(PERMISSION_ENCHANT_UNSAFE);
        let item = sender.main_hand_mut();
        let result = match u32::try_from(level) {
            Ok(level) if privileged => mutation::apply_unsafe(item, descriptor, level),
            Ok(level) => mutation::apply_safe(item, descriptor, level),
            Err(_) => mutation::reject_negative_level(&*item, descriptor),
        };

        if result == EnchantResult::SuccessUnsafe {
            tracing::info!(
                sender = %sender.name(),
                correlation_id = ?context.correlation_id,
                enchantment = ?id,
                level,
                "Applied enchantment beyond its safe range"
            );
        } else {
            tracing::debug!(
                sender = %sender.name(),
                correlation_id = ?context.correlation_id,
                token,
                level,
                privileged,
                result = %result,
                "Enchant handled"
            );
        }

        Ok(self.outcome(result, id.cloned(), Some(level), privileged))
    }

    fn outcome(
        &self,
        result: EnchantResult,
        enchantment: Option<EnchantmentId>,
        level: Option<i32>,
        privileged: bool,
    ) -> EnchantOutcome {
        EnchantOutcome {
            result: Some(result),
            enchantment,
            level,
            privileged,
            message: enchant_message(result).to_string(),
        }
    }
}
