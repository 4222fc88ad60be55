//! Repair Handler
//!
//! Handles `/repair hand` and `/repair all`.

use crate::domain::{CommandContext, CommandSender, ItemHandle};
use crate::error::AppError;
use crate::mutation;

use super::messages::{repair_all_message, repair_hand_message};
use super::{RepairCommand, RepairOutcome, RepairScope, PERMISSION_REPAIR};

/// Handler for item repair
#[derive(Debug, Clone, Default)]
pub struct RepairHandler;

impl RepairHandler {
    pub fn new() -> Self {
        Self
    }

    /// Execute the repair command
    pub fn execute<S: CommandSender>(
        &self,
        sender: &mut S,
        command: RepairCommand,
        context: &CommandContext,
    ) -> Result<RepairOutcome, AppError> {
        if !sender.has_permission(PERMISSION_REPAIR) {
            tracing::warn!(
                sender = %sender.name(),
                correlation_id = ?context.correlation_id,
                permission = PERMISSION_REPAIR,
                "Repair denied"
            );
            return Err(AppError::PermissionDenied(PERMISSION_REPAIR));
        }

        let outcome = match command.scope {
            RepairScope::Hand => {
                let item = sender.main_hand_mut();
                let material = item.material().map(str::to_string);
                let result = mutation::repair_item(item);

                RepairOutcome {
                    scope: RepairScope::Hand,
                    result,
                    message: repair_hand_message(result, material.as_deref()),
                    item: material,
                    report: None,
                }
            }
            RepairScope::All => {
                let report = mutation::repair_collection_detailed(sender.inventory_mut());
                let result = report.summary();

                RepairOutcome {
                    scope: RepairScope::All,
                    result,
                    item: None,
                    message: repair_all_message(result).to_string(),
                    report: Some(report),
                }
            }
        };

        tracing::debug!(
            sender = %sender.name(),
            correlation_id = ?context.correlation_id,
            scope = ?outcome.scope,
            result = %outcome.result,
            "Repair handled"
        );

        Ok(outcome)
    }
}
