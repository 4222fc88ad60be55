//! Suicide Handler
//!
//! Handles `/suicide`: kills the sender.

use crate::domain::{CommandContext, CommandSender};
use crate::error::AppError;

use super::messages::suicide_message;
use super::{SuicideCommand, SuicideOutcome, PERMISSION_SUICIDE};

/// Handler for `/suicide`
#[derive(Debug, Clone, Default)]
pub struct SuicideHandler;

impl SuicideHandler {
    pub fn new() -> Self {
        Self
    }

    /// Execute the suicide command
    pub fn execute<S: CommandSender>(
        &self,
        sender: &mut S,
        _command: SuicideCommand,
        context: &CommandContext,
    ) -> Result<SuicideOutcome, AppError> {
        if !sender.has_permission(PERMISSION_SUICIDE) {
            tracing::warn!(
                sender = %sender.name(),
                correlation_id = ?context.correlation_id,
                permission = PERMISSION_SUICIDE,
                "Suicide denied"
            );
            return Err(AppError::PermissionDenied(PERMISSION_SUICIDE));
        }

        sender.kill();

        tracing::info!(
            sender = %sender.name(),
            correlation_id = ?context.correlation_id,
            "Sender killed"
        );

        Ok(SuicideOutcome {
            sender: sender.name().to_string(),
            message: suicide_message(sender.name()),
        })
    }
}
