//! Command Context
//!
//! Contains metadata about the current command invocation for tracing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for a command, used for log correlation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandContext {
    /// Player that issued the command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<Uuid>,

    /// Correlation ID for tracing one command across log lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,

    /// Console or other non-player origin
    #[serde(default)]
    pub from_console: bool,
}

impl CommandContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self {
            sender_id: None,
            correlation_id: None,
            from_console: false,
        }
    }

    /// Create context with sender
    pub fn with_sender(mut self, sender_id: Uuid) -> Self {
        self.sender_id = Some(sender_id);
        self
    }

    /// Create context with correlation ID
    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Mark the command as issued from the console
    pub fn from_console(mut self) -> Self {
        self.from_console = true;
        self
    }

    /// Generate a new correlation ID if not present
    pub fn ensure_correlation_id(&mut self) -> Uuid {
        *self.correlation_id.get_or_insert_with(Uuid::new_v4)
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}
