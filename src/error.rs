//! Error handling module
//!
//! Centralized error types for the command layer and their player-facing
//! rendering. Mutation outcomes are not errors; see `domain::result`.

use serde::Serialize;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Sender errors
    #[error("Permission denied: missing {0}")]
    PermissionDenied(&'static str),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Server errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error reply sent back to the command sender
#[derive(Debug, Serialize)]
pub struct ErrorReply {
    pub error_code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Check if this is a client error (sender's fault)
    pub fn is_client_error(&self) -> bool {
        match self {
            AppError::PermissionDenied(_)
            | AppError::UnknownCommand(_)
            | AppError::InvalidRequest(_) => true,
            AppError::Io(_) => false,
        }
    }

    /// Render the error for the sender. Server-side failures are logged and
    /// replaced by a generic line.
    pub fn to_reply(&self) -> ErrorReply {
        let (error_code, message, details) = match self {
            AppError::PermissionDenied(node) => (
                "permission_denied",
                "You do not have permission to use this command.".to_string(),
                Some(node.to_string()),
            ),
            AppError::UnknownCommand(label) => (
                "unknown_command",
                format!("Unknown command: {}", label),
                None,
            ),
            AppError::InvalidRequest(msg) => ("invalid_request", msg.clone(), None),
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                ("io_error", "An internal error occurred.".to_string(), None)
            }
        };

        ErrorReply {
            error_code,
            message,
            details,
        }
    }
}
