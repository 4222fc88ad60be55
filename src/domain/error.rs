//! Domain Error Types
//!
//! Pure domain errors that don't depend on the host or the command layer.

use thiserror::Error;

/// Domain-specific errors
///
/// These errors represent invalid domain values rejected at construction
/// time. Mutation outcomes are never errors; they are reported through
/// `RepairResult` and `EnchantResult`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Enchantment identifier is malformed
    #[error("Invalid enchantment id {value:?}: {reason}")]
    InvalidEnchantmentId { value: String, reason: &'static str },

    /// Descriptor declares an impossible safe range
    #[error("Invalid level range for {id}: start {start_level}, max {max_level}")]
    InvalidLevelRange {
        id: String,
        start_level: u32,
        max_level: u32,
    },

    /// User-typed level is not an integer
    #[error("Invalid enchantment level: {0:?}")]
    InvalidLevel(String),
}

impl DomainError {
    /// Create an invalid enchantment id error
    pub fn invalid_enchantment_id(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidEnchantmentId {
            value: value.into(),
            reason,
        }
    }
}
