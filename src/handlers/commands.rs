//! Command definitions
//!
//! Commands represent a sender's request to mutate held items, parsed from
//! the label and arguments typed in chat or on the console.

use serde::{Deserialize, Serialize};

use crate::domain::{EnchantResult, EnchantmentId, RepairResult};
use crate::error::AppError;
use crate::mutation::CollectionRepairReport;

/// Permission required for `/repair`
pub const PERMISSION_REPAIR: &str = "forge.repair";

/// Permission required for `/enchant`
pub const PERMISSION_ENCHANT: &str = "forge.enchant";

/// Permission that switches `/enchant` to the unbounded path
pub const PERMISSION_ENCHANT_UNSAFE: &str = "forge.enchant.unsafe";

/// Permission required for `/suicide`
pub const PERMISSION_SUICIDE: &str = "forge.suicide";

/// Labels accepted for the repair command
pub const REPAIR_LABELS: &[&str] = &["repair", "fix", "efix", "erepair"];

/// Labels accepted for the enchant command
pub const ENCHANT_LABELS: &[&str] = &["enchant", "enchantment"];

/// Labels accepted for the suicide command
pub const SUICIDE_LABELS: &[&str] = &["suicide", "esuicide"];

/// Subcommand of `/enchant` that lists known enchantments
pub const ENCHANT_LIST_SUBCOMMAND: &str = "list";

// =========================================================================
// RepairCommand
// =========================================================================

/// Which items `/repair` targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairScope {
    /// Item in the main hand
    #[default]
    Hand,
    /// Every inventory slot
    All,
}

/// Command to repair one or more items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairCommand {
    pub scope: RepairScope,
}

impl RepairCommand {
    pub fn new(scope: RepairScope) -> Self {
        Self { scope }
    }

    /// Parse arguments: none or `hand` -> Hand, `all` -> All
    pub fn parse(args: &[&str]) -> Result<Self, AppError> {
        match args.first().map(|a| a.to_ascii_lowercase()).as_deref() {
            None | Some("hand") => Ok(Self::new(RepairScope::Hand)),
            Some("all") => Ok(Self::new(RepairScope::All)),
            Some(other) => Err(AppError::InvalidRequest(format!(
                "Unknown repair target {:?}. Usage: /repair [hand|all]",
                other
            ))),
        }
    }
}

// =========================================================================
// EnchantCommand
// =========================================================================

/// Command to enchant the held item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnchantCommand {
    /// Enchantment name as typed (alias or `list`)
    pub token: Option<String>,
    /// Level as typed; the configured default when absent
    pub level: Option<String>,
}

impl EnchantCommand {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            level: None,
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Parse arguments: `[name] [level]`; extra arguments are ignored
    pub fn parse(args: &[&str]) -> Self {
        Self {
            token: args.first().map(|s| s.to_string()),
            level: args.get(1).map(|s| s.to_string()),
        }
    }

    /// Whether this is `/enchant list`
    pub fn is_list(&self) -> bool {
        self.token
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(ENCHANT_LIST_SUBCOMMAND))
    }
}

// =========================================================================
// SuicideCommand
// =========================================================================

/// Command to kill the sender; any arguments are ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuicideCommand;

// =========================================================================
// ForgeCommand
// =========================================================================

/// Any command handled by this crate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum ForgeCommand {
    Repair(RepairCommand),
    Enchant(EnchantCommand),
    Suicide(SuicideCommand),
}

impl ForgeCommand {
    /// Parse a full command line; a leading `/` is optional.
    pub fn parse_line(line: &str) -> Result<Self, AppError> {
        let mut words = line.split_whitespace();
        let label = words
            .next()
            .map(|l| l.trim_start_matches('/').to_ascii_lowercase())
            .ok_or_else(|| AppError::InvalidRequest("Empty command".to_string()))?;
        let args: Vec<&str> = words.collect();

        if REPAIR_LABELS.contains(&label.as_str()) {
            RepairCommand::parse(&args).map(ForgeCommand::Repair)
        } else if ENCHANT_LABELS.contains(&label.as_str()) {
            Ok(ForgeCommand::Enchant(EnchantCommand::parse(&args)))
        } else if SUICIDE_LABELS.contains(&label.as_str()) {
            Ok(ForgeCommand::Suicide(SuicideCommand))
        } else {
            Err(AppError::UnknownCommand(label))
        }
    }
}

// =========================================================================
// Outcomes
// =========================================================================

/// Result of a handled repair command
#[derive(Debug, Clone, Serialize)]
pub struct RepairOutcome {
    pub scope: RepairScope,
    pub result: RepairResult,
    /// Material of the repaired item (hand scope)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    /// Per-slot outcomes (all scope)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<CollectionRepairReport>,
    pub message: String,
}

/// Result of a handled enchant command
#[derive(Debug, Clone, Serialize)]
pub struct EnchantOutcome {
    /// `None` for usage hints and listings, which mutate nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<EnchantResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enchantment: Option<EnchantmentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    /// Whether the unbounded path was used
    pub privileged: bool,
    pub message: String,
}

impl EnchantOutcome {
    /// Outcome that carries only a message
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            result: None,
            enchantment: None,
            level: None,
            privileged: false,
            message: message.into(),
        }
    }
}

/// Result of a handled suicide command
#[derive(Debug, Clone, Serialize)]
pub struct SuicideOutcome {
    /// Name of the killed sender
    pub sender: String,
    pub message: String,
}
