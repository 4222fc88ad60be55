//! itemForge Library
//!
//! Item repair and enchantment engine for game server command handlers,
//! with an alias front end for typed enchantment names.

pub mod alias;
pub mod console;
pub mod domain;
pub mod handlers;
pub mod host;
pub mod mutation;

pub mod config;
mod error;

pub use alias::AliasTable;
pub use config::{Config, ConfigError};
pub use domain::{EnchantResult, EnchantmentDescriptor, EnchantmentId, RepairResult};
pub use domain::{CommandSender, DamageableView, EnchantableView, ItemHandle};
pub use error::{AppError, AppResult, ErrorReply};
