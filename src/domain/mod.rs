//! Domain module
//!
//! Core domain types and the host capability contracts.

pub mod context;
pub mod enchantment;
pub mod error;
pub mod item;
pub mod result;
pub mod sender;

pub use context::CommandContext;
pub use enchantment::{parse_level, EnchantmentDescriptor, EnchantmentId};
pub use error::DomainError;
pub use item::{DamageableView, EnchantableView, ItemHandle};
pub use result::{EnchantResult, RepairResult};
pub use sender::CommandSender;
