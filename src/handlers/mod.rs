//! Command Handlers module
//!
//! Permission-gated handlers that turn parsed commands into mutation engine
//! calls and render the result codes for the sender.

mod commands;
mod enchant_handler;
pub mod messages;
mod repair_handler;
mod suicide_handler;

#[cfg(test)]
mod tests;

pub use commands::*;
pub use enchant_handler::{EnchantHandler, DEFAULT_LEVEL};
pub use repair_handler::RepairHandler;
pub use suicide_handler::SuicideHandler;
