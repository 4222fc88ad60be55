//! Host module
//!
//! In-memory implementation of the host capability contracts.

pub mod memory;
pub mod registry;

pub use memory::{MemoryItem, MemoryPlayer, AIR, INVENTORY_SIZE, MAX_HEALTH};
pub use registry::{EnchantmentRegistry, StaticRegistry};
