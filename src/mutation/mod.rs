//! Mutation module
//!
//! The item mutation engine: synchronous, side effects limited to the item
//! passed in, outcomes reported as result codes. Nothing here logs; the
//! caller decides what to report.
//!
//! Callers must not run two mutations on the same item concurrently.

pub mod durability;
pub mod enchantment;

pub use durability::{
    repair_collection, repair_collection_detailed, repair_item, set_durability,
    CollectionRepairReport,
};
pub use enchantment::{apply_safe, apply_unsafe, reject_negative_level};
