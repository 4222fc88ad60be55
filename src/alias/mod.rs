//! Alias module
//!
//! Free-form enchantment names to canonical ids.

mod table;

pub use table::{AliasGroup, AliasTable, GROUP_DELIMITER};
