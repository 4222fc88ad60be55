//! Command sender contract
//!
//! What the command layer needs from the host's player object: identity,
//! permission checks, access to the items the commands mutate and the
//! player's own health.

use uuid::Uuid;

use super::ItemHandle;

/// A player issuing commands
pub trait CommandSender {
    /// Item type stored in hands and inventory slots
    type Item: ItemHandle;

    fn name(&self) -> &str;

    fn id(&self) -> Uuid;

    fn has_permission(&self, node: &str) -> bool;

    /// Item currently held in the main hand (may be absent)
    fn main_hand_mut(&mut self) -> &mut Self::Item;

    /// Every inventory slot, in slot order, empty slots included
    fn inventory_mut(&mut self) -> &mut [Self::Item];

    /// Set the player's health to zero
    fn kill(&mut self);
}
