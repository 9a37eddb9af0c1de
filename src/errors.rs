//! Error types.
//!
//! [`GameError`] is fatal and propagates to `main`. [`Rejection`] is a refused
//! player action: it is shown as a warning and control returns to the menu.

use crate::items::{EquipmentSlot, ItemId, KeyType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Terminal read or write failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended while the game was waiting for an answer.
    #[error("input closed")]
    InputClosed,
}

/// A player action the rules do not allow right now. Never mutates state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("🔑 You need at least 1 Dungeon Key to explore the dungeon.")]
    NoKeys,

    #[error("🔑 You don't have the {} Key to explore this dungeon.", .0.name())]
    MissingKey(KeyType),

    #[error("🌟 The Final Dungeon requires {required} pages (you have {pages}).")]
    FinalDungeonLocked { pages: u32, required: u32 },

    #[error("Not enough gold to purchase this item ({price} needed, {gold} held).")]
    NotEnoughGold { price: u32, gold: u32 },

    #[error("No consumable items available to use. ❌")]
    NoConsumables,

    #[error("Your inventory is empty.")]
    EmptyInventory,

    #[error("That item is not in your inventory.")]
    NoSuchItem,

    #[error("That item is not for sale.")]
    NotForSale,

    #[error("{} cannot be equipped.", .0.name())]
    NotEquippable(ItemId),

    #[error("{} cannot be used.", .0.name())]
    NotConsumable(ItemId),

    #[error("Nothing is equipped in the {} slot.", .0.name())]
    NothingEquipped(EquipmentSlot),

    #[error("You cannot sell {requested} key(s); you have {held}.")]
    InvalidKeyQuantity { requested: u32, held: u32 },
}
