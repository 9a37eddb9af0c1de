//! Dungeon access, room plans and clear rewards.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
