//! Turn-based combat: foes, damage resolution and the encounter state machine.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
