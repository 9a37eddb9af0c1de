//! Shared tuning, damage math and the per-run state.

pub mod combat_math;
pub mod constants;
pub mod game_state;

pub use constants::*;
pub use game_state::GameState;
