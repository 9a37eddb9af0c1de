use serde::{Deserialize, Serialize};

use crate::character::Player;
use crate::core::constants::STARTING_DUNGEON_LEVEL;

/// Everything a single run owns. Dropped and rebuilt when the player dies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    /// Rises by one with every cleared dungeon; adds to enemy damage.
    pub current_dungeon_level: u32,
    pub final_boss_defeated: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            current_dungeon_level: STARTING_DUNGEON_LEVEL,
            final_boss_defeated: false,
        }
    }

    /// The run continues while the player lives and the Dark Overlord stands.
    pub fn is_running(&self) -> bool {
        self.player.is_alive() && !self.final_boss_defeated
    }
}
