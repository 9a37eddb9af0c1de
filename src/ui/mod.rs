//! Presentation port. The game core talks to the player only through
//! [`Presenter`], so it runs the same against a terminal or a script.

pub mod scripted;
pub mod terminal;

pub use scripted::{Answer, ScriptedPresenter};
pub use terminal::TerminalPresenter;

use crate::character::Player;
use crate::errors::GameError;
use crate::events::{GameEvent, Tone};

/// Status line drawn at the top of every screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub level: u32,
    pub xp: i32,
    pub xp_to_next_level: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub gold: u32,
    pub keys: u32,
    pub pages: u32,
}

impl Hud {
    pub fn line(&self) -> String {
        format!(
            "Lv {} | XP {}/{} | HP {}/{} | ATK {} | DEF {} | Gold {} | Keys {} | Pages {}",
            self.level,
            self.xp,
            self.xp_to_next_level,
            self.hp,
            self.max_hp,
            self.attack,
            self.defense,
            self.gold,
            self.keys,
            self.pages
        )
    }
}

impl From<&Player> for Hud {
    fn from(player: &Player) -> Self {
        Self {
            level: player.level,
            xp: player.xp,
            xp_to_next_level: player.xp_to_next_level,
            hp: player.hp,
            max_hp: player.max_hp,
            attack: player.attack,
            defense: player.defense,
            gold: player.gold,
            keys: player.keys,
            pages: player.pages,
        }
    }
}

pub trait Presenter {
    /// Clears the screen and draws the HUD.
    fn begin_screen(&mut self, hud: &Hud) -> Result<(), GameError>;

    /// Returns the 0-based index of the picked option.
    fn choose(&mut self, title: &str, options: &[String]) -> Result<usize, GameError>;

    fn confirm(&mut self, prompt: &str) -> Result<bool, GameError>;

    /// Asks for a number in `0..=max`. Zero means "go back" and yields None.
    fn ask_quantity(&mut self, prompt: &str, max: u32) -> Result<Option<u32>, GameError>;

    fn notify(&mut self, message: &str, tone: Tone);

    /// "Press Enter to continue" beat.
    fn pause(&mut self) -> Result<(), GameError>;

    fn show_events(&mut self, events: &[GameEvent]) {
        for event in events {
            self.notify(&event.message(), event.tone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_mirrors_player() {
        let mut player = Player::new();
        player.keys = 2;
        player.pages = 1;
        let hud = Hud::from(&player);
        assert_eq!(hud.hp, 288);
        assert!(hud.line().contains("Keys 2 | Pages 1"));
    }
}
