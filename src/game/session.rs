//! Run lifecycle, main menu, dungeon runs and fights.

use log::{debug, info};
use rand::Rng;

use crate::combat::{
    available_actions, Boss, CombatAction, CombatOutcome, Combatant, Encounter, Enemy, Foe,
    TurnChoice,
};
use crate::core::GameState;
use crate::dungeon::{
    available_dungeons, check_access, clear_dungeon, enter_dungeon, plan_dungeon, DungeonPreview,
    Room,
};
use crate::errors::{GameError, Rejection};
use crate::events::Tone;
use crate::items::{drop_loot, KeyType};
use crate::overworld::{self, OverworldFind};
use crate::ui::{Hud, Presenter};

/// How a call to [`Game::run`] finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    Victory,
    Quit,
}

const MAIN_MENU: [&str; 7] = [
    "Explore Dungeon 🕳️",
    "Explore Overworld 🏞️",
    "Rest to Recover HP 🛌",
    "Visit Shop 🛒",
    "View Inventory 📦",
    "View Achievements 🏆",
    "Exit Game ❌",
];

pub(crate) fn labels<S: AsRef<str>>(options: &[S]) -> Vec<String> {
    options.iter().map(|s| s.as_ref().to_string()).collect()
}

/// Drives a full game against a presenter. Owns the run state and the RNG.
pub struct Game<P: Presenter, R: Rng> {
    pub state: GameState,
    pub(crate) presenter: P,
    pub(crate) rng: R,
}

impl<P: Presenter, R: Rng> Game<P, R> {
    pub fn new(presenter: P, rng: R) -> Self {
        Self {
            state: GameState::new(),
            presenter,
            rng,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Plays runs back to back until the player wins or quits. Death starts
    /// a fresh run.
    pub fn run(&mut self) -> Result<RunEnd, GameError> {
        loop {
            self.welcome()?;
            while self.state.is_running() {
                if let Some(end) = self.main_menu()? {
                    return Ok(end);
                }
            }
            if self.state.final_boss_defeated {
                self.final_narrative()?;
                return Ok(RunEnd::Victory);
            }
            self.game_over()?;
        }
    }

    pub(crate) fn screen(&mut self) -> Result<(), GameError> {
        let hud = Hud::from(&self.state.player);
        self.presenter.begin_screen(&hud)
    }

    pub(crate) fn say(&mut self, message: &str, tone: Tone) {
        self.presenter.notify(message, tone);
    }

    pub(crate) fn reject(&mut self, rejection: Rejection) -> Result<(), GameError> {
        debug!("rejected: {:?}", rejection);
        self.presenter.notify(&rejection.to_string(), Tone::Warning);
        self.presenter.pause()
    }

    fn welcome(&mut self) -> Result<(), GameError> {
        self.screen()?;
        self.say("Welcome to Rogue Slayer! 🗡️", Tone::Info);
        self.presenter.pause()?;
        self.screen()?;
        self.say(
            "Embark on an epic quest through mystical dungeons and treacherous landscapes. \
             Face formidable foes, collect legendary items, and restore peace to the land.",
            Tone::Warning,
        );
        self.presenter.pause()
    }

    fn game_over(&mut self) -> Result<(), GameError> {
        info!(
            "run ended in death at level {} with {} pages",
            self.state.player.level, self.state.player.pages
        );
        self.say("💀 Game Over! You have been slain. 😔", Tone::Danger);
        self.presenter.pause()?;
        self.say("Restarting the game...", Tone::Info);
        self.presenter.pause()?;
        self.state = GameState::new();
        Ok(())
    }

    fn final_narrative(&mut self) -> Result<(), GameError> {
        info!("Dark Overlord defeated at level {}", self.state.player.level);
        self.screen()?;
        self.say(
            "After an arduous battle, you have defeated the Dark Overlord. \
             The land begins to heal as peace is restored.",
            Tone::Magic,
        );
        self.presenter.pause()?;
        self.say(
            "🌟 Congratulations! You have completed Rogue Slayer and restored peace to the land. 🌟",
            Tone::Success,
        );
        self.presenter.pause()
    }

    /// One pick from the main menu. Returns Some when the game should stop.
    pub fn main_menu(&mut self) -> Result<Option<RunEnd>, GameError> {
        self.screen()?;
        let choice = self
            .presenter
            .choose("--- Main Menu --- 🗺️", &labels(&MAIN_MENU))?;
        match choice {
            0 => self.explore_dungeon()?,
            1 => self.explore_overworld()?,
            2 => self.rest()?,
            3 => self.visit_shop()?,
            4 => self.view_inventory()?,
            5 => self.view_achievements()?,
            _ => {
                self.say("Thank you for playing Rogue Slayer! 👋", Tone::Info);
                return Ok(Some(RunEnd::Quit));
            }
        }
        Ok(None)
    }

    /// Pick a dungeon, preview it, spend the key and fight room by room.
    pub fn explore_dungeon(&mut self) -> Result<(), GameError> {
        let dungeons = match available_dungeons(&self.state.player) {
            Ok(dungeons) => dungeons,
            Err(rejection) => return self.reject(rejection),
        };

        let mut options: Vec<String> = dungeons
            .iter()
            .map(|kt| match kt {
                KeyType::Final => "Final Dungeon 🌟".to_string(),
                _ => format!("{} Dungeon 🔑", kt.name()),
            })
            .collect();
        options.push("Cancel".to_string());
        let choice = self
            .presenter
            .choose("Available Dungeon Types:", &options)?;
        let Some(&key_type) = dungeons.get(choice) else {
            self.say("Canceled exploring the dungeon.", Tone::Warning);
            return self.presenter.pause();
        };
        if let Err(rejection) = check_access(&self.state.player, key_type) {
            return self.reject(rejection);
        }

        let plan = plan_dungeon(
            &self.state.player,
            key_type,
            self.state.current_dungeon_level,
            &mut self.rng,
        );
        let preview = DungeonPreview::from(&plan);
        self.say("📜 Dungeon Details:", Tone::Info);
        self.say(
            &format!("• Number of Enemies: {}", preview.num_mobs),
            Tone::Warning,
        );
        self.say(
            &format!(
                "• Boss: {} | HP: {} | Attack: {} 🐉",
                preview.boss_name, preview.boss_hp, preview.boss_attack
            ),
            Tone::Magic,
        );
        if !self
            .presenter
            .confirm("Do you want to proceed and consume the key?")?
        {
            self.say("Canceled exploring the dungeon.", Tone::Warning);
            return self.presenter.pause();
        }

        let events = match enter_dungeon(&mut self.state.player, &plan) {
            Ok(events) => events,
            Err(rejection) => return self.reject(rejection),
        };
        self.presenter.show_events(&events);
        self.presenter.pause()?;
        self.screen()?;
        self.say(
            &format!(
                "You embark on your journey into the {} Dungeon. The air grows thick with the essence of {}.",
                key_type.name(),
                key_type.name().to_lowercase()
            ),
            Tone::Warning,
        );
        self.presenter.pause()?;

        let mut mobs_remaining = plan.num_mobs;
        for room in &plan.rooms {
            self.screen()?;
            match *room {
                Room::Monster(realm) => {
                    self.say("You enter a room... 🏚️", Tone::Warning);
                    let enemy = Enemy::generate(plan.scaled_level, realm, &mut self.rng);
                    if self.fight(enemy.into())? == CombatOutcome::Defeat {
                        return Ok(());
                    }
                    mobs_remaining -= 1;
                    if mobs_remaining > 0 {
                        let options = labels(&["Continue Fighting", "Leave and Return to Main Menu"]);
                        if self.presenter.choose("What next?", &options)? == 1 {
                            self.say("You decide to leave the dungeon for now.", Tone::Warning);
                            return self.presenter.pause();
                        }
                    }
                }
                Room::Boss(kind) => {
                    self.say("You enter the Boss Chamber... 🏰", Tone::Warning);
                    let boss = Boss::generate(plan.scaled_level, kind.dungeon());
                    match self.fight(boss.into())? {
                        CombatOutcome::Victory => {
                            if key_type == KeyType::Final {
                                self.state.final_boss_defeated = true;
                            }
                        }
                        CombatOutcome::Fled => {
                            self.say(
                                "You escape the Boss Chamber, but the dungeon remains uncleared.",
                                Tone::Warning,
                            );
                            return self.presenter.pause();
                        }
                        CombatOutcome::Defeat => return Ok(()),
                    }
                }
            }
        }

        let events = clear_dungeon(&mut self.state.player, &plan);
        self.state.current_dungeon_level += 1;
        debug!(
            "dungeon cleared, next dungeon level {}",
            self.state.current_dungeon_level
        );
        self.presenter.show_events(&events);
        self.presenter.pause()
    }

    /// Fights `foe` to a finish and hands out loot on a win.
    pub(crate) fn fight(&mut self, foe: Foe) -> Result<CombatOutcome, GameError> {
        let mut encounter = Encounter::new(foe, self.state.current_dungeon_level);
        self.presenter.show_events(&[encounter.opening()]);
        self.presenter.pause()?;

        let outcome = loop {
            if let Some(outcome) = encounter.outcome() {
                break outcome;
            }
            self.screen()?;
            let status = format!(
                "Enemy: {} | HP: {}",
                encounter.foe.name(),
                encounter.foe.stats().hp
            );
            self.say(&status, Tone::Danger);
            if encounter.foe.is_boss() {
                self.say(
                    &format!(
                        "✨ Boss Ability: {}% chance to perform special attacks.",
                        (encounter.foe.special_attack_chance() * 100.0).round()
                    ),
                    Tone::Magic,
                );
            }

            let actions = available_actions(&self.state.player);
            let options: Vec<String> = actions.iter().map(|a| a.label().to_string()).collect();
            let picked = self.presenter.choose("Choose your action:", &options)?;
            let choice = match actions.get(picked).copied().unwrap_or(CombatAction::Attack) {
                CombatAction::Attack => TurnChoice::Attack,
                CombatAction::SpecialAbility => TurnChoice::Special,
                CombatAction::Flee => TurnChoice::Flee,
                CombatAction::UseConsumable => match self.pick_consumable()? {
                    Some(index) => TurnChoice::Consumable(index),
                    None => continue,
                },
            };

            match encounter.round(&mut self.state.player, choice, &mut self.rng) {
                Ok(events) => self.presenter.show_events(&events),
                Err(rejection) => self.say(&rejection.to_string(), Tone::Warning),
            }
            self.presenter.pause()?;
        };

        if outcome == CombatOutcome::Victory {
            let events = drop_loot(&mut self.state.player, &encounter.foe, &mut self.rng);
            self.presenter.show_events(&events);
            self.presenter.pause()?;
        }
        Ok(outcome)
    }

    /// Inventory index of the consumable to use, or None on cancel.
    fn pick_consumable(&mut self) -> Result<Option<usize>, GameError> {
        let indices = self.state.player.inventory.consumable_indices();
        let mut options: Vec<String> = indices
            .iter()
            .filter_map(|i| self.state.player.inventory.get(*i))
            .map(|item| format!("{} - {}", item.name(), item.description()))
            .collect();
        options.push("Cancel".to_string());
        let choice = self
            .presenter
            .choose("--- Use Consumable Item --- 🔥", &options)?;
        Ok(indices.get(choice).copied())
    }

    /// One overworld trip. After beating an ambush the player may keep going.
    pub fn explore_overworld(&mut self) -> Result<(), GameError> {
        loop {
            self.screen()?;
            self.say("--- Exploring Overworld --- 🏞️", Tone::Success);
            let (find, events) = overworld::explore(&mut self.state.player, &mut self.rng);
            self.presenter.show_events(&events);

            let OverworldFind::Ambush(enemy) = find else {
                return self.presenter.pause();
            };
            self.say("🌲 You venture deeper into the wilderness...", Tone::Success);
            self.presenter.pause()?;
            if self.fight(enemy.into())? != CombatOutcome::Victory {
                return Ok(());
            }
            let options = labels(&["Continue Exploring", "Return to Main Menu"]);
            if self.presenter.choose("What next?", &options)? == 1 {
                self.say("You decide to return to the main path.", Tone::Warning);
                return self.presenter.pause();
            }
        }
    }
}
