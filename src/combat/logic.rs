use log::debug;
use rand::Rng;

use super::types::{Combatant, Foe};
use crate::achievements::Milestone;
use crate::character::Player;
use crate::core::combat_math::{mitigated_damage, roll_chance, scale_down};
use crate::core::constants::*;
use crate::errors::Rejection;
use crate::items::{use_consumable, UniqueEffect};
use crate::events::GameEvent;

/// What the player can do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    UseConsumable,
    SpecialAbility,
    Flee,
}

impl CombatAction {
    pub fn label(&self) -> &'static str {
        match self {
            CombatAction::Attack => "Attack ⚔️",
            CombatAction::UseConsumable => "Use Consumable 🔥",
            CombatAction::SpecialAbility => "Use Special Ability 🌟",
            CombatAction::Flee => "Flee 🏃",
        }
    }
}

/// Menu for the current turn. Attack and Flee are always present; the
/// other two depend on whether the special is ready and a consumable is held.
pub fn available_actions(player: &Player) -> Vec<CombatAction> {
    let mut actions = vec![CombatAction::Attack];
    if player.inventory.has_consumables() {
        actions.push(CombatAction::UseConsumable);
    }
    if player.special_ability_ready {
        actions.push(CombatAction::SpecialAbility);
    }
    actions.push(CombatAction::Flee);
    actions
}

/// A normal attack. Effects layer in a fixed order: mitigated base plus
/// pages, amulet double, flame sword bonus, then swiftness doubling.
pub fn player_attack(player: &Player, foe: &mut Foe, rng: &mut impl Rng) -> Vec<GameEvent> {
    let target = foe.name().to_string();
    let mut events = Vec::new();

    let mut damage = mitigated_damage(player.attack, foe.stats().defense)
        + player.pages as i32 * ATTACK_DAMAGE_PER_PAGE;

    let weapon = player.inventory.weapon_effect();
    if weapon == Some(UniqueEffect::DoubleDamageChance)
        && roll_chance(AMULET_DOUBLE_DAMAGE_CHANCE, rng)
    {
        damage *= 2;
        events.push(GameEvent::AmuletSurge {
            target: target.clone(),
            damage,
        });
    }
    if weapon == Some(UniqueEffect::FireDamage) {
        damage += FLAME_SWORD_FIRE_DAMAGE;
        events.push(GameEvent::FireDamage {
            target: target.clone(),
            amount: FLAME_SWORD_FIRE_DAMAGE,
        });
    }
    let double_strike = player.inventory.armor_effect() == Some(UniqueEffect::DoubleStrike);
    if double_strike {
        damage *= 2;
    }

    foe.take_damage(damage);
    events.push(GameEvent::PlayerAttack {
        target,
        damage,
        double_strike,
    });
    events
}

/// Spends the special ability and strikes with the resulting attack.
/// A spent ability still strikes, just without the doubling.
pub fn special_attack(player: &mut Player, foe: &mut Foe) -> Vec<GameEvent> {
    let mut events = player.use_special_ability();
    let damage = mitigated_damage(player.attack, foe.stats().defense)
        + player.pages as i32 * SPECIAL_DAMAGE_PER_PAGE;
    foe.take_damage(damage);
    events.push(GameEvent::SpecialStrike {
        target: foe.name().to_string(),
        damage,
    });
    events
}

/// 50/50 escape. A clean getaway gives the special ability its recharge check.
pub fn attempt_flee(player: &mut Player, rng: &mut impl Rng) -> (bool, Vec<GameEvent>) {
    if roll_chance(FLEE_CHANCE, rng) {
        let mut events = vec![GameEvent::FleeSucceeded];
        events.extend(player.reset_special_ability());
        (true, events)
    } else {
        (false, vec![GameEvent::FleeFailed])
    }
}

/// The foe's swing plus the dungeon level, filtered through the worn armor.
pub fn enemy_turn(
    player: &mut Player,
    foe: &mut Foe,
    dungeon_level: u32,
    rng: &mut impl Rng,
) -> Vec<GameEvent> {
    let strike = foe.perform_attack(rng);
    let mut damage = strike.damage + dungeon_level as i32;
    let mut events = Vec::new();

    match player.inventory.armor_effect() {
        Some(UniqueEffect::DamageReduction) => {
            damage = scale_down(damage, GUARDIAN_SHIELD_DAMAGE_FACTOR);
            events.push(GameEvent::DamageReduced { damage });
        }
        Some(UniqueEffect::Slow) => {
            let stats = foe.stats_mut();
            stats.attack = scale_down(stats.attack, FROST_ARMOR_SLOW_FACTOR);
            events.push(GameEvent::EnemySlowed {
                name: stats.name.clone(),
                attack: stats.attack,
            });
        }
        Some(UniqueEffect::Invisibility) if roll_chance(SHADOW_CLOAK_DODGE_CHANCE, rng) => {
            events.push(GameEvent::AttackDodged {
                name: foe.name().to_string(),
            });
            return events;
        }
        _ => {}
    }

    player.take_damage(damage);
    events.push(GameEvent::EnemyAttack {
        name: foe.name().to_string(),
        label: strike.label,
        damage,
    });
    events
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
    Fled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatPhase {
    PlayerTurn,
    EnemyTurn,
    Resolved(CombatOutcome),
}

/// The player's pick for a turn. Consumables are chosen by inventory index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnChoice {
    Attack,
    Consumable(usize),
    Special,
    Flee,
}

/// One fight, stepped turn by turn: PlayerTurn, EnemyTurn, repeat until
/// someone drops or the player gets away.
#[derive(Debug, Clone)]
pub struct Encounter {
    pub foe: Foe,
    pub dungeon_level: u32,
    phase: CombatPhase,
}

impl Encounter {
    pub fn new(foe: Foe, dungeon_level: u32) -> Self {
        debug!("encounter: {} (level {})", foe.name(), foe.stats().level);
        Self {
            foe,
            dungeon_level,
            phase: CombatPhase::PlayerTurn,
        }
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<CombatOutcome> {
        match self.phase {
            CombatPhase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn opening(&self) -> GameEvent {
        GameEvent::Encounter {
            name: self.foe.name().to_string(),
            level: self.foe.stats().level,
            is_boss: self.foe.is_boss(),
        }
    }

    /// Resolves the player's action. A rejected consumable leaves the turn
    /// with the player.
    pub fn player_action(
        &mut self,
        player: &mut Player,
        choice: TurnChoice,
        rng: &mut impl Rng,
    ) -> Result<Vec<GameEvent>, Rejection> {
        if self.phase != CombatPhase::PlayerTurn {
            return Ok(Vec::new());
        }

        let mut events = match choice {
            TurnChoice::Attack => player_attack(player, &mut self.foe, rng),
            TurnChoice::Special => special_attack(player, &mut self.foe),
            TurnChoice::Consumable(index) => {
                if !player.inventory.has_consumables() {
                    return Err(Rejection::NoConsumables);
                }
                use_consumable(player, index, Some(&mut self.foe))?
            }
            TurnChoice::Flee => {
                let (fled, flee_events) = attempt_flee(player, rng);
                if fled {
                    self.phase = CombatPhase::Resolved(CombatOutcome::Fled);
                    debug!("fled from {}", self.foe.name());
                    return Ok(flee_events);
                }
                flee_events
            }
        };

        if self.foe.is_alive() {
            self.phase = CombatPhase::EnemyTurn;
        } else {
            events.extend(self.resolve(player, CombatOutcome::Victory));
        }
        Ok(events)
    }

    /// The foe's reply. Ends the fight if the player falls.
    pub fn enemy_action(&mut self, player: &mut Player, rng: &mut impl Rng) -> Vec<GameEvent> {
        if self.phase != CombatPhase::EnemyTurn {
            return Vec::new();
        }
        let mut events = enemy_turn(player, &mut self.foe, self.dungeon_level, rng);
        if player.is_alive() {
            self.phase = CombatPhase::PlayerTurn;
        } else {
            events.extend(self.resolve(player, CombatOutcome::Defeat));
        }
        events
    }

    /// Player action followed by the enemy's reply when the fight goes on.
    pub fn round(
        &mut self,
        player: &mut Player,
        choice: TurnChoice,
        rng: &mut impl Rng,
    ) -> Result<Vec<GameEvent>, Rejection> {
        let mut events = self.player_action(player, choice, rng)?;
        events.extend(self.enemy_action(player, rng));
        Ok(events)
    }

    fn resolve(&mut self, player: &mut Player, outcome: CombatOutcome) -> Vec<GameEvent> {
        self.phase = CombatPhase::Resolved(outcome);
        debug!("encounter with {} resolved: {:?}", self.foe.name(), outcome);

        let mut events = Vec::new();
        match outcome {
            CombatOutcome::Victory => {
                events.push(GameEvent::FoeDefeated {
                    name: self.foe.name().to_string(),
                    is_boss: self.foe.is_boss(),
                });
                player.record.enemies_defeated += 1;
                events.extend(player.unlock(Milestone::FirstBlood));
            }
            CombatOutcome::Defeat => events.push(GameEvent::PlayerDefeated),
            CombatOutcome::Fled => {}
        }
        events.extend(player.reset_special_ability());
        events
    }
}
