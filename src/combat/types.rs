use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::combat_math::roll_chance;
use crate::core::constants::*;
use crate::items::{ItemId, KeyType};

/// Theme used to generate enemies. Elemental and Final realms come from
/// dungeon keys; Normal is the overworld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Realm {
    Fire,
    Ice,
    Earth,
    Lightning,
    Normal,
    Final,
}

impl Realm {
    pub fn name(&self) -> &'static str {
        match self {
            Realm::Fire => "Fire",
            Realm::Ice => "Ice",
            Realm::Earth => "Earth",
            Realm::Lightning => "Lightning",
            Realm::Normal => "Normal",
            Realm::Final => "Final",
        }
    }

    fn name_pool(&self) -> &'static [&'static str] {
        match self {
            Realm::Fire => &["Flame Imp", "Lava Golem", "Ember Drake"],
            Realm::Ice => &["Frost Wraith", "Ice Elemental", "Glacial Yeti"],
            Realm::Earth => &["Stone Giant", "Mud Monster", "Terrakhan"],
            Realm::Lightning => &["Thunder Drake", "Electric Serpent", "Volt Phoenix"],
            Realm::Normal => &["Goblin", "Skeleton", "Orc", "Troll", "Bandit", "Dark Knight"],
            Realm::Final => &["Final Guardian"],
        }
    }
}

impl From<KeyType> for Realm {
    fn from(key_type: KeyType) -> Self {
        match key_type {
            KeyType::Fire => Realm::Fire,
            KeyType::Ice => Realm::Ice,
            KeyType::Earth => Realm::Earth,
            KeyType::Lightning => Realm::Lightning,
            KeyType::Final => Realm::Final,
        }
    }
}

/// The five dungeon bosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossKind {
    FireLord,
    IceLord,
    EarthLord,
    LightningLord,
    DarkOverlord,
}

impl BossKind {
    pub const ALL: [BossKind; 5] = [
        BossKind::FireLord,
        BossKind::IceLord,
        BossKind::EarthLord,
        BossKind::LightningLord,
        BossKind::DarkOverlord,
    ];

    pub fn for_dungeon(key_type: KeyType) -> Self {
        match key_type {
            KeyType::Fire => BossKind::FireLord,
            KeyType::Ice => BossKind::IceLord,
            KeyType::Earth => BossKind::EarthLord,
            KeyType::Lightning => BossKind::LightningLord,
            KeyType::Final => BossKind::DarkOverlord,
        }
    }

    /// Element of the dungeon this boss guards.
    pub fn dungeon(&self) -> KeyType {
        match self {
            BossKind::FireLord => KeyType::Fire,
            BossKind::IceLord => KeyType::Ice,
            BossKind::EarthLord => KeyType::Earth,
            BossKind::LightningLord => KeyType::Lightning,
            BossKind::DarkOverlord => KeyType::Final,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BossKind::FireLord => "Fire Lord",
            BossKind::IceLord => "Ice Lord",
            BossKind::EarthLord => "Earth Lord",
            BossKind::LightningLord => "Lightning Lord",
            BossKind::DarkOverlord => "Dark Overlord",
        }
    }

    /// The unique item this boss always drops.
    pub fn unique_loot(&self) -> ItemId {
        match self {
            BossKind::FireLord => ItemId::FlameCrown,
            BossKind::IceLord => ItemId::FrostPendant,
            BossKind::EarthLord => ItemId::GaiasShield,
            BossKind::LightningLord => ItemId::StormBracer,
            BossKind::DarkOverlord => ItemId::CrownOfTheConqueror,
        }
    }

    /// Stats shown on the dungeon details screen before the key is spent.
    /// Returns (hp, attack). Display-only; the real boss is generated on entry.
    pub fn preview_stats(&self) -> (i32, i32) {
        match self {
            BossKind::FireLord => (64, 16),
            BossKind::IceLord => (72, 14),
            BossKind::EarthLord => (80, 12),
            BossKind::LightningLord => (55, 18),
            BossKind::DarkOverlord => (100, 22),
        }
    }
}

/// Stat block shared by every foe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoeStats {
    pub name: String,
    pub level: u32,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub xp_reward: i32,
}

/// Result of a foe's swing before the player's armor is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyStrike {
    pub damage: i32,
    pub label: &'static str,
    pub special: bool,
}

/// Capabilities every foe shares.
pub trait Combatant {
    fn stats(&self) -> &FoeStats;
    fn stats_mut(&mut self) -> &mut FoeStats;
    fn special_attack_chance(&self) -> f64;
    fn special_attack_label(&self) -> &'static str;

    fn is_alive(&self) -> bool {
        self.stats().hp > 0
    }

    fn take_damage(&mut self, amount: i32) {
        self.stats_mut().hp -= amount;
    }

    /// Swing with a chance of a doubled special attack. Capped at 100.
    fn perform_attack(&self, rng: &mut impl Rng) -> EnemyStrike
    where
        Self: Sized,
    {
        let attack = self.stats().attack;
        let (damage, label, special) = if roll_chance(self.special_attack_chance(), rng) {
            (
                attack * SPECIAL_ATTACK_MULTIPLIER,
                self.special_attack_label(),
                true,
            )
        } else {
            (attack, "an attack", false)
        };
        EnemyStrike {
            damage: damage.min(ENEMY_DAMAGE_CAP),
            label,
            special,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub stats: FoeStats,
}

impl Enemy {
    /// Rolls a fresh enemy. Stats are linear in level; only the name is random.
    pub fn generate(level: u32, realm: Realm, rng: &mut impl Rng) -> Self {
        let lvl = level as i32;
        let name = realm
            .name_pool()
            .choose(rng)
            .copied()
            .unwrap_or("Goblin")
            .to_string();
        let stats = match realm {
            Realm::Final => FoeStats {
                name,
                level,
                hp: 33 + lvl * 30,
                attack: 15 + lvl * 4,
                defense: 8 + lvl,
                xp_reward: 1000 + lvl * 100,
            },
            _ => FoeStats {
                name,
                level,
                hp: 38 + lvl * 10,
                attack: 6 + lvl * 2,
                defense: 3 + lvl,
                xp_reward: 50 + lvl * 10,
            },
        };
        Self { stats }
    }
}

impl Combatant for Enemy {
    fn stats(&self) -> &FoeStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut FoeStats {
        &mut self.stats
    }

    fn special_attack_chance(&self) -> f64 {
        ENEMY_SPECIAL_ATTACK_CHANCE
    }

    fn special_attack_label(&self) -> &'static str {
        "a mighty blow"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    pub kind: BossKind,
    pub stats: FoeStats,
}

impl Boss {
    /// Builds the boss guarding a dungeon. Bosses sit two levels above the
    /// dungeon's scaled level.
    pub fn generate(level: u32, dungeon: KeyType) -> Self {
        let kind = BossKind::for_dungeon(dungeon);
        let lvl = level as i32;
        let (hp, attack, defense, xp_reward) = match kind {
            BossKind::DarkOverlord => (300 + lvl * 30, 20 + lvl * 2, 15 + lvl, 1500 + lvl * 100),
            _ => (150 + lvl * 10, 15 + lvl * 2, 10 + lvl, 400 + lvl * 20),
        };
        Self {
            kind,
            stats: FoeStats {
                name: kind.name().to_string(),
                level: level + BOSS_LEVEL_BONUS,
                hp,
                attack,
                defense,
                xp_reward,
            },
        }
    }
}

impl Combatant for Boss {
    fn stats(&self) -> &FoeStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut FoeStats {
        &mut self.stats
    }

    fn special_attack_chance(&self) -> f64 {
        BOSS_SPECIAL_ATTACK_CHANCE
    }

    fn special_attack_label(&self) -> &'static str {
        "a devastating strike"
    }
}

/// Whatever the player is fighting in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Foe {
    Enemy(Enemy),
    Boss(Boss),
}

impl Foe {
    pub fn name(&self) -> &str {
        &self.stats().name
    }

    pub fn is_boss(&self) -> bool {
        matches!(self, Foe::Boss(_))
    }

    pub fn boss_kind(&self) -> Option<BossKind> {
        match self {
            Foe::Boss(boss) => Some(boss.kind),
            Foe::Enemy(_) => None,
        }
    }
}

impl From<Enemy> for Foe {
    fn from(enemy: Enemy) -> Self {
        Foe::Enemy(enemy)
    }
}

impl From<Boss> for Foe {
    fn from(boss: Boss) -> Self {
        Foe::Boss(boss)
    }
}

impl Combatant for Foe {
    fn stats(&self) -> &FoeStats {
        match self {
            Foe::Enemy(enemy) => enemy.stats(),
            Foe::Boss(boss) => boss.stats(),
        }
    }

    fn stats_mut(&mut self) -> &mut FoeStats {
        match self {
            Foe::Enemy(enemy) => enemy.stats_mut(),
            Foe::Boss(boss) => boss.stats_mut(),
        }
    }

    fn special_attack_chance(&self) -> f64 {
        match self {
            Foe::Enemy(enemy) => enemy.special_attack_chance(),
            Foe::Boss(boss) => boss.special_attack_chance(),
        }
    }

    fn special_attack_label(&self) -> &'static str {
        match self {
            Foe::Enemy(enemy) => enemy.special_attack_label(),
            Foe::Boss(boss) => boss.special_attack_label(),
        }
    }
}
