//! Narrative beats produced by the core.
//!
//! Game logic never prints. It returns `GameEvent`s and the presentation
//! layer renders them with [`GameEvent::message`] and [`GameEvent::tone`].

use crate::achievements::AchievementId;
use crate::items::{EquipmentSlot, ItemId, KeyType};

/// How a message should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Danger,
    Loot,
    Magic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    // Progression
    LeveledUp { level: u32, max_hp: i32, attack: i32, defense: i32 },
    AchievementUnlocked { id: AchievementId },
    SpecialAbilityUsed,
    SpecialAbilityNotReady,
    SpecialAbilityRecharged,

    // Inventory
    ItemAdded { item: ItemId },
    ItemRemoved { item: ItemId },
    Equipped { item: ItemId, slot: EquipmentSlot, bonus: i32 },
    Unequipped { item: ItemId, slot: EquipmentSlot },
    VitalityGained { amount: i32 },
    VitalityLost { amount: i32 },
    ItemSold { item: ItemId, gold: u32 },

    // Combat
    Encounter { name: String, level: u32, is_boss: bool },
    PlayerAttack { target: String, damage: i32, double_strike: bool },
    AmuletSurge { target: String, damage: i32 },
    FireDamage { target: String, amount: i32 },
    SpecialStrike { target: String, damage: i32 },
    BlastHit { item: ItemId, target: String, damage: i32 },
    FleeSucceeded,
    FleeFailed,
    EnemyAttack { name: String, label: &'static str, damage: i32 },
    DamageReduced { damage: i32 },
    EnemySlowed { name: String, attack: i32 },
    AttackDodged { name: String },
    FoeDefeated { name: String, is_boss: bool },
    PlayerDefeated,

    // Consumables
    Healed { item: ItemId, amount: i32 },
    Fortified { item: ItemId, amount: i32 },
    Poisoned { item: ItemId, damage: i32 },
    Revived { item: ItemId, hp: i32 },
    NoEffectRightNow { item: ItemId },
    BlastReleased { item: ItemId, damage: i32 },
    NothingHappened { item: ItemId },

    // Loot
    Dropped { from: String, item: ItemId },
    BonusDrop { from: String, item: ItemId },
    PageGained { total: u32 },
    KeyDropped { from: String, item: ItemId },

    // Dungeons and the overworld
    KeyConsumed { item: ItemId, remaining: u32 },
    DungeonEntered { key_type: KeyType, level: u32, scaled_level: u32 },
    DungeonCleared { level: u32, xp: i32 },
    Rested { amount: i32 },
    GoldFound { amount: u32 },
    KeyFound { item: ItemId },

    // Shop
    Purchased { item: ItemId, price: u32 },
    KeysSold { quantity: u32, gold: u32 },
}

impl GameEvent {
    pub fn message(&self) -> String {
        match self {
            GameEvent::LeveledUp {
                level,
                max_hp,
                attack,
                defense,
            } => format!(
                "*** You leveled up to Level {}! *** Stats increased: HP={}, Attack={}, Defense={}",
                level, max_hp, attack, defense
            ),
            GameEvent::AchievementUnlocked { id } => {
                format!("🏆 Achievement Unlocked: {} 🏆", id.name())
            }
            GameEvent::SpecialAbilityUsed => {
                "🔥 You use your Special Ability! Attack damage doubled! 🔥".to_string()
            }
            GameEvent::SpecialAbilityNotReady => {
                "⚠️ Special Ability not ready yet. Gain more XP to level up! ⚠️".to_string()
            }
            GameEvent::SpecialAbilityRecharged => {
                "✨ Your Special Ability is ready to use again! ✨".to_string()
            }
            GameEvent::ItemAdded { item } => format!("📦 {} added to inventory.", item.name()),
            GameEvent::ItemRemoved { item } => {
                format!("📦 {} removed from inventory.", item.name())
            }
            GameEvent::Equipped { item, slot, bonus } => {
                let stat = match slot {
                    EquipmentSlot::Weapon => "Attack",
                    EquipmentSlot::Armor => "Defense",
                };
                format!(
                    "Equipped {} as {}. {:+} {}.",
                    item.name(),
                    slot.name(),
                    bonus,
                    stat
                )
            }
            GameEvent::Unequipped { item, slot } => {
                format!("Unequipped {} from {} slot.", item.name(), slot.name())
            }
            GameEvent::VitalityGained { amount } => {
                format!("You feel stronger! Max HP increased by {}. ❤️", amount)
            }
            GameEvent::VitalityLost { amount } => {
                format!("Your vitality fades. Max HP decreased by {}.", amount)
            }
            GameEvent::ItemSold { item, gold } => {
                format!("Sold {} for {} gold.", item.name(), gold)
            }
            GameEvent::Encounter {
                name,
                level,
                is_boss,
            } => {
                if *is_boss {
                    format!("A formidable {} appears! (Level {}) 🐉", name, level)
                } else {
                    format!("You encounter a {} (Level {})! 👾", name, level)
                }
            }
            GameEvent::PlayerAttack {
                target,
                damage,
                double_strike,
            } => {
                if *double_strike {
                    format!(
                        "You swiftly attack {} twice for a total of {} damage! ⚔️",
                        target, damage
                    )
                } else {
                    format!("You attack {} for {} damage. 🗡️", target, damage)
                }
            }
            GameEvent::AmuletSurge { target, damage } => format!(
                "The Amulet of Strength glows! You deal double damage to {} for {} damage! 💥",
                target, damage
            ),
            GameEvent::FireDamage { target, amount } => format!(
                "Your Flame Sword burns {} for an additional {} fire damage! 🔥",
                target, amount
            ),
            GameEvent::SpecialStrike { target, damage } => {
                format!("Your special attack deals {} damage to {}! 💥", damage, target)
            }
            GameEvent::BlastHit {
                item,
                target,
                damage,
            } => format!(
                "You used {}! {} takes {} damage! 💣",
                item.name(),
                target,
                damage
            ),
            GameEvent::FleeSucceeded => "You successfully fled the battle. 🏃".to_string(),
            GameEvent::FleeFailed => "Flee attempt failed! 😵".to_string(),
            GameEvent::EnemyAttack {
                name,
                label,
                damage,
            } => format!("{} lands {} on you for {} damage. 🩸", name, label, damage),
            GameEvent::DamageReduced { damage } => format!(
                "Your Guardian Shield reduces the damage by 10%! You take {} damage.",
                damage
            ),
            GameEvent::EnemySlowed { name, attack } => format!(
                "Your Frost Armor slows {}, reducing its attack power to {}. ❄️",
                name, attack
            ),
            GameEvent::AttackDodged { name } => {
                format!("You become invisible and avoid {}'s attack! 🖤", name)
            }
            GameEvent::FoeDefeated { name, is_boss } => {
                if *is_boss {
                    format!("*** You have defeated the Boss {}! *** 🎉", name)
                } else {
                    format!("You have defeated the {}! 🎊", name)
                }
            }
            GameEvent::PlayerDefeated => "💀 You have been slain. 😔".to_string(),
            GameEvent::Healed { item, amount } => {
                format!("You used {} and healed {} HP. 🩸", item.name(), amount)
            }
            GameEvent::Fortified { item, amount } => format!(
                "You used {}! Defense increased by {}. 🛡️",
                item.name(),
                amount
            ),
            GameEvent::Poisoned { item, damage } => format!(
                "☠️ You used {}! It deals {} poison damage to you. 🩸",
                item.name(),
                damage
            ),
            GameEvent::Revived { item, hp } => format!(
                "🛡️ You used {}! You have been revived with {} HP.",
                item.name(),
                hp
            ),
            GameEvent::NoEffectRightNow { item } => {
                format!("🔮 {} has no effect right now.", item.name())
            }
            GameEvent::BlastReleased { item, damage } => format!(
                "You used {}! It unleashes {} damage, but there is nothing here to hit.",
                item.name(),
                damage
            ),
            GameEvent::NothingHappened { item } => {
                format!("You used {}, but nothing happened. ❓", item.name())
            }
            GameEvent::Dropped { from, item } => {
                format!("🛍️ {} dropped {}! {}", from, item.name(), item.description())
            }
            GameEvent::BonusDrop { from, item } => format!(
                "✨ {} also dropped {}! {}",
                from,
                item.name(),
                item.description()
            ),
            GameEvent::PageGained { total } => {
                format!("📄 You obtained a Page! Total Pages: {}", total)
            }
            GameEvent::KeyDropped { from, item } => {
                format!("🔑 {} dropped a {}! {}", from, item.name(), item.description())
            }
            GameEvent::KeyConsumed { item, remaining } => format!(
                "🔑 {} consumed. Remaining Keys: {}",
                item.name(),
                remaining
            ),
            GameEvent::DungeonEntered {
                key_type,
                level,
                scaled_level,
            } => format!(
                "You embark into the {} Dungeon. Entering Dungeon Level {} (Scaled Level: {})...",
                key_type.name(),
                level,
                scaled_level
            ),
            GameEvent::DungeonCleared { level, xp } => format!(
                "*** 🎉 Dungeon Level {} Cleared! *** You gain {} XP.",
                level, xp
            ),
            GameEvent::Rested { amount } => {
                format!("You take a rest and recover {} HP. 💤", amount)
            }
            GameEvent::GoldFound { amount } => {
                format!("You explore the overworld and find {} gold! 💰", amount)
            }
            GameEvent::KeyFound { item } => {
                format!("You explore the overworld and find a {}! 🔑", item.name())
            }
            GameEvent::Purchased { item, price } => {
                format!("Purchased {} for {} gold.", item.name(), price)
            }
            GameEvent::KeysSold { quantity, gold } => {
                format!("Sold {} Dungeon Key(s) for {} gold.", quantity, gold)
            }
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            GameEvent::LeveledUp { .. }
            | GameEvent::FoeDefeated { .. }
            | GameEvent::FleeSucceeded
            | GameEvent::Healed { .. }
            | GameEvent::Revived { .. }
            | GameEvent::Equipped { .. }
            | GameEvent::VitalityGained { .. }
            | GameEvent::DungeonCleared { .. }
            | GameEvent::Rested { .. }
            | GameEvent::PlayerAttack { .. }
            | GameEvent::ItemSold { .. }
            | GameEvent::Purchased { .. }
            | GameEvent::KeysSold { .. } => Tone::Success,
            GameEvent::AchievementUnlocked { .. }
            | GameEvent::SpecialAbilityUsed
            | GameEvent::SpecialAbilityRecharged
            | GameEvent::SpecialStrike { .. }
            | GameEvent::BlastHit { .. }
            | GameEvent::AmuletSurge { .. }
            | GameEvent::AttackDodged { .. }
            | GameEvent::EnemySlowed { .. }
            | GameEvent::DamageReduced { .. }
            | GameEvent::Fortified { .. }
            | GameEvent::BlastReleased { .. } => Tone::Magic,
            GameEvent::ItemAdded { .. }
            | GameEvent::Dropped { .. }
            | GameEvent::BonusDrop { .. }
            | GameEvent::PageGained { .. }
            | GameEvent::KeyDropped { .. }
            | GameEvent::KeyConsumed { .. }
            | GameEvent::GoldFound { .. }
            | GameEvent::KeyFound { .. } => Tone::Loot,
            GameEvent::EnemyAttack { .. }
            | GameEvent::FireDamage { .. }
            | GameEvent::Poisoned { .. }
            | GameEvent::PlayerDefeated
            | GameEvent::FleeFailed
            | GameEvent::Encounter { .. } => Tone::Danger,
            GameEvent::SpecialAbilityNotReady
            | GameEvent::NoEffectRightNow { .. }
            | GameEvent::NothingHappened { .. }
            | GameEvent::VitalityLost { .. }
            | GameEvent::Unequipped { .. } => Tone::Warning,
            GameEvent::ItemRemoved { .. }
            | GameEvent::DungeonEntered { .. } => Tone::Info,
        }
    }
}
