//! Static achievement definitions.

use super::types::{AchievementCategory, AchievementDef, AchievementId, Milestone};
use crate::combat::BossKind;
use crate::core::constants::{
    BOSS_SLAYER_KILLS, DUNGEON_EXPLORER_CLEARS, KEY_HOARDER_KEYS, KEY_SELLER_KEYS,
    OVERWORLD_WANDERER_TRIPS, SPECIALIST_USES, TREASURE_HUNTER_GOLD,
};
use crate::items::ItemId;

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // COMBAT ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstBlood,
        name: "First Blood",
        description: "Defeat your first enemy.",
        category: AchievementCategory::Combat,
    },
    AchievementDef {
        id: AchievementId::BossSlayer,
        name: "Boss Slayer",
        description: "Defeat 10 bosses.",
        category: AchievementCategory::Combat,
    },
    AchievementDef {
        id: AchievementId::Specialist,
        name: "Specialist",
        description: "Use a special ability 10 times.",
        category: AchievementCategory::Combat,
    },
    AchievementDef {
        id: AchievementId::UltimateSlayer,
        name: "Ultimate Slayer",
        description: "Defeat all bosses.",
        category: AchievementCategory::Combat,
    },
    AchievementDef {
        id: AchievementId::FinalConqueror,
        name: "Final Conqueror",
        description: "Defeat the Dark Overlord.",
        category: AchievementCategory::Combat,
    },
    // ═══════════════════════════════════════════════════════════════
    // LEVEL ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Level2,
        name: "Leveled Up to Level 2",
        description: "Reach level 2.",
        category: AchievementCategory::Level,
    },
    AchievementDef {
        id: AchievementId::Level3,
        name: "Leveled Up to Level 3",
        description: "Reach level 3.",
        category: AchievementCategory::Level,
    },
    AchievementDef {
        id: AchievementId::Level4,
        name: "Leveled Up to Level 4",
        description: "Reach level 4.",
        category: AchievementCategory::Level,
    },
    AchievementDef {
        id: AchievementId::Level5,
        name: "Leveled Up to Level 5",
        description: "Reach level 5.",
        category: AchievementCategory::Level,
    },
    AchievementDef {
        id: AchievementId::Level10,
        name: "Leveled Up to Level 10",
        description: "Reach level 10.",
        category: AchievementCategory::Level,
    },
    // ═══════════════════════════════════════════════════════════════
    // EXPLORATION ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::DungeonExplorer,
        name: "Dungeon Explorer",
        description: "Clear 5 dungeons.",
        category: AchievementCategory::Exploration,
    },
    AchievementDef {
        id: AchievementId::DungeonMaster,
        name: "Dungeon Master",
        description: "Clear every elemental dungeon and the Final dungeon.",
        category: AchievementCategory::Exploration,
    },
    AchievementDef {
        id: AchievementId::OverworldWanderer,
        name: "Overworld Wanderer",
        description: "Explore the Overworld 10 times.",
        category: AchievementCategory::Exploration,
    },
    AchievementDef {
        id: AchievementId::ClearedDungeon1,
        name: "Cleared Dungeon Level 1",
        description: "Clear a dungeon at dungeon level 1.",
        category: AchievementCategory::Exploration,
    },
    AchievementDef {
        id: AchievementId::ClearedDungeon2,
        name: "Cleared Dungeon Level 2",
        description: "Clear a dungeon at dungeon level 2.",
        category: AchievementCategory::Exploration,
    },
    AchievementDef {
        id: AchievementId::ClearedDungeon3,
        name: "Cleared Dungeon Level 3",
        description: "Clear a dungeon at dungeon level 3.",
        category: AchievementCategory::Exploration,
    },
    AchievementDef {
        id: AchievementId::ClearedDungeon4,
        name: "Cleared Dungeon Level 4",
        description: "Clear a dungeon at dungeon level 4.",
        category: AchievementCategory::Exploration,
    },
    AchievementDef {
        id: AchievementId::ClearedDungeon5,
        name: "Cleared Dungeon Level 5",
        description: "Clear a dungeon at dungeon level 5.",
        category: AchievementCategory::Exploration,
    },
    AchievementDef {
        id: AchievementId::RestedAndRecovered,
        name: "Rested and Recovered HP",
        description: "Take a rest to recover HP.",
        category: AchievementCategory::Exploration,
    },
    // ═══════════════════════════════════════════════════════════════
    // ITEM ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Collector,
        name: "Collector",
        description: "Obtain your first unique item.",
        category: AchievementCategory::Items,
    },
    AchievementDef {
        id: AchievementId::MasterOfKeys,
        name: "Master of Keys",
        description: "Collect all types of dungeon keys.",
        category: AchievementCategory::Items,
    },
    AchievementDef {
        id: AchievementId::KeyHoarder,
        name: "Key Hoarder",
        description: "Collect 100 dungeon keys.",
        category: AchievementCategory::Items,
    },
    AchievementDef {
        id: AchievementId::UsedBomb,
        name: "Used Bomb",
        description: "Use the Bomb consumable.",
        category: AchievementCategory::Items,
    },
    AchievementDef {
        id: AchievementId::UsedScrollOfFireball,
        name: "Used Scroll of Fireball",
        description: "Use the Scroll of Fireball.",
        category: AchievementCategory::Items,
    },
    AchievementDef {
        id: AchievementId::UsedPoisonDagger,
        name: "Used Poison Dagger",
        description: "Use the Poison Dagger.",
        category: AchievementCategory::Items,
    },
    AchievementDef {
        id: AchievementId::ObtainedFlameCrown,
        name: "Obtained Flame Crown",
        description: "Obtain the Flame Crown from defeating the Fire Lord.",
        category: AchievementCategory::Items,
    },
    AchievementDef {
        id: AchievementId::ObtainedFrostPendant,
        name: "Obtained Frost Pendant",
        description: "Obtain the Frost Pendant from defeating the Ice Lord.",
        category: AchievementCategory::Items,
    },
    AchievementDef {
        id: AchievementId::ObtainedGaiasShield,
        name: "Obtained Gaia's Shield",
        description: "Obtain Gaia's Shield from defeating the Earth Lord.",
        category: AchievementCategory::Items,
    },
    AchievementDef {
        id: AchievementId::ObtainedStormBracer,
        name: "Obtained Storm Bracer",
        description: "Obtain the Storm Bracer from defeating the Lightning Lord.",
        category: AchievementCategory::Items,
    },
    // ═══════════════════════════════════════════════════════════════
    // ECONOMY ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::TreasureHunter,
        name: "Treasure Hunter",
        description: "Obtain 50 gold.",
        category: AchievementCategory::Economy,
    },
    AchievementDef {
        id: AchievementId::PurchasedIronSword,
        name: "Purchased Iron Sword",
        description: "Purchase the Iron Sword from the shop.",
        category: AchievementCategory::Economy,
    },
    AchievementDef {
        id: AchievementId::PurchasedSteelArmor,
        name: "Purchased Steel Armor",
        description: "Purchase the Steel Armor from the shop.",
        category: AchievementCategory::Economy,
    },
    AchievementDef {
        id: AchievementId::PurchasedShadowCloak,
        name: "Purchased Shadow Cloak",
        description: "Purchase the Shadow Cloak from the shop.",
        category: AchievementCategory::Economy,
    },
    AchievementDef {
        id: AchievementId::SoldTenKeys,
        name: "Sold 10 Dungeon Keys",
        description: "Sell a total of 10 dungeon keys.",
        category: AchievementCategory::Economy,
    },
];

/// Get the definition for an achievement ID.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}

/// Get all achievements in a category.
pub fn get_achievements_by_category(category: AchievementCategory) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|def| def.category == category)
        .collect()
}

impl AchievementId {
    pub fn name(&self) -> &'static str {
        get_achievement_def(*self).map_or("Unknown", |def| def.name)
    }

    /// Catalog entry a milestone unlocks, if any.
    pub fn for_milestone(milestone: Milestone) -> Option<AchievementId> {
        match milestone {
            Milestone::FirstBlood => Some(AchievementId::FirstBlood),
            Milestone::LeveledUp(level) => match level {
                2 => Some(AchievementId::Level2),
                3 => Some(AchievementId::Level3),
                4 => Some(AchievementId::Level4),
                5 => Some(AchievementId::Level5),
                10 => Some(AchievementId::Level10),
                _ => None,
            },
            Milestone::ClearedDungeon(level) => match level {
                1 => Some(AchievementId::ClearedDungeon1),
                2 => Some(AchievementId::ClearedDungeon2),
                3 => Some(AchievementId::ClearedDungeon3),
                4 => Some(AchievementId::ClearedDungeon4),
                5 => Some(AchievementId::ClearedDungeon5),
                _ => None,
            },
            Milestone::Used(item) => match item {
                ItemId::Bomb => Some(AchievementId::UsedBomb),
                ItemId::ScrollOfFireball => Some(AchievementId::UsedScrollOfFireball),
                ItemId::PoisonDagger => Some(AchievementId::UsedPoisonDagger),
                _ => None,
            },
            Milestone::Obtained(item) => match item {
                ItemId::FlameCrown => Some(AchievementId::ObtainedFlameCrown),
                ItemId::FrostPendant => Some(AchievementId::ObtainedFrostPendant),
                ItemId::GaiasShield => Some(AchievementId::ObtainedGaiasShield),
                ItemId::StormBracer => Some(AchievementId::ObtainedStormBracer),
                _ => None,
            },
            Milestone::Purchased(item) => match item {
                ItemId::IronSword => Some(AchievementId::PurchasedIronSword),
                ItemId::SteelArmor => Some(AchievementId::PurchasedSteelArmor),
                ItemId::ShadowCloak => Some(AchievementId::PurchasedShadowCloak),
                _ => None,
            },
            Milestone::Defeated(BossKind::DarkOverlord) => Some(AchievementId::FinalConqueror),
            Milestone::Defeated(_) => None,
            Milestone::UniqueObtained => Some(AchievementId::Collector),
            Milestone::Rested => Some(AchievementId::RestedAndRecovered),
            Milestone::GoldHeld(gold) => {
                (gold >= TREASURE_HUNTER_GOLD).then_some(AchievementId::TreasureHunter)
            }
            Milestone::AllElementKeysHeld => Some(AchievementId::MasterOfKeys),
            Milestone::KeysSold(total) => {
                (total >= KEY_SELLER_KEYS).then_some(AchievementId::SoldTenKeys)
            }
            Milestone::KeysCollected(total) => {
                (total >= KEY_HOARDER_KEYS).then_some(AchievementId::KeyHoarder)
            }
            Milestone::DungeonsCleared(total) => {
                (total >= DUNGEON_EXPLORER_CLEARS).then_some(AchievementId::DungeonExplorer)
            }
            Milestone::BossesDefeated(total) => {
                (total >= BOSS_SLAYER_KILLS).then_some(AchievementId::BossSlayer)
            }
            Milestone::SpecialAbilitiesUsed(total) => {
                (total >= SPECIALIST_USES).then_some(AchievementId::Specialist)
            }
            Milestone::OverworldTrips(total) => {
                (total >= OVERWORLD_WANDERER_TRIPS).then_some(AchievementId::OverworldWanderer)
            }
            Milestone::AllBossesDefeated => Some(AchievementId::UltimateSlayer),
            Milestone::AllDungeonsCleared => Some(AchievementId::DungeonMaster),
        }
    }
}
