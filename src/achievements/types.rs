//! Achievement system types and data structures.

use crate::combat::BossKind;
use crate::items::ItemId;
use serde::{Deserialize, Serialize};

/// Achievement categories for organization in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    Combat,
    Level,
    Exploration,
    Items,
    Economy,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 5] = [
        AchievementCategory::Combat,
        AchievementCategory::Level,
        AchievementCategory::Exploration,
        AchievementCategory::Items,
        AchievementCategory::Economy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Combat => "Combat",
            AchievementCategory::Level => "Level",
            AchievementCategory::Exploration => "Exploration",
            AchievementCategory::Items => "Items",
            AchievementCategory::Economy => "Economy",
        }
    }
}

/// Unique identifier for each catalog achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    // Combat
    FirstBlood,
    BossSlayer,   // 10 bosses
    Specialist,   // 10 special abilities
    UltimateSlayer,
    FinalConqueror,
    // Level
    Level2,
    Level3,
    Level4,
    Level5,
    Level10,
    // Exploration
    DungeonExplorer, // 5 dungeons
    DungeonMaster,
    OverworldWanderer, // 10 trips
    ClearedDungeon1,
    ClearedDungeon2,
    ClearedDungeon3,
    ClearedDungeon4,
    ClearedDungeon5,
    RestedAndRecovered,
    // Items
    Collector,
    MasterOfKeys,
    KeyHoarder, // 100 keys
    UsedBomb,
    UsedScrollOfFireball,
    UsedPoisonDagger,
    ObtainedFlameCrown,
    ObtainedFrostPendant,
    ObtainedGaiasShield,
    ObtainedStormBracer,
    // Economy
    TreasureHunter,
    PurchasedIronSword,
    PurchasedSteelArmor,
    PurchasedShadowCloak,
    SoldTenKeys,
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
}

/// Something noteworthy that happened. Resolved against the catalog by
/// `AchievementId::for_milestone`; milestones with no catalog entry are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    FirstBlood,
    LeveledUp(u32),
    ClearedDungeon(u32),
    Used(ItemId),
    Obtained(ItemId),
    Purchased(ItemId),
    Defeated(BossKind),
    UniqueObtained,
    Rested,
    GoldHeld(u32),
    AllElementKeysHeld,
    KeysSold(u32),
    KeysCollected(u32),
    DungeonsCleared(u32),
    BossesDefeated(u32),
    SpecialAbilitiesUsed(u32),
    OverworldTrips(u32),
    AllBossesDefeated,
    AllDungeonsCleared,
}

/// Unlocked achievements in unlock order. Each id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Achievements {
    unlocked: Vec<AchievementId>,
}

impl Achievements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id`. Returns false if it was already unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.push(id);
        true
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    pub fn unlocked(&self) -> &[AchievementId] {
        &self.unlocked
    }

    pub fn count(&self) -> usize {
        self.unlocked.len()
    }
}
