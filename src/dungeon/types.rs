use serde::{Deserialize, Serialize};

use crate::combat::{BossKind, Realm};
use crate::core::constants::*;
use crate::items::KeyType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Room {
    Monster(Realm),
    Boss(BossKind),
}

/// A dungeon run decided before the key is spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonPlan {
    pub key_type: KeyType,
    /// Dungeon level this run would clear.
    pub level: u32,
    /// Level passed to enemy and boss generation.
    pub scaled_level: u32,
    pub num_mobs: u32,
    pub rooms: Vec<Room>,
}

impl DungeonPlan {
    /// `num_mobs` monster rooms of the dungeon's element, then the boss.
    pub fn new(key_type: KeyType, level: u32, player_level: u32, num_mobs: u32) -> Self {
        let realm = Realm::from(key_type);
        let mut rooms = vec![Room::Monster(realm); num_mobs as usize];
        rooms.push(Room::Boss(BossKind::for_dungeon(key_type)));
        Self {
            key_type,
            level,
            scaled_level: level + player_level,
            num_mobs,
            rooms,
        }
    }

    pub fn boss(&self) -> BossKind {
        BossKind::for_dungeon(self.key_type)
    }

    /// XP granted for clearing every room.
    pub fn clear_xp(&self) -> i32 {
        self.num_mobs as i32 * DUNGEON_XP_PER_MOB + DUNGEON_CLEAR_XP_BONUS
    }
}

/// What the details screen shows before the key is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonPreview {
    pub num_mobs: u32,
    pub boss_name: &'static str,
    pub boss_hp: i32,
    pub boss_attack: i32,
}

impl From<&DungeonPlan> for DungeonPreview {
    fn from(plan: &DungeonPlan) -> Self {
        let boss = plan.boss();
        let (boss_hp, boss_attack) = boss.preview_stats();
        Self {
            num_mobs: plan.num_mobs,
            boss_name: boss.name(),
            boss_hp,
            boss_attack,
        }
    }
}
