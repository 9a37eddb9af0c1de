// Starting character
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_XP_TO_NEXT_LEVEL: i32 = 100;
pub const STARTING_HP: i32 = 288;
pub const STARTING_ATTACK: i32 = 12;
pub const STARTING_DEFENSE: i32 = 6;
pub const STARTING_GOLD: u32 = 50;

// Leveling
pub const XP_CURVE_MULTIPLIER: f64 = 1.5;
pub const LEVEL_UP_MAX_HP: i32 = 20;
pub const LEVEL_UP_ATTACK: i32 = 5;
pub const LEVEL_UP_DEFENSE: i32 = 2;
/// Special ability recharges once xp reaches this fraction of the next threshold.
pub const SPECIAL_RECHARGE_XP_FRACTION: f64 = 0.5;

// Player attacks
pub const ATTACK_DAMAGE_PER_PAGE: i32 = 2;
pub const SPECIAL_DAMAGE_PER_PAGE: i32 = 3;
pub const AMULET_DOUBLE_DAMAGE_CHANCE: f64 = 0.25;
pub const FLAME_SWORD_FIRE_DAMAGE: i32 = 10;
pub const FLEE_CHANCE: f64 = 0.5;

// Enemy attacks
pub const ENEMY_SPECIAL_ATTACK_CHANCE: f64 = 0.2;
pub const BOSS_SPECIAL_ATTACK_CHANCE: f64 = 0.3;
pub const SPECIAL_ATTACK_MULTIPLIER: i32 = 2;
pub const ENEMY_DAMAGE_CAP: i32 = 100;
pub const GUARDIAN_SHIELD_DAMAGE_FACTOR: f64 = 0.9;
pub const FROST_ARMOR_SLOW_FACTOR: f64 = 0.9;
pub const SHADOW_CLOAK_DODGE_CHANCE: f64 = 0.25;
pub const BOSS_LEVEL_BONUS: u32 = 2;

// Consumables
pub const HEAL_PER_PAGE: i32 = 2;
pub const POISON_PER_PAGE: i32 = 1;
pub const REVIVE_HP_FRACTION: f64 = 0.5;
pub const VITALITY_MAX_HP_BONUS: i32 = 30;

// Loot
pub const ENEMY_DROP_CHANCE: f64 = 0.5;
pub const ENEMY_BONUS_GEAR_CHANCE: f64 = 0.2;
pub const BOSS_KEY_DROP_CHANCE: f64 = 0.3;

// Dungeons
pub const DUNGEON_MIN_MOBS: u32 = 3;
pub const DUNGEON_MAX_MOBS: u32 = 6;
pub const DUNGEON_XP_PER_MOB: i32 = 20;
pub const DUNGEON_CLEAR_XP_BONUS: i32 = 100;
pub const FINAL_DUNGEON_PAGES_REQUIRED: u32 = 5;
pub const STARTING_DUNGEON_LEVEL: u32 = 1;

// Economy
pub const KEY_SELL_PRICE: u32 = 10;
pub const REST_HP_FRACTION: f64 = 0.5;
pub const REST_HEAL_PER_PAGE: i32 = 2;

// Overworld
pub const OVERWORLD_GOLD_CHANCE: f64 = 0.4;
pub const OVERWORLD_KEY_CHANCE: f64 = 0.7;
pub const OVERWORLD_GOLD_MIN: u32 = 10;
pub const OVERWORLD_GOLD_MAX: u32 = 100;
pub const OVERWORLD_GOLD_PER_PAGE: u32 = 2;
pub const OVERWORLD_AMBUSH_LEVEL_MIN: u32 = 1;
pub const OVERWORLD_AMBUSH_LEVEL_MAX: u32 = 3;

// Counter-based achievements
pub const TREASURE_HUNTER_GOLD: u32 = 50;
pub const DUNGEON_EXPLORER_CLEARS: u32 = 5;
pub const BOSS_SLAYER_KILLS: u32 = 10;
pub const SPECIALIST_USES: u32 = 10;
pub const OVERWORLD_WANDERER_TRIPS: u32 = 10;
pub const KEY_HOARDER_KEYS: u32 = 100;
pub const KEY_SELLER_KEYS: u32 = 10;
