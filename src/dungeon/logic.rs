use log::debug;
use rand::Rng;

use super::types::DungeonPlan;
use crate::achievements::Milestone;
use crate::character::Player;
use crate::core::constants::*;
use crate::errors::Rejection;
use crate::events::GameEvent;
use crate::items::KeyType;

/// Dungeons the player can pick from: one entry per distinct element key
/// held, in pickup order, then Final when its key and enough pages are held.
pub fn available_dungeons(player: &Player) -> Result<Vec<KeyType>, Rejection> {
    if player.keys < 1 {
        return Err(Rejection::NoKeys);
    }
    let held = player.inventory.key_types();
    let mut dungeons: Vec<KeyType> = held
        .iter()
        .copied()
        .filter(|kt| *kt != KeyType::Final)
        .collect();
    if held.contains(&KeyType::Final) && player.pages >= FINAL_DUNGEON_PAGES_REQUIRED {
        dungeons.push(KeyType::Final);
    }
    if dungeons.is_empty() {
        return Err(Rejection::NoKeys);
    }
    Ok(dungeons)
}

/// Whether the player may enter a dungeon of `key_type` right now.
pub fn check_access(player: &Player, key_type: KeyType) -> Result<(), Rejection> {
    if key_type == KeyType::Final && player.pages < FINAL_DUNGEON_PAGES_REQUIRED {
        return Err(Rejection::FinalDungeonLocked {
            pages: player.pages,
            required: FINAL_DUNGEON_PAGES_REQUIRED,
        });
    }
    if player.inventory.find_key(key_type).is_none() {
        return Err(Rejection::MissingKey(key_type));
    }
    Ok(())
}

/// Rolls the number of monster rooms for a run at `dungeon_level`.
pub fn plan_dungeon(
    player: &Player,
    key_type: KeyType,
    dungeon_level: u32,
    rng: &mut impl Rng,
) -> DungeonPlan {
    let num_mobs = rng.gen_range(DUNGEON_MIN_MOBS..=DUNGEON_MAX_MOBS);
    DungeonPlan::new(key_type, dungeon_level, player.level, num_mobs)
}

/// Spends the key for `plan`. Nothing changes if access is refused.
pub fn enter_dungeon(player: &mut Player, plan: &DungeonPlan) -> Result<Vec<GameEvent>, Rejection> {
    check_access(player, plan.key_type)?;
    let key = player.take_key(plan.key_type)?;
    debug!(
        "entering {:?} dungeon level {} (scaled {}), {} keys left",
        plan.key_type, plan.level, plan.scaled_level, player.keys
    );
    Ok(vec![
        GameEvent::KeyConsumed {
            item: key.id,
            remaining: player.keys,
        },
        GameEvent::DungeonEntered {
            key_type: plan.key_type,
            level: plan.level,
            scaled_level: plan.scaled_level,
        },
    ])
}

/// Reward for clearing every room of `plan`. The caller advances the
/// dungeon level.
pub fn clear_dungeon(player: &mut Player, plan: &DungeonPlan) -> Vec<GameEvent> {
    let xp = plan.clear_xp();
    let mut events = vec![GameEvent::DungeonCleared {
        level: plan.level,
        xp,
    }];
    events.extend(player.gain_xp(xp));
    events.extend(player.unlock(Milestone::ClearedDungeon(plan.level)));
    events.extend(player.record_dungeon_clear(plan.key_type));
    events
}
