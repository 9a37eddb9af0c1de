//! Loot generation when a foe falls.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::catalog::{equippable_loot, template, LOOT_TABLE};
use crate::achievements::Milestone;
use crate::character::Player;
use crate::combat::{BossKind, Foe};
use crate::core::combat_math::roll_chance;
use crate::core::constants::*;
use crate::events::GameEvent;

/// Hands out whatever `foe` drops.
pub fn drop_loot(player: &mut Player, foe: &Foe, rng: &mut impl Rng) -> Vec<GameEvent> {
    match foe.boss_kind() {
        Some(kind) => boss_drops(player, kind, rng),
        None => enemy_drops(player, foe.name(), rng),
    }
}

/// Guaranteed unique item and page, then a chance of the dungeon's key.
/// The unique is scaled by the page count held before this kill.
pub fn boss_drops(player: &mut Player, kind: BossKind, rng: &mut impl Rng) -> Vec<GameEvent> {
    let from = kind.name().to_string();
    let mut events = Vec::new();

    let unique = template(kind.unique_loot()).scaled(player.pages);
    let id = unique.id;
    events.extend(player.receive(unique));
    events.push(GameEvent::Dropped {
        from: from.clone(),
        item: id,
    });
    events.extend(player.unlock(Milestone::Obtained(id)));
    events.extend(player.unlock(Milestone::UniqueObtained));

    player.pages += 1;
    events.push(GameEvent::PageGained {
        total: player.pages,
    });
    events.extend(player.record_boss_defeat(kind));

    let dungeon = kind.dungeon();
    if kind != BossKind::DarkOverlord && roll_chance(BOSS_KEY_DROP_CHANCE, rng) {
        let key = template(dungeon.key_item()).scaled(player.pages);
        let key_id = key.id;
        events.extend(player.receive(key));
        events.push(GameEvent::KeyDropped {
            from,
            item: key_id,
        });
    }
    debug!("boss drops from {:?}, pages now {}", kind, player.pages);
    events
}

/// Coin flip for one loot-table item, plus a smaller chance of extra gear.
pub fn enemy_drops(player: &mut Player, from: &str, rng: &mut impl Rng) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if roll_chance(ENEMY_DROP_CHANCE, rng) {
        if let Some(id) = LOOT_TABLE.choose(rng) {
            let item = template(*id).scaled(player.pages);
            events.extend(player.receive(item));
            events.push(GameEvent::Dropped {
                from: from.to_string(),
                item: *id,
            });
            events.extend(player.unlock(Milestone::Obtained(*id)));
        }
    }

    if roll_chance(ENEMY_BONUS_GEAR_CHANCE, rng) {
        if let Some(id) = equippable_loot().choose(rng) {
            let item = template(*id).scaled(player.pages);
            events.extend(player.receive(item));
            events.push(GameEvent::BonusDrop {
                from: from.to_string(),
                item: *id,
            });
        }
    }
    events
}
