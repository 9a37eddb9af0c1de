//! Consumable use, in and out of combat.

use log::debug;

use super::types::{ConsumableEffect, ItemKind};
use crate::achievements::Milestone;
use crate::character::Player;
use crate::combat::{Combatant, Foe};
use crate::core::constants::*;
use crate::errors::Rejection;
use crate::events::GameEvent;

/// Uses the consumable at `index`. Blast effects hit `target` when there is
/// one and are otherwise spent harmlessly. The item is always consumed.
pub fn use_consumable(
    player: &mut Player,
    index: usize,
    target: Option<&mut Foe>,
) -> Result<Vec<GameEvent>, Rejection> {
    let item = player.inventory.get(index).ok_or(Rejection::NoSuchItem)?;
    let effect = match item.kind {
        ItemKind::Consumable(effect) => effect,
        _ => return Err(Rejection::NotConsumable(item.id)),
    };
    let id = item.id;
    let pages = player.pages as i32;

    let mut events = Vec::new();
    match effect {
        ConsumableEffect::Heal(base) => {
            let amount = player.heal(base + pages * HEAL_PER_PAGE);
            events.push(GameEvent::Healed { item: id, amount });
        }
        ConsumableEffect::Fortify(amount) => {
            player.defense += amount;
            events.push(GameEvent::Fortified { item: id, amount });
        }
        ConsumableEffect::Poison(base) => {
            let damage = base + pages * POISON_PER_PAGE;
            player.take_damage(damage);
            events.push(GameEvent::Poisoned { item: id, damage });
        }
        ConsumableEffect::Revive => {
            if player.hp <= 0 {
                player.hp = (player.max_hp as f64 * REVIVE_HP_FRACTION) as i32;
                events.push(GameEvent::Revived {
                    item: id,
                    hp: player.hp,
                });
            } else {
                events.push(GameEvent::NoEffectRightNow { item: id });
            }
        }
        ConsumableEffect::Blast(damage) => match target {
            Some(foe) => {
                foe.take_damage(damage);
                events.push(GameEvent::BlastHit {
                    item: id,
                    target: foe.name().to_string(),
                    damage,
                });
            }
            None => events.push(GameEvent::BlastReleased { item: id, damage }),
        },
        ConsumableEffect::Inert => events.push(GameEvent::NothingHappened { item: id }),
    }
    debug!("used {:?} ({:?})", id, effect);

    player.inventory.remove_at(index);
    events.push(GameEvent::ItemRemoved { item: id });
    events.extend(player.unlock(Milestone::Used(id)));
    Ok(events)
}
