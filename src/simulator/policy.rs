//! The fixed auto-player: one decision at a time, read off the player state.

use crate::character::Player;
use crate::combat::TurnChoice;
use crate::core::FINAL_DUNGEON_PAGES_REQUIRED;
use crate::dungeon::available_dungeons;
use crate::items::{template, ConsumableEffect, EquipmentSlot, ItemId, ItemKind, KeyType};

/// Rest when HP falls below this share of max.
const REST_THRESHOLD: f64 = 0.6;
/// Drink a potion in combat below this share of max.
const HEAL_THRESHOLD: f64 = 0.35;
/// Healing items the auto-player tries to keep on hand.
const POTION_STOCK: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SimAction {
    Rest,
    Buy(ItemId),
    Dungeon(KeyType),
    Overworld,
}

fn below(player: &Player, fraction: f64) -> bool {
    (player.hp as f64) < player.max_hp as f64 * fraction
}

fn healing_indices(player: &Player) -> Vec<usize> {
    player
        .inventory
        .consumable_indices()
        .into_iter()
        .filter(|i| {
            matches!(
                player.inventory.get(*i).map(|item| item.kind),
                Some(ItemKind::Consumable(ConsumableEffect::Heal(_)))
            )
        })
        .collect()
}

/// What to do next from the main menu.
pub(super) fn next_action(player: &Player) -> SimAction {
    if below(player, REST_THRESHOLD) {
        return SimAction::Rest;
    }

    let potion_price = template(ItemId::HealthPotion).price;
    let final_key_price = template(ItemId::FinalKey).price;
    let holds_final = player.inventory.find_key(KeyType::Final).is_some();
    if player.pages >= FINAL_DUNGEON_PAGES_REQUIRED
        && !holds_final
        && player.gold >= final_key_price
    {
        return SimAction::Buy(ItemId::FinalKey);
    }
    if healing_indices(player).len() < POTION_STOCK && player.gold >= potion_price {
        return SimAction::Buy(ItemId::HealthPotion);
    }

    if let Ok(dungeons) = available_dungeons(player) {
        let pick = if dungeons.contains(&KeyType::Final) {
            KeyType::Final
        } else {
            dungeons[0]
        };
        return SimAction::Dungeon(pick);
    }

    // Rotate through the elements so every boss gets a turn.
    let element =
        KeyType::ELEMENTS[player.record.dungeons_cleared as usize % KeyType::ELEMENTS.len()];
    let key_price = template(element.key_item()).price;
    if player.gold >= key_price + potion_price {
        return SimAction::Buy(element.key_item());
    }
    SimAction::Overworld
}

/// What to do on the player's turn in a fight.
pub(super) fn combat_choice(player: &Player) -> TurnChoice {
    if below(player, HEAL_THRESHOLD) {
        if let Some(&index) = healing_indices(player).first() {
            return TurnChoice::Consumable(index);
        }
    }
    if player.special_ability_ready {
        return TurnChoice::Special;
    }
    TurnChoice::Attack
}

/// Inventory index of the best piece for `slot` when it beats what is worn.
pub(super) fn best_upgrade(player: &Player, slot: EquipmentSlot) -> Option<usize> {
    let score = |kind: ItemKind, attack: i32, defense: i32| match (slot, kind.slot()) {
        (EquipmentSlot::Weapon, Some(EquipmentSlot::Weapon)) => Some(attack),
        (EquipmentSlot::Armor, Some(EquipmentSlot::Armor)) => Some(defense),
        _ => None,
    };
    let worn = player
        .inventory
        .equipped(slot)
        .and_then(|item| score(item.kind, item.attack_bonus, item.defense_bonus))
        .unwrap_or(i32::MIN);

    player
        .inventory
        .items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            score(item.kind, item.attack_bonus, item.defense_bonus).map(|s| (i, s))
        })
        .filter(|(_, s)| *s > worn)
        .max_by_key(|(_, s)| *s)
        .map(|(i, _)| i)
}
