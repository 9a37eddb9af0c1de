//! Buying from the shop and selling keys back.

use log::debug;

use crate::achievements::Milestone;
use crate::character::Player;
use crate::core::constants::*;
use crate::errors::Rejection;
use crate::events::GameEvent;
use crate::items::{shop_stock, template, ItemId};

/// Buys a page-scaled copy of `id`.
pub fn buy(player: &mut Player, id: ItemId) -> Result<Vec<GameEvent>, Rejection> {
    if !shop_stock(player.pages).contains(&id) {
        return Err(Rejection::NotForSale);
    }
    let item = template(id);
    if player.gold < item.price {
        return Err(Rejection::NotEnoughGold {
            price: item.price,
            gold: player.gold,
        });
    }

    player.gold -= item.price;
    let price = item.price;
    debug!("bought {:?} for {}, {} gold left", id, price, player.gold);

    let mut events = player.receive(item.scaled(player.pages));
    events.push(GameEvent::Purchased { item: id, price });
    events.extend(player.unlock(Milestone::Purchased(id)));
    Ok(events)
}

/// Sells `quantity` keys at a flat price each, oldest first.
pub fn sell_keys(player: &mut Player, quantity: u32) -> Result<Vec<GameEvent>, Rejection> {
    if quantity == 0 || quantity > player.keys {
        return Err(Rejection::InvalidKeyQuantity {
            requested: quantity,
            held: player.keys,
        });
    }

    for _ in 0..quantity {
        if let Some(index) = player.inventory.items.iter().position(|item| item.is_key()) {
            player.inventory.remove_at(index);
        }
    }
    player.keys -= quantity;
    let gold = quantity * KEY_SELL_PRICE;
    player.gold += gold;
    player.record.keys_sold += quantity;
    debug!("sold {} keys for {}", quantity, gold);

    let mut events = vec![GameEvent::KeysSold { quantity, gold }];
    events.extend(player.unlock(Milestone::KeysSold(player.record.keys_sold)));
    Ok(events)
}
