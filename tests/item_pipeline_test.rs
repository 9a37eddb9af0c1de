//! Integration test: Item pipeline
//!
//! Tests how items reach the player (drops, shop, overworld), how they are
//! used or worn, and how they leave again (consumed, sold).

use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rogue_slayer::character::Player;
use rogue_slayer::combat::{Combatant, Enemy, Foe, FoeStats};
use rogue_slayer::errors::Rejection;
use rogue_slayer::events::GameEvent;
use rogue_slayer::items::{
    drop_loot, shop_stock, template, use_consumable, ItemId, ItemKind, LOOT_TABLE,
};
use rogue_slayer::overworld::{explore, OverworldFind};
use rogue_slayer::town::buy;

fn target(hp: i32) -> Foe {
    Foe::Enemy(Enemy {
        stats: FoeStats {
            name: "Bandit".to_string(),
            level: 1,
            hp,
            attack: 5,
            defense: 3,
            xp_reward: 60,
        },
    })
}

// =========================================================================
// Acquisition
// =========================================================================

#[test]
fn test_shop_sells_page_scaled_copies() {
    let mut player = Player::new();
    player.gold = 500;
    player.pages = 2;
    buy(&mut player, ItemId::IronSword).unwrap();

    let sword = &player.inventory.items[0];
    assert_eq!(sword.attack_bonus, 7);
    assert_eq!(sword.defense_bonus, 2);
    assert_eq!(player.gold, 400);
}

#[test]
fn test_final_key_only_stocked_with_enough_pages() {
    assert!(!shop_stock(4).contains(&ItemId::FinalKey));
    assert!(shop_stock(5).contains(&ItemId::FinalKey));

    let mut player = Player::new();
    player.gold = 1_000;
    assert_eq!(
        buy(&mut player, ItemId::FinalKey),
        Err(Rejection::NotForSale)
    );
    player.pages = 5;
    buy(&mut player, ItemId::FinalKey).unwrap();
    assert_eq!(player.keys, 1);
}

#[test]
fn test_refused_purchase_changes_nothing() {
    let mut player = Player::new();
    let before = player.clone();
    assert_eq!(
        buy(&mut player, ItemId::RingOfPower),
        Err(Rejection::NotEnoughGold {
            price: 300,
            gold: 50
        })
    );
    assert_eq!(player, before);
}

#[test]
fn test_enemy_drops_come_from_loot_table() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let mut player = Player::new();
    for _ in 0..200 {
        drop_loot(&mut player, &target(0), &mut rng);
    }
    assert!(!player.inventory.is_empty());
    assert!(player
        .inventory
        .items
        .iter()
        .all(|item| LOOT_TABLE.contains(&item.id)));
    assert_eq!(player.keys as usize, player.inventory.key_count());
}

#[test]
fn test_overworld_finds_keep_key_counter_in_sync() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut player = Player::new();
    let mut ambushes = 0;
    for _ in 0..100 {
        let gold_before = player.gold;
        let (find, _) = explore(&mut player, &mut rng);
        match find {
            OverworldFind::Gold(amount) => assert_eq!(player.gold, gold_before + amount),
            OverworldFind::Key(_) => assert_eq!(player.gold, gold_before),
            OverworldFind::Ambush(enemy) => {
                ambushes += 1;
                assert!((2..=4).contains(&enemy.stats.level));
            }
        }
    }
    assert!(ambushes > 0);
    assert_eq!(player.record.overworld_trips, 100);
    assert_eq!(player.keys as usize, player.inventory.key_count());
}

// =========================================================================
// Use
// =========================================================================

#[test]
fn test_potion_heals_and_is_consumed() {
    let mut player = Player::new();
    player.pages = 1;
    player.hp = 100;
    player.receive(template(ItemId::HealthPotion));

    let events = use_consumable(&mut player, 0, None).unwrap();
    assert_eq!(player.hp, 152);
    assert!(player.inventory.is_empty());
    assert_eq!(
        events[0],
        GameEvent::Healed {
            item: ItemId::HealthPotion,
            amount: 52
        }
    );
}

#[test]
fn test_blast_items_hit_only_inside_combat() {
    let mut player = Player::new();
    player.receive(template(ItemId::LightningScroll));
    player.receive(template(ItemId::LightningScroll));

    let mut foe = target(100);
    use_consumable(&mut player, 0, Some(&mut foe)).unwrap();
    assert_eq!(foe.stats().hp, 60);

    let events = use_consumable(&mut player, 0, None).unwrap();
    assert!(matches!(events[0], GameEvent::BlastReleased { damage: 40, .. }));
    assert!(player.inventory.is_empty());
}

#[test]
fn test_revive_only_works_when_down() {
    let mut player = Player::new();
    player.receive(template(ItemId::RevivePotion));
    player.receive(template(ItemId::RevivePotion));

    let events = use_consumable(&mut player, 0, None).unwrap();
    assert!(matches!(events[0], GameEvent::NoEffectRightNow { .. }));
    assert_eq!(player.inventory.len(), 1);

    player.hp = 0;
    use_consumable(&mut player, 0, None).unwrap();
    assert_eq!(player.hp, 144);
}

#[test]
fn test_non_consumables_are_refused() {
    let mut player = Player::new();
    player.receive(template(ItemId::IronSword));
    let before = player.clone();
    assert_eq!(
        use_consumable(&mut player, 0, None),
        Err(Rejection::NotConsumable(ItemId::IronSword))
    );
    assert_eq!(
        use_consumable(&mut player, 5, None),
        Err(Rejection::NoSuchItem)
    );
    assert_eq!(player, before);
}

// =========================================================================
// Leaving the inventory
// =========================================================================

#[test]
fn test_selling_worn_gear_removes_its_bonus() {
    let mut player = Player::new();
    player.receive(template(ItemId::AmuletOfVitality));
    player.equip(0).unwrap();
    assert_eq!(player.max_hp, 318);

    player.sell_item(0).unwrap();
    assert_eq!(player.max_hp, 288);
    assert_eq!(player.gold, 50 + 350);
    assert!(player.inventory.is_empty());
}

#[test]
fn test_every_catalog_item_has_a_matching_kind() {
    let mut rng = StepRng::new(0, 0);
    let mut player = Player::new();
    for id in shop_stock(5) {
        let item = template(id);
        match item.kind {
            ItemKind::Key(key_type) => assert_eq!(key_type.key_item(), id),
            ItemKind::Consumable(_) => assert!(item.is_consumable()),
            ItemKind::Weapon | ItemKind::Armor => assert!(item.is_equippable()),
        }
    }
    // Forced rolls always drop the first loot table entry.
    drop_loot(&mut player, &target(0), &mut rng);
    assert_eq!(player.inventory.items[0].id, LOOT_TABLE[0]);
}
