//! Integration test: Character progression and equipment
//!
//! Tests XP and level-ups, equipment bonuses and page scaling of items.

use rogue_slayer::achievements::AchievementId;
use rogue_slayer::character::Player;
use rogue_slayer::core::constants::{LEVEL_UP_ATTACK, LEVEL_UP_DEFENSE, LEVEL_UP_MAX_HP};
use rogue_slayer::items::{template, EquipmentSlot, ItemId};

// =========================================================================
// XP and levels
// =========================================================================

#[test]
fn test_ninety_plus_fifteen_xp_levels_once() {
    let mut player = Player::new();
    player.xp = 90;
    player.hp = 40;
    let old_max_hp = player.max_hp;

    player.gain_xp(15);

    assert_eq!(player.level, 2);
    assert_eq!(player.xp, 5);
    assert_eq!(player.xp_to_next_level, 150);
    assert_eq!(player.max_hp, old_max_hp + 20);
    assert_eq!(player.hp, player.max_hp);
    assert!(player.achievements.is_unlocked(AchievementId::Level2));
}

#[test]
fn test_large_xp_gain_crosses_each_threshold() {
    let mut player = Player::new();
    // 100 + 150 + 225 = 475 reaches level 4
    player.gain_xp(480);
    assert_eq!(player.level, 4);
    assert_eq!(player.xp, 5);
    assert!(player.xp < player.xp_to_next_level);
    assert_eq!(player.hp, player.max_hp);
    assert!(player.achievements.is_unlocked(AchievementId::Level3));
    assert!(player.achievements.is_unlocked(AchievementId::Level4));
}

#[test]
fn test_gain_below_threshold_changes_nothing_else() {
    let mut player = Player::new();
    player.hp = 100;
    let events = player.gain_xp(99);
    assert!(events.is_empty());
    assert_eq!(player.level, 1);
    assert_eq!(player.hp, 100);
}

#[test]
fn test_level_up_n_times_scales_linearly() {
    for n in 1..=6 {
        let mut player = Player::new();
        let base = player.clone();
        for _ in 0..n {
            player.level_up();
        }
        assert_eq!(player.attack, base.attack + LEVEL_UP_ATTACK * n);
        assert_eq!(player.defense, base.defense + LEVEL_UP_DEFENSE * n);
        assert_eq!(player.max_hp, base.max_hp + LEVEL_UP_MAX_HP * n);
        assert_eq!(player.level, base.level + n as u32);
    }
}

// =========================================================================
// Equipment
// =========================================================================

#[test]
fn test_equip_round_trip_across_slots() {
    let mut player = Player::new();
    player.receive(template(ItemId::IronSword));
    player.receive(template(ItemId::SteelArmor));
    let (attack, defense) = (player.attack, player.defense);

    player.equip(0).unwrap();
    player.equip(1).unwrap();
    player.unequip(EquipmentSlot::Armor).unwrap();

    assert_eq!(player.attack, attack + 5);
    assert_eq!(player.defense, defense);
}

#[test]
fn test_swapping_in_one_slot_never_drifts() {
    let mut player = Player::new();
    player.receive(template(ItemId::IronSword));
    player.receive(template(ItemId::SilverAxe));
    let attack = player.attack;

    for _ in 0..5 {
        player.equip(0).unwrap();
        player.equip(1).unwrap();
    }
    assert_eq!(player.attack, attack + 7);
    player.unequip(EquipmentSlot::Weapon).unwrap();
    assert_eq!(player.attack, attack);
}

#[test]
fn test_unequip_empty_slot_is_rejected() {
    let mut player = Player::new();
    let before = player.clone();
    assert!(player.unequip(EquipmentSlot::Weapon).is_err());
    assert_eq!(player, before);
}

// =========================================================================
// Page scaling
// =========================================================================

#[test]
fn test_scaling_is_additive_and_deterministic() {
    for pages in 0..8 {
        let a = template(ItemId::FlameSword).scaled(pages);
        let b = template(ItemId::FlameSword).scaled(pages);
        assert_eq!(a, b);
        assert_eq!(a.attack_bonus, 12 + pages as i32);
        assert_eq!(a.defense_bonus, pages as i32);
    }
}
