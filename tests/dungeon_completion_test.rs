//! Integration test: Complete dungeon run
//!
//! Tests the full dungeon flow: pick → plan → spend key → rooms → boss →
//! rewards, using only the public core operations.

use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rogue_slayer::achievements::AchievementId;
use rogue_slayer::character::Player;
use rogue_slayer::combat::{
    Boss, BossKind, CombatOutcome, Encounter, Enemy, Foe, Realm, TurnChoice,
};
use rogue_slayer::core::GameState;
use rogue_slayer::dungeon::{
    available_dungeons, check_access, clear_dungeon, enter_dungeon, plan_dungeon, DungeonPlan,
    DungeonPreview, Room,
};
use rogue_slayer::errors::Rejection;
use rogue_slayer::items::{drop_loot, template, ItemId, KeyType};

/// A character strong enough to win any fight in a few swings.
fn champion() -> Player {
    let mut player = Player::new();
    player.attack = 2_000;
    player.max_hp = 100_000;
    player.hp = player.max_hp;
    player
}

fn fight(player: &mut Player, foe: Foe, dungeon_level: u32, rng: &mut ChaCha8Rng) -> CombatOutcome {
    let mut encounter = Encounter::new(foe, dungeon_level);
    while encounter.outcome().is_none() {
        encounter.round(player, TurnChoice::Attack, rng).unwrap();
    }
    let outcome = encounter.outcome().unwrap();
    if outcome == CombatOutcome::Victory {
        drop_loot(player, &encounter.foe, rng);
    }
    outcome
}

/// Fights every room of `plan` and hands out the clear reward.
fn run_plan(state: &mut GameState, plan: &DungeonPlan, rng: &mut ChaCha8Rng) {
    enter_dungeon(&mut state.player, plan).unwrap();
    for room in &plan.rooms {
        let foe: Foe = match *room {
            Room::Monster(realm) => Enemy::generate(plan.scaled_level, realm, rng).into(),
            Room::Boss(kind) => Boss::generate(plan.scaled_level, kind.dungeon()).into(),
        };
        let level = state.current_dungeon_level;
        assert_eq!(
            fight(&mut state.player, foe, level, rng),
            CombatOutcome::Victory
        );
    }
    clear_dungeon(&mut state.player, plan);
    state.current_dungeon_level += 1;
}

#[test]
fn test_complete_fire_dungeon_run() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut state = GameState::new();
    state.player = champion();
    state.player.receive(template(ItemId::FireKey));

    assert_eq!(available_dungeons(&state.player).unwrap(), vec![KeyType::Fire]);
    let plan = plan_dungeon(&state.player, KeyType::Fire, state.current_dungeon_level, &mut rng);
    assert_eq!(plan.boss(), BossKind::FireLord);
    assert_eq!(plan.rooms.last(), Some(&Room::Boss(BossKind::FireLord)));

    run_plan(&mut state, &plan, &mut rng);

    let player = &state.player;
    assert_eq!(player.keys as usize, player.inventory.key_count());
    assert_eq!(player.pages, 1);
    assert_eq!(player.record.enemies_defeated, plan.num_mobs + 1);
    assert_eq!(player.record.bosses_defeated, 1);
    assert_eq!(player.record.dungeons_cleared, 1);
    assert_eq!(state.current_dungeon_level, 2);

    let crown = player
        .inventory
        .items
        .iter()
        .find(|item| item.id == ItemId::FlameCrown)
        .unwrap();
    assert_eq!(crown.attack_bonus, 15);
    for id in [
        AchievementId::FirstBlood,
        AchievementId::ObtainedFlameCrown,
        AchievementId::Collector,
        AchievementId::ClearedDungeon1,
    ] {
        assert!(player.achievements.is_unlocked(id), "{:?} missing", id);
    }
}

#[test]
fn test_fire_lord_crown_scales_with_pages_before_the_new_page() {
    let mut player = Player::new();
    player.pages = 3;
    let boss: Foe = Boss::generate(5, KeyType::Fire).into();
    drop_loot(&mut player, &boss, &mut StepRng::new(u64::MAX, 0));

    assert_eq!(player.pages, 4);
    assert_eq!(player.inventory.items[0].id, ItemId::FlameCrown);
    assert_eq!(player.inventory.items[0].attack_bonus, 18);
    assert!(player
        .achievements
        .is_unlocked(AchievementId::ObtainedFlameCrown));
}

#[test]
fn test_no_keys_leaves_everything_untouched() {
    let state = GameState::new();
    let before = state.clone();
    for key_type in KeyType::ALL {
        assert!(check_access(&state.player, key_type).is_err());
    }
    assert_eq!(available_dungeons(&state.player), Err(Rejection::NoKeys));
    assert_eq!(state, before);
}

#[test]
fn test_refused_entry_keeps_the_key() {
    let mut player = Player::new();
    player.receive(template(ItemId::FinalKey));
    let plan = DungeonPlan::new(KeyType::Final, 1, player.level, 3);
    let before = player.clone();

    assert_eq!(
        enter_dungeon(&mut player, &plan),
        Err(Rejection::FinalDungeonLocked {
            pages: 0,
            required: 5
        })
    );
    assert_eq!(player, before);
}

#[test]
fn test_preview_matches_generated_boss() {
    let player = Player::new();
    let plan = DungeonPlan::new(KeyType::Lightning, 3, player.level, 4);
    let preview = DungeonPreview::from(&plan);
    let boss = Boss::generate(plan.scaled_level, KeyType::Lightning);

    assert_eq!(preview.num_mobs, 4);
    assert_eq!(preview.boss_name, "Lightning Lord");
    assert_eq!(preview.boss_hp, boss.stats.hp);
    assert_eq!(preview.boss_attack, boss.stats.attack);
}

#[test]
fn test_every_boss_then_the_final_dungeon() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut state = GameState::new();
    state.player = champion();

    for key_type in KeyType::ELEMENTS {
        state.player.receive(template(key_type.key_item()));
        let plan = plan_dungeon(&state.player, key_type, state.current_dungeon_level, &mut rng);
        run_plan(&mut state, &plan, &mut rng);
    }
    assert_eq!(state.player.pages, 4);

    // One more page is needed before the Final key can be used.
    state.player.pages = 5;
    state.player.receive(template(ItemId::FinalKey));
    assert!(available_dungeons(&state.player)
        .unwrap()
        .contains(&KeyType::Final));
    let plan = plan_dungeon(&state.player, KeyType::Final, state.current_dungeon_level, &mut rng);
    assert!(plan
        .rooms
        .iter()
        .take(plan.num_mobs as usize)
        .all(|room| *room == Room::Monster(Realm::Final)));
    run_plan(&mut state, &plan, &mut rng);

    let player = &state.player;
    assert_eq!(player.record.bosses_defeated, 5);
    for id in [
        AchievementId::FinalConqueror,
        AchievementId::UltimateSlayer,
        AchievementId::DungeonExplorer,
        AchievementId::DungeonMaster,
        AchievementId::ClearedDungeon5,
    ] {
        assert!(player.achievements.is_unlocked(id), "{:?} missing", id);
    }
}
