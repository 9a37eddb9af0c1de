//! Integration test: Combat resolution
//!
//! Tests damage formulas, the enemy damage cap and full encounters driven
//! through the public Encounter state machine.

use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rogue_slayer::achievements::AchievementId;
use rogue_slayer::character::Player;
use rogue_slayer::combat::{
    player_attack, Boss, CombatOutcome, CombatPhase, Combatant, Encounter, Enemy, Foe, FoeStats,
    Realm, TurnChoice,
};
use rogue_slayer::core::constants::ENEMY_DAMAGE_CAP;
use rogue_slayer::events::GameEvent;
use rogue_slayer::items::KeyType;

const REALMS: [Realm; 6] = [
    Realm::Fire,
    Realm::Ice,
    Realm::Earth,
    Realm::Lightning,
    Realm::Normal,
    Realm::Final,
];

fn dummy(defense: i32) -> Foe {
    Foe::Enemy(Enemy {
        stats: FoeStats {
            name: "Training Dummy".to_string(),
            level: 1,
            hp: 100,
            attack: 0,
            defense,
            xp_reward: 0,
        },
    })
}

// =========================================================================
// Damage formulas
// =========================================================================

#[test]
fn test_attack_equal_to_defense_deals_nothing() {
    let player = Player::new();
    assert_eq!(player.attack, 12);
    assert_eq!(player.defense, 6);
    assert_eq!(player.pages, 0);

    let mut foe = dummy(12);
    player_attack(&player, &mut foe, &mut StepRng::new(u64::MAX, 0));
    assert_eq!(foe.stats().hp, 100);
}

#[test]
fn test_base_damage_is_attack_minus_defense() {
    let player = Player::new();
    let mut foe = dummy(6);
    player_attack(&player, &mut foe, &mut StepRng::new(u64::MAX, 0));
    assert_eq!(foe.stats().hp, 94);
}

#[test]
fn test_damage_never_negative_against_any_defense() {
    let player = Player::new();
    for defense in [0, 6, 12, 50, 500] {
        let mut foe = dummy(defense);
        player_attack(&player, &mut foe, &mut StepRng::new(u64::MAX, 0));
        assert!(foe.stats().hp <= 100, "defense {} healed the foe", defense);
    }
}

// =========================================================================
// Enemy damage cap
// =========================================================================

#[test]
fn test_enemy_attacks_never_exceed_cap() {
    for seed in 0..20u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for level in [1, 10, 25, 50, 100] {
            for realm in REALMS {
                let enemy = Enemy::generate(level, realm, &mut rng);
                let strike = enemy.perform_attack(&mut rng);
                assert!(strike.damage <= ENEMY_DAMAGE_CAP);
            }
        }
    }
}

#[test]
fn test_boss_special_attacks_are_capped() {
    let mut always = StepRng::new(0, 0);
    for key_type in KeyType::ALL {
        let boss = Boss::generate(60, key_type);
        let strike = boss.perform_attack(&mut always);
        assert!(strike.special);
        assert_eq!(strike.damage, ENEMY_DAMAGE_CAP);
    }
}

// =========================================================================
// Full encounters
// =========================================================================

#[test]
fn test_fresh_player_beats_a_level_one_enemy() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut player = Player::new();
    let enemy = Enemy::generate(1, Realm::Fire, &mut rng);
    let mut encounter = Encounter::new(enemy.into(), 1);

    let mut events = Vec::new();
    while encounter.outcome().is_none() {
        events.extend(
            encounter
                .round(&mut player, TurnChoice::Attack, &mut rng)
                .unwrap(),
        );
    }

    assert_eq!(encounter.outcome(), Some(CombatOutcome::Victory));
    assert!(player.is_alive());
    assert_eq!(player.record.enemies_defeated, 1);
    assert!(player.achievements.is_unlocked(AchievementId::FirstBlood));
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::FoeDefeated { is_boss: false, .. })));
}

#[test]
fn test_enemy_only_replies_while_alive() {
    let mut player = Player::new();
    let mut foe = dummy(0);
    foe.stats_mut().hp = 5;
    let mut encounter = Encounter::new(foe, 1);

    let events = encounter
        .round(&mut player, TurnChoice::Attack, &mut StepRng::new(u64::MAX, 0))
        .unwrap();
    assert_eq!(encounter.phase(), CombatPhase::Resolved(CombatOutcome::Victory));
    assert_eq!(player.hp, player.max_hp);
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::EnemyAttack { .. })));
}

#[test]
fn test_special_ability_is_spent_and_reset_after_fight() {
    let mut player = Player::new();
    let mut encounter = Encounter::new(dummy(0), 1);
    let mut never = StepRng::new(u64::MAX, 0);

    encounter
        .round(&mut player, TurnChoice::Special, &mut never)
        .unwrap();
    assert!(!player.special_ability_ready);
    assert_eq!(player.attack, 24);

    while encounter.outcome().is_none() {
        encounter
            .round(&mut player, TurnChoice::Attack, &mut never)
            .unwrap();
    }
    // No XP was earned, so the ability stays spent and the doubling stays.
    assert!(!player.special_ability_ready);
    assert_eq!(player.attack, 24);

    player.xp = 50;
    let mut next = Encounter::new(dummy(0), 1);
    while next.outcome().is_none() {
        next.round(&mut player, TurnChoice::Attack, &mut never)
            .unwrap();
    }
    assert!(player.special_ability_ready);
    assert_eq!(player.attack, 12);
    assert_eq!(player.special_attack_bonus, 0);
}

#[test]
fn test_successful_flee_ends_fight_without_reward() {
    let mut player = Player::new();
    let mut encounter = Encounter::new(dummy(0), 1);
    encounter
        .round(&mut player, TurnChoice::Flee, &mut StepRng::new(0, 0))
        .unwrap();
    assert_eq!(encounter.outcome(), Some(CombatOutcome::Fled));
    assert_eq!(player.record.enemies_defeated, 0);
}
