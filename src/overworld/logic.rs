use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::achievements::Milestone;
use crate::character::Player;
use crate::combat::{Enemy, Realm};
use crate::core::constants::*;
use crate::events::GameEvent;
use crate::items::{template, KeyType};

/// What a single overworld trip turned up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverworldFind {
    Gold(u32),
    Key(KeyType),
    /// A wild enemy the caller has to fight.
    Ambush(Enemy),
}

/// One trip: gold, an element key, or an ambush, by a single roll.
pub fn explore(player: &mut Player, rng: &mut impl Rng) -> (OverworldFind, Vec<GameEvent>) {
    player.record.overworld_trips += 1;
    let mut events = Vec::new();
    events.extend(player.unlock(Milestone::OverworldTrips(player.record.overworld_trips)));

    let roll = rng.gen::<f64>();
    let find = if roll < OVERWORLD_GOLD_CHANCE {
        let amount = rng.gen_range(OVERWORLD_GOLD_MIN..=OVERWORLD_GOLD_MAX)
            + player.pages * OVERWORLD_GOLD_PER_PAGE;
        player.gold += amount;
        events.push(GameEvent::GoldFound { amount });
        events.extend(player.unlock(Milestone::GoldHeld(player.gold)));
        OverworldFind::Gold(amount)
    } else if roll < OVERWORLD_KEY_CHANCE {
        let key_type = *KeyType::ELEMENTS.choose(rng).unwrap_or(&KeyType::Fire);
        let key = template(key_type.key_item()).scaled(player.pages);
        let id = key.id;
        events.extend(player.receive(key));
        events.push(GameEvent::KeyFound { item: id });
        OverworldFind::Key(key_type)
    } else {
        let level = player.level + rng.gen_range(OVERWORLD_AMBUSH_LEVEL_MIN..=OVERWORLD_AMBUSH_LEVEL_MAX);
        OverworldFind::Ambush(Enemy::generate(level, Realm::Normal, rng))
    };
    debug!("overworld trip {}: {:?}", player.record.overworld_trips, find);
    (find, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementId;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_low_roll_finds_gold() {
        let mut player = Player::new();
        player.pages = 3;
        let (find, _) = explore(&mut player, &mut StepRng::new(0, 0));
        // Lowest roll: 10 gold + 3 pages * 2
        assert_eq!(find, OverworldFind::Gold(16));
        assert_eq!(player.gold, STARTING_GOLD + 16);
        assert!(player.achievements.is_unlocked(AchievementId::TreasureHunter));
    }

    #[test]
    fn test_every_outcome_is_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut player = Player::new();
        let (mut gold, mut keys, mut ambushes) = (0, 0, 0);
        for _ in 0..300 {
            match explore(&mut player, &mut rng).0 {
                OverworldFind::Gold(amount) => {
                    assert!((10..=100).contains(&amount));
                    gold += 1;
                }
                OverworldFind::Key(key_type) => {
                    assert_ne!(key_type, KeyType::Final);
                    keys += 1;
                }
                OverworldFind::Ambush(enemy) => {
                    assert!((2..=4).contains(&enemy.stats.level));
                    ambushes += 1;
                }
            }
        }
        assert!(gold > 0 && keys > 0 && ambushes > 0);
        assert_eq!(player.keys as usize, keys);
        assert_eq!(player.record.overworld_trips, 300);
        assert!(player
            .achievements
            .is_unlocked(AchievementId::OverworldWanderer));
    }
}
