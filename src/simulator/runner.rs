//! Main simulation runner.
//!
//! Each run starts from a fresh `GameState` and is driven by the auto-player
//! in `policy`, calling the core operations directly. Nothing goes through a
//! presenter, so events are dropped and only the end state is measured.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::policy::{best_upgrade, combat_choice, next_action, SimAction};
use super::report::{RunStats, SimReport};
use crate::combat::{Boss, CombatOutcome, Encounter, Enemy, Foe, TurnChoice};
use crate::core::GameState;
use crate::dungeon::{clear_dungeon, enter_dungeon, plan_dungeon, Room};
use crate::items::{drop_loot, EquipmentSlot, KeyType};
use crate::overworld::{self, OverworldFind};
use crate::town;

/// Past this many rounds the auto-player tries to flee.
const MAX_ROUNDS_PER_FIGHT: u32 = 200;

/// Main-menu decisions allowed per dungeon attempt before a run times out.
const ACTIONS_PER_DUNGEON: u32 = 40;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let r = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {}, Level {}, Pages {}, Dungeons {}, Bosses {}, Gold {}",
                run_idx + 1,
                config.num_runs,
                r.ending(),
                r.final_level,
                r.pages,
                r.dungeons_cleared,
                r.bosses_defeated,
                r.gold
            );
        }
        all_runs.push(r);
    }

    SimReport::from_runs(all_runs)
}

/// Simulate a single run from a fresh character until it wins, dies or runs
/// out of dungeon attempts.
pub(super) fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut state = GameState::new();
    let max_actions = config.max_dungeons.max(1) * ACTIONS_PER_DUNGEON;
    let mut dungeon_attempts = 0;
    let mut actions = 0;

    while state.is_running() && dungeon_attempts < config.max_dungeons && actions < max_actions {
        actions += 1;
        match next_action(&state.player) {
            SimAction::Rest => {
                town::rest(&mut state.player);
            }
            SimAction::Buy(id) => {
                if let Err(rejection) = town::buy(&mut state.player, id) {
                    debug!("sim purchase of {:?} refused: {}", id, rejection);
                }
            }
            SimAction::Overworld => {
                let (find, _) = overworld::explore(&mut state.player, rng);
                if let OverworldFind::Ambush(enemy) = find {
                    fight(&mut state, enemy.into(), rng);
                }
            }
            SimAction::Dungeon(key_type) => {
                dungeon_attempts += 1;
                run_dungeon(&mut state, key_type, rng);
            }
        }
        equip_upgrades(&mut state);
    }

    RunStats::from_state(&state, dungeon_attempts, actions)
}

/// Enters a dungeon and fights every room in order. Stops at the first room
/// that is not won.
fn run_dungeon(state: &mut GameState, key_type: KeyType, rng: &mut impl Rng) {
    let plan = plan_dungeon(&state.player, key_type, state.current_dungeon_level, rng);
    if let Err(rejection) = enter_dungeon(&mut state.player, &plan) {
        debug!("sim dungeon entry refused: {}", rejection);
        return;
    }

    for room in &plan.rooms {
        let foe: Foe = match *room {
            Room::Monster(realm) => Enemy::generate(plan.scaled_level, realm, rng).into(),
            Room::Boss(kind) => Boss::generate(plan.scaled_level, kind.dungeon()).into(),
        };
        if fight(state, foe, rng) != CombatOutcome::Victory {
            return;
        }
        if matches!(room, Room::Boss(_)) && key_type == KeyType::Final {
            state.final_boss_defeated = true;
        }
    }

    clear_dungeon(&mut state.player, &plan);
    state.current_dungeon_level += 1;
}

fn fight(state: &mut GameState, foe: Foe, rng: &mut impl Rng) -> CombatOutcome {
    let mut encounter = Encounter::new(foe, state.current_dungeon_level);
    let mut rounds = 0;

    let outcome = loop {
        if let Some(outcome) = encounter.outcome() {
            break outcome;
        }
        rounds += 1;
        let choice = if rounds > MAX_ROUNDS_PER_FIGHT {
            TurnChoice::Flee
        } else {
            combat_choice(&state.player)
        };
        play_round(&mut encounter, state, choice, rng);
    };

    if outcome == CombatOutcome::Victory {
        drop_loot(&mut state.player, &encounter.foe, rng);
    }
    outcome
}

/// Plays one round, falling back to a plain attack when `choice` is refused.
fn play_round(
    encounter: &mut Encounter,
    state: &mut GameState,
    choice: TurnChoice,
    rng: &mut impl Rng,
) {
    if let Err(rejection) = encounter.round(&mut state.player, choice, rng) {
        debug!("sim {:?} refused: {}", choice, rejection);
        if let Err(rejection) = encounter.round(&mut state.player, TurnChoice::Attack, rng) {
            debug!("sim fallback attack refused: {}", rejection);
        }
    }
}

fn equip_upgrades(state: &mut GameState) {
    for slot in [EquipmentSlot::Weapon, EquipmentSlot::Armor] {
        if let Some(index) = best_upgrade(&state.player, slot) {
            if let Err(rejection) = state.player.equip(index) {
                debug!("sim equip refused: {}", rejection);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{Combatant, Realm};

    #[test]
    fn test_single_run() {
        let config = SimConfig {
            num_runs: 1,
            seed: Some(12345),
            max_dungeons: 10,
            verbosity: 0,
        };

        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let stats = simulate_single_run(&config, &mut rng);

        assert!(stats.actions > 0);
        assert!(stats.dungeon_attempts <= 10);
        assert!(stats.won || stats.died || stats.timed_out);
    }

    #[test]
    fn test_full_simulation() {
        let config = SimConfig {
            num_runs: 5,
            seed: Some(42),
            max_dungeons: 10,
            verbosity: 0,
        };

        let report = run_simulation(&config);

        assert_eq!(report.num_runs, 5);
        assert_eq!(report.run_stats.len(), 5);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let config = SimConfig::quick(7);
        let first = run_simulation(&config);
        let second = run_simulation(&config);
        assert_eq!(first.run_stats, second.run_stats);
    }

    #[test]
    fn test_refused_choice_falls_back_to_attack() {
        let mut state = GameState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let foe: Foe = Enemy::generate(1, Realm::Fire, &mut rng).into();
        let full_hp = foe.stats().hp;
        let mut encounter = Encounter::new(foe, 1);

        // Nothing sits at index 5, so the item pick is refused.
        play_round(
            &mut encounter,
            &mut state,
            TurnChoice::Consumable(5),
            &mut rng,
        );

        assert!(encounter.foe.stats().hp < full_hp);
    }

    #[test]
    fn test_zero_max_dungeons_stops_immediately() {
        let config = SimConfig {
            num_runs: 1,
            seed: Some(1),
            max_dungeons: 0,
            verbosity: 0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stats = simulate_single_run(&config, &mut rng);
        assert_eq!(stats.actions, 0);
        assert!(stats.timed_out);
    }
}
