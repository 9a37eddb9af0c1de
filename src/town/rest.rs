use crate::achievements::Milestone;
use crate::character::Player;
use crate::core::constants::*;
use crate::events::GameEvent;

/// Half of max HP plus a per-page bonus, clamped to max HP.
pub fn rest(player: &mut Player) -> Vec<GameEvent> {
    let amount = (player.max_hp as f64 * REST_HP_FRACTION) as i32
        + player.pages as i32 * REST_HEAL_PER_PAGE;
    player.heal(amount);

    let mut events = vec![GameEvent::Rested { amount }];
    events.extend(player.unlock(Milestone::Rested));
    events
}
