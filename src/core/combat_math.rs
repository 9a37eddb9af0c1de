//! Shared combat math functions for game and simulator.
//!
//! These pure functions calculate combat outcomes without side effects.

use rand::Rng;

/// Damage left after defense. Never negative.
pub fn mitigated_damage(attack: i32, defense: i32) -> i32 {
    (attack - defense).max(0)
}

/// Roll a probability in `[0, 1)`.
///
/// Succeeds when the roll lands strictly below `chance`, so a chance of 0.0
/// never succeeds and 1.0 always does.
pub fn roll_chance(chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < chance
}

/// Multiply by a fractional factor and truncate toward zero.
pub fn scale_down(value: i32, factor: f64) -> i32 {
    (value as f64 * factor) as i32
}

/// Apply a heal, clamped so HP never exceeds max HP.
///
/// # Returns
/// HP after healing
pub fn heal_clamped(current_hp: i32, amount: i32, max_hp: i32) -> i32 {
    (current_hp + amount).min(max_hp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_mitigated_damage() {
        assert_eq!(mitigated_damage(20, 5), 15);
        assert_eq!(mitigated_damage(6, 6), 0);
        assert_eq!(mitigated_damage(5, 10), 0); // Can't go negative
    }

    #[test]
    fn test_roll_chance_extremes() {
        let mut low = StepRng::new(0, 0);
        assert!(roll_chance(0.25, &mut low));
        assert!(!roll_chance(0.0, &mut low));

        let mut high = StepRng::new(u64::MAX, 0);
        assert!(!roll_chance(0.99, &mut high));
        assert!(roll_chance(1.0, &mut high));
    }

    #[test]
    fn test_scale_down_truncates() {
        assert_eq!(scale_down(25, 0.9), 22);
        assert_eq!(scale_down(10, 0.9), 9);
        assert_eq!(scale_down(288, 0.5), 144);
        assert_eq!(scale_down(1, 0.9), 0);
    }

    #[test]
    fn test_heal_clamped() {
        assert_eq!(heal_clamped(100, 50, 288), 150);
        assert_eq!(heal_clamped(270, 50, 288), 288);
    }
}
