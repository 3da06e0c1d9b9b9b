//! Difficulty ramps
//!
//! Linear functions of the current level. Levels start at 1; anything lower
//! is treated as level 1.

use crate::tuning::Tuning;

#[inline]
fn steps(level: u32) -> f32 {
    level.saturating_sub(1) as f32
}

/// Downhill scroll speed (pixels/tick)
pub fn scroll_speed(tuning: &Tuning, level: u32) -> f32 {
    tuning.base_scroll + steps(level) * tuning.scroll_step
}

/// Per-tick probability of spawning a fish
pub fn fish_spawn_chance(tuning: &Tuning, level: u32) -> f32 {
    tuning.base_fish_chance + steps(level) * tuning.fish_step
}

/// Per-tick probability of spawning an obstacle
pub fn obstacle_spawn_chance(tuning: &Tuning, level: u32) -> f32 {
    tuning.base_obstacle_chance + steps(level) * tuning.obstacle_step
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base_values_at_level_one() {
        let t = Tuning::default();
        assert_eq!(scroll_speed(&t, 1), t.base_scroll);
        assert_eq!(fish_spawn_chance(&t, 1), t.base_fish_chance);
        assert_eq!(obstacle_spawn_chance(&t, 1), t.base_obstacle_chance);
    }

    #[test]
    fn test_one_step_at_level_two() {
        let t = Tuning::default();
        assert_eq!(scroll_speed(&t, 2), t.base_scroll + t.scroll_step);
        assert_eq!(fish_spawn_chance(&t, 2), t.base_fish_chance + t.fish_step);
        assert_eq!(
            obstacle_spawn_chance(&t, 2),
            t.base_obstacle_chance + t.obstacle_step
        );
    }

    #[test]
    fn test_level_zero_is_level_one() {
        let t = Tuning::default();
        assert_eq!(scroll_speed(&t, 0), scroll_speed(&t, 1));
    }

    proptest! {
        #[test]
        fn ramps_never_decrease(level in 1u32..500) {
            let t = Tuning::default();
            prop_assert!(scroll_speed(&t, level + 1) >= scroll_speed(&t, level));
            prop_assert!(fish_spawn_chance(&t, level + 1) >= fish_spawn_chance(&t, level));
            prop_assert!(obstacle_spawn_chance(&t, level + 1) >= obstacle_spawn_chance(&t, level));
        }
    }
}
