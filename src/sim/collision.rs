//! Collision detection and scoring
//!
//! Everything is an axis-aligned box. Fish are centred on their position,
//! obstacles hang down and right from theirs.

use glam::Vec2;

use super::overlay::OverlayEvent;
use super::state::{GameEvent, GameState};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Resolve player collisions for this tick
///
/// Caught fish are removed and scored, raising overlay events; obstacles
/// stay put and only cost a point and trigger the hit flash.
pub fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player = state.player.bounds();

    for i in (0..state.fish.len()).rev() {
        if !state.fish[i].bounds().overlaps(&player) {
            continue;
        }
        let fish = state.fish.remove(i);
        state.score += 1;
        events.push(GameEvent::FishCaught {
            species: fish.species.name,
            score: state.score,
        });
        log::debug!("Caught {} (score {})", fish.species.name, state.score);

        let per_level = state.tuning.fishes_per_level.max(1);
        let level_up = if state.score % per_level == 0 {
            state.level += 1;
            events.push(GameEvent::LevelUp { level: state.level });
            log::debug!("Level {} reached at score {}", state.level, state.score);
            Some(state.next_level_up_message())
        } else {
            None
        };

        state.overlay.apply(OverlayEvent::Caught {
            species: fish.species.name.to_string(),
            level_up,
        });
    }

    for i in (0..state.obstacles.len()).rev() {
        if state.obstacles[i].bounds().overlaps(&player) {
            state.flash_ticks = state.tuning.hit_flash_ticks;
            state.score = state.score.saturating_sub(1);
            events.push(GameEvent::ObstacleHit { score: state.score });
            log::debug!("Hit a {:?} (score {})", state.obstacles[i].kind, state.score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetTable, SpriteKey};
    use crate::sim::overlay::OverlayImage;
    use crate::sim::state::{Body, Fish, Obstacle, ObstacleKind, SPECIES};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn new_state() -> GameState {
        let atlas = AssetTable::with_uniform_size(40.0, 40.0);
        GameState::new(3, Tuning::default(), Vec2::new(800.0, 600.0), &atlas).unwrap()
    }

    fn fish_at(pos: Vec2) -> Fish {
        Fish {
            body: Body {
                pos,
                size: Vec2::new(40.0, 20.0),
                sprite: SpriteKey::Salmon,
            },
            species: SPECIES[0],
        }
    }

    fn obstacle_at(pos: Vec2) -> Obstacle {
        Obstacle {
            body: Body {
                pos,
                size: Vec2::new(40.0, 60.0),
                sprite: SpriteKey::Tree,
            },
            kind: ObstacleKind::Tree,
        }
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_center(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::from_top_left(Vec2::new(4.0, 4.0), Vec2::new(10.0, 10.0));
        let c = Aabb::from_top_left(Vec2::new(5.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Edge contact only
        assert!(!a.overlaps(&c));
        assert_eq!(b.size(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_catch_at_score_four_levels_up() {
        let mut state = new_state();
        state.score = 4;
        state.fish.push(fish_at(state.player.pos));

        let mut events = Vec::new();
        resolve_collisions(&mut state, &mut events);

        assert_eq!(state.score, 5);
        assert_eq!(state.level, 2);
        assert!(state.fish.is_empty());
        assert!(state.is_paused());
        let overlay = state.overlay.visible().unwrap();
        assert_eq!(overlay.image, OverlayImage::Catch);
        assert!(overlay.message.contains("Salmon"));
        assert_eq!(state.overlay.queued_len(), 1);
        assert_eq!(
            events,
            vec![
                GameEvent::FishCaught {
                    species: "Salmon",
                    score: 5
                },
                GameEvent::LevelUp { level: 2 },
            ]
        );
    }

    #[test]
    fn test_two_fish_past_one_multiple_level_once() {
        let mut state = new_state();
        state.score = 4;
        let pos = state.player.pos;
        state.fish.push(fish_at(pos));
        state.fish.push(fish_at(pos + Vec2::new(5.0, 0.0)));

        let mut events = Vec::new();
        resolve_collisions(&mut state, &mut events);

        assert_eq!(state.score, 6);
        assert_eq!(state.level, 2);
        assert_eq!(state.overlay.queued_len(), 1);
    }

    #[test]
    fn test_obstacle_hit_scenario() {
        let mut state = new_state();
        state.score = 3;
        let top_left = state.player.pos - Vec2::new(10.0, 10.0);
        state.obstacles.push(obstacle_at(top_left));

        let mut events = Vec::new();
        resolve_collisions(&mut state, &mut events);

        assert_eq!(state.flash_ticks, 15);
        assert_eq!(state.score, 2);
        assert_eq!(state.level, 1);
        assert!(!state.is_paused());
        // Obstacles survive the collision
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(events, vec![GameEvent::ObstacleHit { score: 2 }]);
    }

    #[test]
    fn test_fish_scored_before_obstacle_in_same_tick() {
        let mut state = new_state();
        state.score = 4;
        let pos = state.player.pos;
        state.fish.push(fish_at(pos));
        state.obstacles.push(obstacle_at(pos - Vec2::new(10.0, 10.0)));

        let mut events = Vec::new();
        resolve_collisions(&mut state, &mut events);

        // The catch reaches 5 and levels up before the hit takes a point back
        assert_eq!(state.score, 4);
        assert_eq!(state.level, 2);
        assert_eq!(state.flash_ticks, 15);
        assert_eq!(state.overlay.queued_len(), 1);
        assert_eq!(
            events,
            vec![
                GameEvent::FishCaught {
                    species: "Salmon",
                    score: 5
                },
                GameEvent::LevelUp { level: 2 },
                GameEvent::ObstacleHit { score: 4 },
            ]
        );
    }

    #[test]
    fn test_two_obstacles_reset_flash_not_stack() {
        let mut state = new_state();
        state.score = 0;
        let top_left = state.player.pos - Vec2::new(10.0, 10.0);
        state.obstacles.push(obstacle_at(top_left));
        state.obstacles.push(obstacle_at(top_left + Vec2::new(2.0, 0.0)));

        let mut events = Vec::new();
        resolve_collisions(&mut state, &mut events);

        assert_eq!(state.flash_ticks, 15);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_far_entities_untouched() {
        let mut state = new_state();
        state.fish.push(fish_at(Vec2::new(50.0, 50.0)));
        state.obstacles.push(obstacle_at(Vec2::new(700.0, 50.0)));

        let mut events = Vec::new();
        resolve_collisions(&mut state, &mut events);

        assert!(events.is_empty());
        assert_eq!(state.fish.len(), 1);
        assert_eq!(state.flash_ticks, 0);
    }

    proptest! {
        #[test]
        fn obstacle_hits_never_underflow_or_touch_level(score in 0u32..4, level in 1u32..10, hits in 1usize..6) {
            let mut state = new_state();
            state.score = score;
            state.level = level;
            let top_left = state.player.pos - Vec2::new(10.0, 10.0);
            for _ in 0..hits {
                state.obstacles.push(obstacle_at(top_left));
            }
            let mut events = Vec::new();
            resolve_collisions(&mut state, &mut events);
            prop_assert_eq!(state.score, score.saturating_sub(hits as u32));
            prop_assert_eq!(state.level, level);
        }

        #[test]
        fn catches_add_one_each_and_level_tracks_multiples(score in 0u32..40, count in 1usize..8) {
            let mut state = new_state();
            state.score = score;
            let pos = state.player.pos;
            for _ in 0..count {
                state.fish.push(fish_at(pos));
            }
            let mut events = Vec::new();
            resolve_collisions(&mut state, &mut events);

            let after = score + count as u32;
            prop_assert_eq!(state.score, after);
            let crossings = after / 5 - score / 5;
            prop_assert_eq!(state.level, 1 + crossings);
            prop_assert_eq!(state.overlay.queued_len(), crossings as usize);
        }
    }
}
