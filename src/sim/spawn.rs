//! Procedural spawning at the top edge
//!
//! Best effort: a roll that succeeds while the sprite is unavailable simply
//! spawns nothing this tick.

use glam::Vec2;
use rand::Rng;

use super::difficulty::{fish_spawn_chance, obstacle_spawn_chance};
use super::state::{Body, Fish, GameState, Obstacle, ObstacleKind, SPECIES};
use crate::assets::SpriteAtlas;

/// Uniform in `[lo, hi]`, or `lo` when the range is empty
fn uniform(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}

/// Maybe add a fish just above the top edge
pub fn try_spawn_fish<A: SpriteAtlas>(state: &mut GameState, atlas: &A) -> bool {
    let chance = fish_spawn_chance(&state.tuning, state.level);
    let rng = state.rng_mut();
    if rng.random::<f32>() >= chance {
        return false;
    }
    let species = SPECIES[rng.random_range(0..SPECIES.len())];

    let Some(size) = atlas.scaled_size(species.sprite, state.tuning.fish_width) else {
        return false;
    };
    let width = state.bounds.x;
    let x = uniform(state.rng_mut(), size.x / 2.0, width - size.x / 2.0);

    state.fish.push(Fish {
        body: Body {
            pos: Vec2::new(x, -size.y / 2.0),
            size,
            sprite: species.sprite,
        },
        species,
    });
    log::trace!("Spawned {} at x={:.0}", species.name, x);
    true
}

/// Maybe add an obstacle just above the top edge
pub fn try_spawn_obstacle<A: SpriteAtlas>(state: &mut GameState, atlas: &A) -> bool {
    let chance = obstacle_spawn_chance(&state.tuning, state.level);
    let tree_weight = state.tuning.tree_weight;
    let rng = state.rng_mut();
    if rng.random::<f32>() >= chance {
        return false;
    }
    let kind = if rng.random::<f32>() < tree_weight {
        ObstacleKind::Tree
    } else {
        ObstacleKind::Snowman
    };

    let Some(size) = atlas.scaled_size(kind.sprite(), kind.width(&state.tuning)) else {
        return false;
    };
    let width = state.bounds.x;
    let x = uniform(state.rng_mut(), 0.0, width - size.x);

    state.obstacles.push(Obstacle {
        body: Body {
            pos: Vec2::new(x, -size.y),
            size,
            sprite: kind.sprite(),
        },
        kind,
    });
    log::trace!("Spawned {:?} at x={:.0}", kind, x);
    true
}
