//! Per-frame simulation tick
//!
//! One call advances the world by one logical step. The order of the steps
//! matters: collisions run after movement and spawning so fresh entities are
//! tested at their post-move positions.

use super::collision::resolve_collisions;
use super::difficulty::scroll_speed;
use super::spawn::{try_spawn_fish, try_spawn_obstacle};
use super::state::{GameEvent, GameState};
use crate::assets::SpriteAtlas;

/// Advance the game state by one tick. Does nothing while paused.
pub fn tick<A: SpriteAtlas>(state: &mut GameState, atlas: &A) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_paused() {
        return events;
    }

    state.time_ticks += 1;
    let width = state.bounds.x;
    let height = state.bounds.y;

    // Skier
    state.player.step(width);

    // Scroll
    let speed = scroll_speed(&state.tuning, state.level);
    for fish in &mut state.fish {
        fish.body.pos.y += speed;
    }
    for obstacle in &mut state.obstacles {
        obstacle.body.pos.y += speed;
    }

    // Cull
    state.fish.retain(|f| !f.is_past(height));
    state.obstacles.retain(|o| !o.is_past(height));

    try_spawn_fish(state, atlas);
    try_spawn_obstacle(state, atlas);

    resolve_collisions(state, &mut events);

    if state.flash_ticks > 0 {
        state.flash_ticks -= 1;
    }

    events
}
