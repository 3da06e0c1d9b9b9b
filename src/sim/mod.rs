//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Sprite dimensions come through `SpriteAtlas`, never pixels
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod overlay;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, resolve_collisions};
pub use difficulty::{fish_spawn_chance, obstacle_spawn_chance, scroll_speed};
pub use overlay::{Overlay, OverlayEvent, OverlayImage, OverlayState};
pub use spawn::{try_spawn_fish, try_spawn_obstacle};
pub use state::{
    Body, Fish, GameEvent, GameState, Obstacle, ObstacleKind, Player, SPECIES, Species,
};
pub use tick::tick;
