//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::overlay::{OverlayEvent, OverlayState};
use crate::assets::{AssetError, SpriteAtlas, SpriteKey};
use crate::input::{Direction, InputEvent};
use crate::tuning::Tuning;

/// A catchable fish species
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Species {
    pub name: &'static str,
    pub sprite: SpriteKey,
}

/// Fixed species table (spawned with equal probability)
pub const SPECIES: [Species; 5] = [
    Species {
        name: "Salmon",
        sprite: SpriteKey::Salmon,
    },
    Species {
        name: "Trout",
        sprite: SpriteKey::Trout,
    },
    Species {
        name: "Tuna",
        sprite: SpriteKey::Tuna,
    },
    Species {
        name: "Cod",
        sprite: SpriteKey::Cod,
    },
    Species {
        name: "Mackerel",
        sprite: SpriteKey::Mackerel,
    },
];

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Tree,
    Snowman,
}

impl ObstacleKind {
    pub fn sprite(&self) -> SpriteKey {
        match self {
            ObstacleKind::Tree => SpriteKey::Tree,
            ObstacleKind::Snowman => SpriteKey::Snowman,
        }
    }

    /// Drawn width from tuning
    pub fn width(&self, tuning: &Tuning) -> f32 {
        match self {
            ObstacleKind::Tree => tuning.tree_width,
            ObstacleKind::Snowman => tuning.snowman_width,
        }
    }
}

/// Shared entity fields
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    /// Bounding box size (scaled sprite size)
    pub size: Vec2,
    pub sprite: SpriteKey,
}

/// A fish entity. Position is the box centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    pub body: Body,
    pub species: Species,
}

impl Fish {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.body.pos, self.body.size)
    }

    /// Box has fully left through the bottom edge
    pub fn is_past(&self, height: f32) -> bool {
        self.body.pos.y - self.body.size.y / 2.0 > height
    }
}

/// An obstacle entity. Position is the box's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub body: Body,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.body.pos, self.body.size)
    }

    /// Box has fully left through the bottom edge
    pub fn is_past(&self, height: f32) -> bool {
        self.body.pos.y - self.body.size.y > height
    }
}

/// The skier
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Sprite centre
    pub pos: Vec2,
    /// Horizontal velocity (pixels/tick)
    pub dx: f32,
    pub size: Vec2,
}

impl Player {
    pub fn half_width(&self) -> f32 {
        self.size.x / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    /// Apply velocity, then keep the sprite fully on screen
    pub fn step(&mut self, width: f32) {
        self.pos.x += self.dx;
        self.clamp_to(width);
    }

    pub fn clamp_to(&mut self, width: f32) {
        let half = self.half_width();
        if width <= self.size.x {
            self.pos.x = width / 2.0;
        } else {
            self.pos.x = self.pos.x.clamp(half, width - half);
        }
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    FishCaught { species: &'static str, score: u32 },
    LevelUp { level: u32 },
    ObstacleHit { score: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance constants for this session
    pub tuning: Tuning,
    /// Playfield size (pixels)
    pub bounds: Vec2,
    pub player: Player,
    /// Live fish (order irrelevant)
    pub fish: Vec<Fish>,
    /// Live obstacles (order irrelevant)
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Current level (starts at 1, never decreases)
    pub level: u32,
    /// Hit flash countdown (ticks remaining)
    pub flash_ticks: u32,
    pub overlay: OverlayState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next rotating level-up message
    message_index: usize,
    rng: Pcg32,
}

impl GameState {
    /// Create a new session. Fails if the skier sprite is unusable.
    pub fn new<A: SpriteAtlas>(
        seed: u64,
        tuning: Tuning,
        bounds: Vec2,
        atlas: &A,
    ) -> Result<Self, AssetError> {
        let size = atlas.try_scaled_size(SpriteKey::Skier, tuning.skier_width)?;
        let player = Player {
            pos: Vec2::new(bounds.x / 2.0, bounds.y - tuning.player_bottom_offset),
            dx: 0.0,
            size,
        };

        Ok(Self {
            tuning,
            bounds,
            player,
            fish: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            level: 1,
            flash_ticks: 0,
            overlay: OverlayState::Running,
            time_ticks: 0,
            message_index: 0,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn is_paused(&self) -> bool {
        self.overlay.is_paused()
    }

    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Take the next congratulatory message (cycles through the list)
    pub fn next_level_up_message(&mut self) -> String {
        let message = self.tuning.level_up_message(self.message_index);
        self.message_index = self.message_index.wrapping_add(1);
        message
    }

    /// Apply a discrete input event (last writer wins)
    pub fn apply_input(&mut self, event: InputEvent) {
        let speed = self.tuning.player_speed;
        match event {
            InputEvent::MoveBegin(Direction::Left) => self.player.dx = -speed,
            InputEvent::MoveBegin(Direction::Right) => self.player.dx = speed,
            InputEvent::MoveEnd(Direction::Left) => {
                if self.player.dx < 0.0 {
                    self.player.dx = 0.0;
                }
            }
            InputEvent::MoveEnd(Direction::Right) => {
                if self.player.dx > 0.0 {
                    self.player.dx = 0.0;
                }
            }
            InputEvent::Dismiss => self.overlay.apply(OverlayEvent::Dismiss),
        }
    }
}
