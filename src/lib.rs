//! Slope Fisher - An endless downhill arcade game
//!
//! Core modules:
//! - `sim`: Simulation (difficulty, spawning, collisions, overlay state machine)
//! - `renderer`: Surface abstraction and the per-frame draw pass
//! - `game`: Frame driver tying input, tick, render and HUD sinks together
//! - `platform`: Browser glue (image loading, canvas, DOM sinks)
//! - `tuning` / `settings`: Data-driven balance and presentation config

pub mod assets;
pub mod game;
pub mod hud;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use assets::{AssetError, AssetTable, Sprite, SpriteKey};
pub use game::{Frame, Game};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default canvas size (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Hit flash duration after an obstacle collision (ticks)
    pub const HIT_FLASH_TICKS: u32 = 15;

    /// Fish caught per level
    pub const FISHES_PER_LEVEL: u32 = 5;
}
