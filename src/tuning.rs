//! Data-driven game balance
//!
//! Every gameplay constant lives here so a page can override them with an
//! inline JSON block without rebuilding.

use serde::{Deserialize, Serialize};

use crate::consts::{FISHES_PER_LEVEL, HIT_FLASH_TICKS};

/// Balance constants for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Difficulty ramps ===
    /// Scroll speed at level 1 (pixels/tick)
    pub base_scroll: f32,
    /// Extra scroll speed per level
    pub scroll_step: f32,
    /// Fish spawn probability per tick at level 1
    pub base_fish_chance: f32,
    /// Extra fish spawn probability per level
    pub fish_step: f32,
    /// Obstacle spawn probability per tick at level 1
    pub base_obstacle_chance: f32,
    /// Extra obstacle spawn probability per level
    pub obstacle_step: f32,

    // === Scoring ===
    /// Fish needed per level-up
    pub fishes_per_level: u32,
    /// Hit flash length after an obstacle collision (ticks)
    pub hit_flash_ticks: u32,

    // === Player ===
    /// Horizontal speed while a move key is held (pixels/tick)
    pub player_speed: f32,
    /// Distance from the bottom edge to the skier's centre
    pub player_bottom_offset: f32,

    // === Sprite widths (heights follow the image aspect ratio) ===
    pub skier_width: f32,
    pub fish_width: f32,
    pub tree_width: f32,
    pub snowman_width: f32,
    /// Probability that a spawned obstacle is a tree rather than a snowman
    pub tree_weight: f32,

    /// Rotating level-up congratulations
    pub level_up_messages: Vec<String>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_scroll: 3.0,
            scroll_step: 0.5,
            base_fish_chance: 0.02,
            fish_step: 0.005,
            base_obstacle_chance: 0.015,
            obstacle_step: 0.005,

            fishes_per_level: FISHES_PER_LEVEL,
            hit_flash_ticks: HIT_FLASH_TICKS,

            player_speed: 6.0,
            player_bottom_offset: 100.0,

            skier_width: 48.0,
            fish_width: 44.0,
            tree_width: 64.0,
            snowman_width: 52.0,
            tree_weight: 0.6,

            level_up_messages: vec![
                "Level up! The slope gets steeper.".to_string(),
                "Nice fishing! Hold on tight.".to_string(),
                "You're on a roll! Faster now.".to_string(),
                "Fish whisperer! Next level.".to_string(),
                "Powder and salmon, what a day!".to_string(),
            ],
        }
    }
}

impl Tuning {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse from JSON, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring malformed tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Level-up message for the given rotation index (wraps)
    pub fn level_up_message(&self, index: usize) -> String {
        if self.level_up_messages.is_empty() {
            return "Level up!".to_string();
        }
        self.level_up_messages[index % self.level_up_messages.len()].clone()
    }
}
