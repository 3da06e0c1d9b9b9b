//! Presentation settings
//!
//! Render-only preferences. Nothing here affects the simulation, and
//! nothing is persisted: the page may supply an inline JSON override.

use serde::{Deserialize, Serialize};

/// Presentation preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Opacity of fish and obstacle sprites (0.0 - 1.0)
    pub entity_opacity: f32,
    /// Peak opacity of the red hit flash (the `K` in `K * remaining / duration`)
    pub flash_intensity: f32,
    /// Hit flash tint enabled
    pub hit_flash: bool,
    /// Reduced motion (suppresses the flash tint)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entity_opacity: 0.85,
            flash_intensity: 0.4,
            hit_flash: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective hit flash (respects reduced_motion)
    pub fn effective_hit_flash(&self) -> bool {
        self.hit_flash && !self.reduced_motion
    }

    /// Parse from JSON, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => {
                log::info!("Loaded settings overrides");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }
}
