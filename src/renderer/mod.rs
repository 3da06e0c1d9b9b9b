//! Rendering module
//!
//! A read-only pass over `GameState` that issues draw calls to a `Surface`.
//! The browser backend is a Canvas 2D context (`canvas::CanvasSurface`).

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::assets::{AssetTable, SpriteKey};
use crate::settings::Settings;
use crate::sim::{Aabb, GameState};

/// Hit flash tint color (RGB, 0-1)
pub const FLASH_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// A 2D drawing surface of fixed pixel size
pub trait Surface {
    /// Drawable image handle
    type Image;

    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn draw_image(&mut self, image: &Self::Image, rect: Aabb, opacity: f32);
    /// Fill with straight (non-premultiplied) RGBA in 0-1
    fn fill_rect(&mut self, rect: Aabb, rgba: [f32; 4]);
}

/// Opacity of the red hit flash: `intensity * remaining / duration`
pub fn flash_opacity(remaining: u32, duration: u32, intensity: f32) -> f32 {
    if remaining == 0 || duration == 0 {
        return 0.0;
    }
    intensity * (remaining.min(duration) as f32 / duration as f32)
}

/// Draw one frame: fish, obstacles, skier, then the hit flash
pub fn render<S: Surface>(
    state: &GameState,
    assets: &AssetTable<S::Image>,
    settings: &Settings,
    surface: &mut S,
) {
    surface.clear();

    let alpha = settings.entity_opacity;
    for fish in &state.fish {
        draw_sprite(surface, assets, fish.body.sprite, fish.bounds(), alpha);
    }
    for obstacle in &state.obstacles {
        draw_sprite(surface, assets, obstacle.body.sprite, obstacle.bounds(), alpha);
    }
    draw_sprite(surface, assets, SpriteKey::Skier, state.player.bounds(), 1.0);

    if settings.effective_hit_flash() {
        let opacity = flash_opacity(
            state.flash_ticks,
            state.tuning.hit_flash_ticks,
            settings.flash_intensity,
        );
        if opacity > 0.0 {
            let [r, g, b] = FLASH_COLOR;
            let full = Aabb::from_top_left(Vec2::ZERO, surface.size());
            surface.fill_rect(full, [r, g, b, opacity]);
        }
    }
}

fn draw_sprite<S: Surface>(
    surface: &mut S,
    assets: &AssetTable<S::Image>,
    key: SpriteKey,
    rect: Aabb,
    opacity: f32,
) {
    if let Some(sprite) = assets.get(key) {
        surface.draw_image(&sprite.image, rect, opacity);
    }
}

/// Surface that records draw calls, for tests
#[cfg(test)]
pub mod testing {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear,
        Image {
            key: SpriteKey,
            rect: Aabb,
            opacity: f32,
        },
        Fill {
            rect: Aabb,
            rgba: [f32; 4],
        },
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub size: Vec2,
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                size: Vec2::new(width, height),
                calls: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        // Images are identified by their key
        type Image = SpriteKey;

        fn size(&self) -> Vec2 {
            self.size
        }

        fn clear(&mut self) {
            self.calls.push(DrawCall::Clear);
        }

        fn draw_image(&mut self, image: &SpriteKey, rect: Aabb, opacity: f32) {
            self.calls.push(DrawCall::Image {
                key: *image,
                rect,
                opacity,
            });
        }

        fn fill_rect(&mut self, rect: Aabb, rgba: [f32; 4]) {
            self.calls.push(DrawCall::Fill { rect, rgba });
        }
    }

    /// Asset table whose image handles are their own keys
    pub fn keyed_assets(width: f32, height: f32) -> AssetTable<SpriteKey> {
        let mut table = AssetTable::new();
        for key in SpriteKey::ALL {
            table.insert(key, crate::assets::Sprite::new(width, height, key));
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::sim::{Body, Fish, Obstacle, ObstacleKind, SPECIES};
    use crate::tuning::Tuning;

    fn new_state() -> (GameState, AssetTable<SpriteKey>) {
        let assets = keyed_assets(40.0, 40.0);
        let state = GameState::new(1, Tuning::default(), Vec2::new(800.0, 600.0), &assets).unwrap();
        (state, assets)
    }

    #[test]
    fn test_flash_opacity() {
        assert_eq!(flash_opacity(0, 15, 0.4), 0.0);
        assert_eq!(flash_opacity(15, 15, 0.4), 0.4);
        assert!((flash_opacity(5, 15, 0.6) - 0.2).abs() < 1e-6);
        assert_eq!(flash_opacity(3, 0, 0.4), 0.0);
    }

    #[test]
    fn test_draw_order() {
        let (mut state, assets) = new_state();
        state.fish.push(Fish {
            body: Body {
                pos: Vec2::new(100.0, 100.0),
                size: Vec2::new(40.0, 20.0),
                sprite: SpriteKey::Tuna,
            },
            species: SPECIES[2],
        });
        state.obstacles.push(Obstacle {
            body: Body {
                pos: Vec2::new(200.0, 100.0),
                size: Vec2::new(40.0, 60.0),
                sprite: SpriteKey::Tree,
            },
            kind: ObstacleKind::Tree,
        });
        let settings = Settings::default();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        render(&state, &assets, &settings, &mut surface);

        assert_eq!(surface.calls.len(), 4);
        assert_eq!(surface.calls[0], DrawCall::Clear);
        assert_eq!(
            surface.calls[1],
            DrawCall::Image {
                key: SpriteKey::Tuna,
                rect: Aabb::from_center(Vec2::new(100.0, 100.0), Vec2::new(40.0, 20.0)),
                opacity: settings.entity_opacity,
            }
        );
        assert_eq!(
            surface.calls[2],
            DrawCall::Image {
                key: SpriteKey::Tree,
                rect: Aabb::from_top_left(Vec2::new(200.0, 100.0), Vec2::new(40.0, 60.0)),
                opacity: settings.entity_opacity,
            }
        );
        assert!(matches!(
            surface.calls[3],
            DrawCall::Image {
                key: SpriteKey::Skier,
                opacity,
                ..
            } if opacity == 1.0
        ));
    }

    #[test]
    fn test_flash_tint_last_and_full_surface() {
        let (mut state, assets) = new_state();
        state.flash_ticks = 15;
        let settings = Settings::default();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        render(&state, &assets, &settings, &mut surface);

        let last = surface.calls.last().unwrap();
        assert_eq!(
            *last,
            DrawCall::Fill {
                rect: Aabb::from_top_left(Vec2::ZERO, Vec2::new(800.0, 600.0)),
                rgba: [1.0, 0.0, 0.0, settings.flash_intensity],
            }
        );
    }

    #[test]
    fn test_reduced_motion_skips_tint() {
        let (mut state, assets) = new_state();
        state.flash_ticks = 10;
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        let mut surface = RecordingSurface::new(800.0, 600.0);
        render(&state, &assets, &settings, &mut surface);
        assert!(
            !surface
                .calls
                .iter()
                .any(|c| matches!(c, DrawCall::Fill { .. }))
        );
    }
}
