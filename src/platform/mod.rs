//! Platform abstraction layer
//!
//! Browser glue for:
//! - Sprite loading (one async join before the first frame)
//! - DOM scoreboard and overlay sinks
//! - Inline JSON config blocks
//!
//! Native builds have no platform layer; the binary runs headless.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Relative URL of a sprite image
pub fn sprite_url(base: &str, key: crate::assets::SpriteKey) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        format!("{}.png", key.as_str())
    } else {
        format!("{}/{}.png", base, key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteKey;

    #[test]
    fn test_sprite_url() {
        assert_eq!(sprite_url("assets/", SpriteKey::Snowman), "assets/snowman.png");
        assert_eq!(sprite_url("assets", SpriteKey::Skier), "assets/skier.png");
        assert_eq!(sprite_url("", SpriteKey::Cod), "cod.png");
    }
}
