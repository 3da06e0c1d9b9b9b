//! Sprite asset table
//!
//! Images are loaded once at startup into an immutable table. Entities refer
//! to sprites by `SpriteKey` and never hold their own copy of an image.

use std::collections::HashMap;
use std::fmt;

use glam::Vec2;

/// Logical sprite identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Skier,
    Tree,
    Snowman,
    Salmon,
    Trout,
    Tuna,
    Cod,
    Mackerel,
}

impl SpriteKey {
    /// Every sprite the game needs before the first tick
    pub const ALL: [SpriteKey; 8] = [
        SpriteKey::Skier,
        SpriteKey::Tree,
        SpriteKey::Snowman,
        SpriteKey::Salmon,
        SpriteKey::Trout,
        SpriteKey::Tuna,
        SpriteKey::Cod,
        SpriteKey::Mackerel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteKey::Skier => "skier",
            SpriteKey::Tree => "tree",
            SpriteKey::Snowman => "snowman",
            SpriteKey::Salmon => "salmon",
            SpriteKey::Trout => "trout",
            SpriteKey::Tuna => "tuna",
            SpriteKey::Cod => "cod",
            SpriteKey::Mackerel => "mackerel",
        }
    }
}

impl fmt::Display for SpriteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Startup asset failure. Fatal: the game loop never starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The image could not be fetched or decoded
    Load { key: SpriteKey, reason: String },
    /// A required key was never inserted
    Missing(SpriteKey),
    /// The image loaded but reports a zero natural size
    Empty(SpriteKey),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Load { key, reason } => write!(f, "failed to load sprite '{}': {}", key, reason),
            AssetError::Missing(key) => write!(f, "sprite '{}' was not loaded", key),
            AssetError::Empty(key) => write!(f, "sprite '{}' has no pixels", key),
        }
    }
}

impl std::error::Error for AssetError {}

/// A loaded image plus its natural size
#[derive(Debug, Clone)]
pub struct Sprite<I> {
    pub width: f32,
    pub height: f32,
    pub image: I,
}

impl<I> Sprite<I> {
    pub fn new(width: f32, height: f32, image: I) -> Self {
        Self {
            width,
            height,
            image,
        }
    }

    /// A sprite with no natural size is treated as not loaded yet
    pub fn is_loaded(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Natural sprite sizes, as seen by the simulation
///
/// The simulation only needs dimensions, never pixels.
pub trait SpriteAtlas {
    /// Natural (width, height) of a loaded sprite
    fn sprite_size(&self, key: SpriteKey) -> Result<Vec2, AssetError>;

    /// Natural size, `None` if unavailable
    fn natural_size(&self, key: SpriteKey) -> Option<Vec2> {
        self.sprite_size(key).ok()
    }

    /// Box size for a sprite scaled to `target_width` (keeps aspect ratio)
    fn try_scaled_size(&self, key: SpriteKey, target_width: f32) -> Result<Vec2, AssetError> {
        let size = self.sprite_size(key)?;
        Ok(Vec2::new(target_width, size.y * target_width / size.x))
    }

    /// Scaled box size, `None` if the sprite is unavailable
    fn scaled_size(&self, key: SpriteKey, target_width: f32) -> Option<Vec2> {
        self.try_scaled_size(key, target_width).ok()
    }
}

/// Immutable table of every loaded sprite
#[derive(Debug, Clone)]
pub struct AssetTable<I> {
    sprites: HashMap<SpriteKey, Sprite<I>>,
}

impl<I> Default for AssetTable<I> {
    fn default() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }
}

impl<I> AssetTable<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: SpriteKey, sprite: Sprite<I>) {
        self.sprites.insert(key, sprite);
    }

    pub fn get(&self, key: SpriteKey) -> Option<&Sprite<I>> {
        self.sprites.get(&key)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Verify every required key resolved to a usable image
    pub fn require_all(&self) -> Result<(), AssetError> {
        for key in SpriteKey::ALL {
            self.sprite_size(key)?;
        }
        Ok(())
    }
}

impl AssetTable<()> {
    /// Size-only table for headless runs and tests
    pub fn with_uniform_size(width: f32, height: f32) -> Self {
        let mut table = Self::new();
        for key in SpriteKey::ALL {
            table.insert(key, Sprite::new(width, height, ()));
        }
        table
    }
}

impl<I> SpriteAtlas for AssetTable<I> {
    fn sprite_size(&self, key: SpriteKey) -> Result<Vec2, AssetError> {
        let sprite = self.get(key).ok_or(AssetError::Missing(key))?;
        if !sprite.is_loaded() {
            return Err(AssetError::Empty(key));
        }
        Ok(Vec2::new(sprite.width, sprite.height))
    }
}
