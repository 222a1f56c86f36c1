//! Arena geometry and axis-aligned boxes
//!
//! The arena is a rectangle ringed by a wall of tiles. Entities live inside
//! the rectangle shrunk by one tile on every side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;
use crate::error::ConfigError;

/// Axis-aligned rectangle (min corner inclusive, max corner exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square of side `size` centered on `center`
    pub fn centered(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self::new(center - half, center + half)
    }

    /// Square of side `size` with its top-left corner at `corner`
    pub fn from_corner(corner: Vec2, size: f32) -> Self {
        Self::new(corner, corner + Vec2::splat(size))
    }

    /// Strict overlap; rectangles that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Whether a point lies inside the rectangle, edges included
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Playable arena
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Wall margin on every side
    pub tile_size: f32,
}

impl Arena {
    pub fn new(
        left: f32,
        top: f32,
        width: f32,
        height: f32,
        tile_size: f32,
    ) -> Result<Self, ConfigError> {
        // Written as negated comparisons so NaN fails every check
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ConfigError::NonPositiveArena { width, height });
        }
        if !(left.is_finite() && top.is_finite()) {
            return Err(ConfigError::NonFiniteOrigin { left, top });
        }
        if !(tile_size >= 0.0) {
            return Err(ConfigError::NegativeTileSize { tile_size });
        }
        if !(tile_size * 2.0 < width && tile_size * 2.0 < height) {
            return Err(ConfigError::TileMarginTooLarge {
                tile_size,
                width,
                height,
            });
        }
        Ok(Self {
            left,
            top,
            width,
            height,
            tile_size,
        })
    }

    pub fn from_config(config: &ArenaConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.left,
            config.top,
            config.width,
            config.height,
            config.tile_size,
        )
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Region entities may occupy (arena minus one tile on each side)
    pub fn inner(&self) -> Rect {
        Rect::new(
            Vec2::new(self.left + self.tile_size, self.top + self.tile_size),
            Vec2::new(self.right() - self.tile_size, self.bottom() - self.tile_size),
        )
    }

    /// Clamp a position into the inner region, each axis independently
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        let inner = self.inner();
        pos.clamp(inner.min, inner.max)
    }
}
