//! Configuration errors
//!
//! Everything that can go wrong in this crate is caught before the first tick:
//! a bad arena or tuning value is rejected at setup and never reaches the
//! simulation.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Arena width or height is zero, negative or not finite
    NonPositiveArena { width: f32, height: f32 },
    /// Arena origin is NaN or infinite
    NonFiniteOrigin { left: f32, top: f32 },
    /// Tile margin below zero or NaN
    NegativeTileSize { tile_size: f32 },
    /// Tile margin leaves no playable area (tile ≥ half of a dimension)
    TileMarginTooLarge { tile_size: f32, width: f32, height: f32 },
    /// A tuning value that must be strictly positive and finite
    NonPositiveValue { field: &'static str, value: f64 },
    /// Mob speed multiplier range is empty or non-positive
    InvalidSpeedRange { min: f32, max: f32 },
    /// Magazine cannot hold any rounds
    ZeroMagazine,
    /// Projectile pool has no slots
    ZeroProjectilePool,
    /// A wave setting above `MAX_MOBS`
    TooManyMobs {
        field: &'static str,
        value: u32,
        max: u32,
    },
    /// JSON could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveArena { width, height } => {
                write!(f, "arena must have a positive finite size, got {width}x{height}")
            }
            Self::NonFiniteOrigin { left, top } => {
                write!(f, "arena origin must be finite, got ({left}, {top})")
            }
            Self::NegativeTileSize { tile_size } => {
                write!(f, "tile size must not be negative, got {tile_size}")
            }
            Self::TileMarginTooLarge {
                tile_size,
                width,
                height,
            } => write!(
                f,
                "tile size {tile_size} leaves no playable area in a {width}x{height} arena"
            ),
            Self::NonPositiveValue { field, value } => {
                write!(f, "{field} must be a positive finite number, got {value}")
            }
            Self::InvalidSpeedRange { min, max } => {
                write!(f, "mob speed range must satisfy 0 < min <= max, got [{min}, {max}]")
            }
            Self::ZeroMagazine => write!(f, "magazine size must be at least 1"),
            Self::ZeroProjectilePool => write!(f, "projectile pool must have at least 1 slot"),
            Self::TooManyMobs { field, value, max } => {
                write!(f, "{field} is {value}, at most {max} mobs are allowed per wave")
            }
            Self::Parse(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
