//! Mummy Arena - simulation core for a top-down arena shooter
//!
//! Core modules:
//! - `sim`: Game phases, entities, waves, collisions and the per-tick update
//! - `config`: Data-driven tuning loaded from JSON
//! - `assets`: Sprite keys and the injected asset lookup boundary
//! - `error`: Configuration errors

pub mod assets;
pub mod config;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use error::ConfigError;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock frame the driver will feed into the accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena defaults
    pub const ARENA_WIDTH: f32 = 500.0;
    pub const ARENA_HEIGHT: f32 = 500.0;
    pub const TILE_SIZE: f32 = 50.0;

    /// Player defaults (pixels per second, hit points)
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_HEALTH: i32 = 100;
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Invulnerability window after a damaging hit
    pub const HIT_COOLDOWN_MS: f64 = 200.0;
    pub const DAMAGE_PER_HIT: i32 = 10;
    /// Flat bonus applied per speed/health upgrade, as a fraction of base
    pub const UPGRADE_BONUS: f32 = 0.2;

    /// Mob defaults per type
    pub const HEAVY_SPEED: f32 = 40.0;
    pub const HEAVY_HEALTH: i32 = 5;
    pub const FAST_SPEED: f32 = 80.0;
    pub const FAST_HEALTH: i32 = 1;
    pub const WEAK_SPEED: f32 = 20.0;
    pub const WEAK_HEALTH: i32 = 3;
    pub const MOB_SIZE: f32 = 50.0;
    /// Per-spawn speed multiplier range
    pub const MOB_SPEED_MIN_FACTOR: f32 = 0.8;
    pub const MOB_SPEED_MAX_FACTOR: f32 = 1.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 1000.0;
    /// Half-extent of the travel box around the firing point
    pub const PROJECTILE_RANGE: f32 = 1000.0;
    pub const PROJECTILE_SIZE: f32 = 2.0;
    pub const PROJECTILE_POOL: usize = 100;

    /// Ammo defaults
    pub const MAGAZINE_SIZE: u32 = 6;
    pub const SPARE_AMMO: u32 = 24;
    /// Shots per second
    pub const FIRE_RATE: f32 = 1.0;

    /// Wave and scoring defaults
    pub const BASE_MOB_COUNT: u32 = 10;
    pub const MOBS_PER_WAVE: u32 = 2;
    /// Hard cap on the size of any wave
    pub const MAX_MOBS: u32 = 1000;
    pub const SCORE_PER_KILL: u32 = 10;
    pub const HEAL_AMOUNT: i32 = 50;
    pub const RESTOCK_AMOUNT: u32 = 12;
}

/// Facing angle in degrees from `from` toward `to`
///
/// 0° points along +x; with screen coordinates (+y down) angles grow clockwise.
#[inline]
pub fn heading_degrees(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_degrees_cardinal() {
        let o = Vec2::ZERO;
        assert!((heading_degrees(o, Vec2::new(10.0, 0.0)) - 0.0).abs() < 1e-4);
        assert!((heading_degrees(o, Vec2::new(0.0, 10.0)) - 90.0).abs() < 1e-4);
        assert!((heading_degrees(o, Vec2::new(-10.0, 0.0)).abs() - 180.0).abs() < 1e-4);
        assert!((heading_degrees(o, Vec2::new(0.0, -10.0)) + 90.0).abs() < 1e-4);
    }
}
