//! Simulation tuning
//!
//! Every number the simulation uses lives here. Sections default
//! independently, so a JSON file only needs the values it changes.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Arena;

/// Arena rectangle and the wall-tile margin entities are kept out of
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub tile_size: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            tile_size: TILE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Base speed in pixels per second
    pub speed: f32,
    /// Base (and initial max) health
    pub health: i32,
    /// Side of the square hit box
    pub size: f32,
    pub hit_cooldown_ms: f64,
    pub damage_per_hit: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            health: PLAYER_HEALTH,
            size: PLAYER_SIZE,
            hit_cooldown_ms: HIT_COOLDOWN_MS,
            damage_per_hit: DAMAGE_PER_HIT,
        }
    }
}

/// Base stats for one mob type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MobStats {
    pub speed: f32,
    pub health: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobConfig {
    pub heavy: MobStats,
    pub fast: MobStats,
    pub weak: MobStats,
    pub size: f32,
    /// Lower bound of the per-spawn speed multiplier
    pub speed_min_factor: f32,
    /// Upper bound of the per-spawn speed multiplier
    pub speed_max_factor: f32,
}

impl Default for MobConfig {
    fn default() -> Self {
        Self {
            heavy: MobStats {
                speed: HEAVY_SPEED,
                health: HEAVY_HEALTH,
            },
            fast: MobStats {
                speed: FAST_SPEED,
                health: FAST_HEALTH,
            },
            weak: MobStats {
                speed: WEAK_SPEED,
                health: WEAK_HEALTH,
            },
            size: MOB_SIZE,
            speed_min_factor: MOB_SPEED_MIN_FACTOR,
            speed_max_factor: MOB_SPEED_MAX_FACTOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub speed: f32,
    /// Half-extent of the travel box centered on the firing point
    pub range: f32,
    pub size: f32,
    /// Maximum projectiles in flight at once
    pub pool_capacity: usize,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            range: PROJECTILE_RANGE,
            size: PROJECTILE_SIZE,
            pool_capacity: PROJECTILE_POOL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmmoConfig {
    pub magazine_size: u32,
    pub initial_loaded: u32,
    pub initial_spare: u32,
    /// Shots per second
    pub fire_rate: f32,
}

impl Default for AmmoConfig {
    fn default() -> Self {
        Self {
            magazine_size: MAGAZINE_SIZE,
            initial_loaded: MAGAZINE_SIZE,
            initial_spare: SPARE_AMMO,
            fire_rate: FIRE_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Mobs in the first wave
    pub base_mob_count: u32,
    /// Extra mobs per subsequent wave
    pub mobs_per_wave: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            base_mob_count: BASE_MOB_COUNT,
            mobs_per_wave: MOBS_PER_WAVE,
        }
    }
}

impl WaveConfig {
    /// Mob count for a 1-based wave number, capped at `MAX_MOBS`
    pub fn mob_count(&self, wave: u32) -> u32 {
        wave.saturating_sub(1)
            .saturating_mul(self.mobs_per_wave)
            .saturating_add(self.base_mob_count)
            .min(MAX_MOBS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeConfig {
    /// Health restored by the heal upgrade
    pub heal_amount: i32,
    /// Spare rounds added by the restock upgrade
    pub restock_amount: u32,
}

impl Default for UpgradeConfig {
    fn default() -> Self {
        Self {
            heal_amount: HEAL_AMOUNT,
            restock_amount: RESTOCK_AMOUNT,
        }
    }
}

/// Complete simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub arena: ArenaConfig,
    pub player: PlayerConfig,
    pub mobs: MobConfig,
    pub projectile: ProjectileConfig,
    pub ammo: AmmoConfig,
    pub waves: WaveConfig,
    pub upgrades: UpgradeConfig,
    pub score_per_kill: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            player: PlayerConfig::default(),
            mobs: MobConfig::default(),
            projectile: ProjectileConfig::default(),
            ammo: AmmoConfig::default(),
            waves: WaveConfig::default(),
            upgrades: UpgradeConfig::default(),
            score_per_kill: SCORE_PER_KILL,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveValue { field, value })
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        Arena::from_config(&self.arena)?;

        positive("player.speed", self.player.speed as f64)?;
        positive("player.health", self.player.health as f64)?;
        positive("player.size", self.player.size as f64)?;
        positive("player.damage_per_hit", self.player.damage_per_hit as f64)?;
        if !(self.player.hit_cooldown_ms >= 0.0 && self.player.hit_cooldown_ms.is_finite()) {
            return Err(ConfigError::NonPositiveValue {
                field: "player.hit_cooldown_ms",
                value: self.player.hit_cooldown_ms,
            });
        }

        for (field, stats) in [
            ("mobs.heavy", &self.mobs.heavy),
            ("mobs.fast", &self.mobs.fast),
            ("mobs.weak", &self.mobs.weak),
        ] {
            positive(field, stats.speed as f64)?;
            if stats.health < 0 {
                return Err(ConfigError::NonPositiveValue {
                    field,
                    value: stats.health as f64,
                });
            }
        }
        positive("mobs.size", self.mobs.size as f64)?;
        let (min, max) = (self.mobs.speed_min_factor, self.mobs.speed_max_factor);
        if !(min > 0.0 && min <= max && max.is_finite()) {
            return Err(ConfigError::InvalidSpeedRange { min, max });
        }

        positive("projectile.speed", self.projectile.speed as f64)?;
        positive("projectile.range", self.projectile.range as f64)?;
        positive("projectile.size", self.projectile.size as f64)?;
        if self.projectile.pool_capacity == 0 {
            return Err(ConfigError::ZeroProjectilePool);
        }

        if self.ammo.magazine_size == 0 {
            return Err(ConfigError::ZeroMagazine);
        }
        positive("ammo.fire_rate", self.ammo.fire_rate as f64)?;

        for (field, value) in [
            ("waves.base_mob_count", self.waves.base_mob_count),
            ("waves.mobs_per_wave", self.waves.mobs_per_wave),
        ] {
            if value > MAX_MOBS {
                return Err(ConfigError::TooManyMobs {
                    field,
                    value,
                    max: MAX_MOBS,
                });
            }
        }

        Ok(())
    }
}
