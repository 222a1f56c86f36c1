//! Hostile mobs

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Rect;
use crate::config::{MobConfig, MobStats};
use crate::heading_degrees;

/// Mob types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MobKind {
    /// Slow, tough
    Heavy,
    /// Quick, dies to two shots
    Fast,
    /// Slowest, middling health
    Weak,
}

impl MobKind {
    pub const ALL: [MobKind; 3] = [MobKind::Heavy, MobKind::Fast, MobKind::Weak];

    pub fn stats(self, config: &MobConfig) -> MobStats {
        match self {
            MobKind::Heavy => config.heavy,
            MobKind::Fast => config.fast,
            MobKind::Weak => config.weak,
        }
    }

    /// Uniform pick among the three types
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone)]
pub struct Mob {
    pub kind: MobKind,
    /// Center of the mob
    pub pos: Vec2,
    /// Base speed scaled by the spawn-time multiplier
    pub speed: f32,
    /// Remaining health; the mob dies when this goes below zero
    pub health: i32,
    /// Facing angle in degrees
    pub angle: f32,
    pub size: f32,
    alive: bool,
}

impl Mob {
    /// Spawn a mob, drawing its speed multiplier once from the configured range
    pub fn spawn<R: Rng + ?Sized>(kind: MobKind, pos: Vec2, config: &MobConfig, rng: &mut R) -> Self {
        let stats = kind.stats(config);
        let factor = rng.random_range(config.speed_min_factor..=config.speed_max_factor);
        Self {
            kind,
            pos,
            speed: stats.speed * factor,
            health: stats.health,
            angle: 0.0,
            size: config.size,
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.size)
    }

    /// Chase the player, one axis at a time
    ///
    /// Each axis closes at full speed on its own, so diagonal pursuit is
    /// faster than a straight line.
    pub fn update(&mut self, dt: f32, target: Vec2) {
        let step = self.speed * dt;
        if target.x > self.pos.x {
            self.pos.x += step;
        } else if target.x < self.pos.x {
            self.pos.x -= step;
        }
        if target.y > self.pos.y {
            self.pos.y += step;
        } else if target.y < self.pos.y {
            self.pos.y -= step;
        }
        self.angle = heading_degrees(self.pos, target);
    }

    /// Take one point of damage; returns true only on the hit that kills
    pub fn hit(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.health -= 1;
        if self.health < 0 {
            self.alive = false;
            return true;
        }
        false
    }
}
