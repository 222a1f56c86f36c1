//! The player entity

use glam::Vec2;

use super::arena::{Arena, Rect};
use crate::config::PlayerConfig;
use crate::consts::UPGRADE_BONUS;
use crate::heading_degrees;

/// Which directions the player is currently pushing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Per-axis direction; opposite keys cancel, diagonals are not normalized
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Center of the player
    pub pos: Vec2,
    pub intent: MoveIntent,
    /// Current speed (base plus upgrades)
    pub speed: f32,
    pub health: i32,
    pub health_max: i32,
    /// Facing angle in degrees, recomputed every update
    pub angle: f32,
    /// Game time (ms) of the last hit that did damage
    pub last_hit_ms: f64,
    pub size: f32,
    base_speed: f32,
    base_health: i32,
    hit_cooldown_ms: f64,
    damage_per_hit: i32,
}

impl Player {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            pos: Vec2::ZERO,
            intent: MoveIntent::default(),
            speed: config.speed,
            health: config.health,
            health_max: config.health,
            angle: 0.0,
            last_hit_ms: 0.0,
            size: config.size,
            base_speed: config.speed,
            base_health: config.health,
            hit_cooldown_ms: config.hit_cooldown_ms,
            damage_per_hit: config.damage_per_hit,
        }
    }

    /// Place the player in the middle of the arena
    pub fn spawn(&mut self, arena: &Arena) {
        self.pos = arena.center();
        self.intent = MoveIntent::default();
    }

    /// Back to base stats for a fresh run
    pub fn reset_stats(&mut self) {
        self.speed = self.base_speed;
        self.health = self.base_health;
        self.health_max = self.base_health;
    }

    /// Hit box used for collisions
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.size)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Integrate movement, keep inside the arena, face the aim point
    pub fn update(&mut self, dt: f32, arena: &Arena, aim: Vec2) {
        self.pos += self.intent.direction() * self.speed * dt;
        self.pos = arena.clamp(self.pos);
        // The camera is centered on the player, so aiming at the world point
        // is the same as aiming from screen center to the cursor.
        self.angle = heading_degrees(self.pos, aim);
    }

    /// Take a hit at game time `now_ms`
    ///
    /// Returns false and changes nothing while the cooldown from the
    /// previous damaging hit is still running.
    pub fn hit(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_hit_ms > self.hit_cooldown_ms {
            self.last_hit_ms = now_ms;
            self.health = (self.health - self.damage_per_hit).max(0);
            true
        } else {
            false
        }
    }

    /// +20% of base speed
    pub fn bonus_speed(&mut self) {
        self.speed += self.base_speed * UPGRADE_BONUS;
    }

    /// +20% of base health to the maximum
    pub fn bonus_health_max(&mut self) {
        self.health_max += (self.base_health as f32 * UPGRADE_BONUS).round() as i32;
    }

    /// Restore health, never past the maximum
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.health_max);
    }
}
