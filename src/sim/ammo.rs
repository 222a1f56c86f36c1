//! Magazine and fire-rate control

use crate::config::AmmoConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Ammo {
    pub loaded: u32,
    pub spare: u32,
    pub magazine_size: u32,
    /// Shots per second
    pub fire_rate: f32,
    /// Game time (ms) of the last shot
    pub last_shot_ms: f64,
}

/// Result of a reload request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reload {
    /// Full magazine taken from spare
    Full,
    /// Whatever was left in spare
    Partial,
    /// Spare is empty; nothing changed
    Empty,
}

impl Ammo {
    pub fn new(config: &AmmoConfig) -> Self {
        Self {
            loaded: config.initial_loaded.min(config.magazine_size),
            spare: config.initial_spare,
            magazine_size: config.magazine_size,
            fire_rate: config.fire_rate,
            last_shot_ms: 0.0,
        }
    }

    /// Minimum gap between shots in milliseconds
    pub fn cooldown_ms(&self) -> f64 {
        1000.0 / self.fire_rate as f64
    }

    /// Whether a shot at `now_ms` would be allowed
    pub fn can_fire(&self, now_ms: f64) -> bool {
        self.loaded > 0 && now_ms - self.last_shot_ms > self.cooldown_ms()
    }

    /// Spend one round at `now_ms`; false if empty or still cooling down
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        if !self.can_fire(now_ms) {
            return false;
        }
        self.loaded -= 1;
        self.last_shot_ms = now_ms;
        true
    }

    /// Refill the magazine from spare
    ///
    /// Whatever is still loaded is replaced, not topped up.
    pub fn reload(&mut self) -> Reload {
        if self.spare >= self.magazine_size {
            self.loaded = self.magazine_size;
            self.spare -= self.magazine_size;
            Reload::Full
        } else if self.spare > 0 {
            self.loaded = self.spare;
            self.spare = 0;
            Reload::Partial
        } else {
            Reload::Empty
        }
    }

    /// Add spare rounds; the only way the total round count goes up
    pub fn restock(&mut self, amount: u32) {
        self.spare = self.spare.saturating_add(amount);
    }

    pub fn bonus_fire_rate(&mut self) {
        self.fire_rate += 1.0;
    }

    pub fn bonus_magazine(&mut self) {
        self.magazine_size = self.magazine_size.saturating_mul(2);
    }
}
