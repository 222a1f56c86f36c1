//! Projectiles and the bounded projectile pool

use glam::Vec2;

use super::arena::Rect;
use crate::config::ProjectileConfig;

#[derive(Debug, Clone)]
pub struct Projectile {
    /// Top-left corner of the projectile's box
    pub pos: Vec2,
    pub vel: Vec2,
    /// Flight stops once the projectile leaves this box
    pub range_box: Rect,
    pub size: f32,
    in_flight: bool,
}

impl Projectile {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            range_box: Rect::new(Vec2::ZERO, Vec2::ZERO),
            size,
            in_flight: false,
        }
    }

    /// Launch from `origin` toward `target`
    ///
    /// Speed is split across the axes by the gradient dx/dy rather than by
    /// normalizing, so the resulting velocity magnitude varies with angle.
    /// A shot with no vertical offset is purely horizontal.
    pub fn shoot(&mut self, origin: Vec2, target: Vec2, speed: f32, range: f32) {
        self.in_flight = true;
        self.pos = origin;

        let dy = origin.y - target.y;
        let (mut vx, mut vy) = if dy == 0.0 {
            (speed, 0.0)
        } else {
            let gradient = ((origin.x - target.x) / dy).abs();
            let ratio = speed / (1.0 + gradient);
            (ratio * gradient, ratio)
        };
        if target.x < origin.x {
            vx = -vx;
        }
        if target.y < origin.y {
            vy = -vy;
        }
        self.vel = Vec2::new(vx, vy);

        self.range_box = Rect::new(origin - Vec2::splat(range), origin + Vec2::splat(range));
    }

    /// Stop flight; safe to call on a stopped projectile
    pub fn stop(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_corner(self.pos, self.size)
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        if !self.range_box.contains(self.pos) {
            self.in_flight = false;
        }
    }
}

/// Fixed-capacity pool of projectiles with O(1) slot reuse
#[derive(Debug, Clone)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
    /// Indices of slots that are free to fire
    free: Vec<usize>,
    /// Whether each slot is currently on the free list
    pooled: Vec<bool>,
}

impl ProjectilePool {
    pub fn new(config: &ProjectileConfig) -> Self {
        let capacity = config.pool_capacity;
        Self {
            slots: (0..capacity).map(|_| Projectile::new(config.size)).collect(),
            // Reversed so slot 0 is handed out first
            free: (0..capacity).rev().collect(),
            pooled: vec![true; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn in_flight_count(&self) -> usize {
        self.slots.iter().filter(|p| p.is_in_flight()).count()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Take a free slot and launch it; None when every slot is busy
    pub fn fire(&mut self, origin: Vec2, target: Vec2, speed: f32, range: f32) -> Option<usize> {
        let index = self.free.pop()?;
        self.pooled[index] = false;
        self.slots[index].shoot(origin, target, speed, range);
        Some(index)
    }

    pub fn update(&mut self, dt: f32) {
        for p in self.slots.iter_mut().filter(|p| p.is_in_flight()) {
            p.update(dt);
        }
    }

    /// Return stopped projectiles to the free list
    pub fn reclaim(&mut self) {
        for (index, p) in self.slots.iter().enumerate() {
            if !p.is_in_flight() && !self.pooled[index] {
                self.pooled[index] = true;
                self.free.push(index);
            }
        }
    }

    /// Stop everything and free every slot
    pub fn clear(&mut self) {
        for p in &mut self.slots {
            p.stop();
        }
        self.reclaim();
    }

    pub fn get(&self, index: usize) -> Option<&Projectile> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Projectile> {
        self.slots.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: f32 = 1000.0;
    const RANGE: f32 = 1000.0;

    #[test]
    fn test_shoot_diagonal_gradient_split() {
        let mut p = Projectile::new(2.0);
        p.shoot(Vec2::ZERO, Vec2::new(100.0, 100.0), SPEED, RANGE);
        assert!(p.is_in_flight());
        // gradient 1 -> each axis gets half the scalar speed
        assert!((p.vel.x - 500.0).abs() < 1e-3);
        assert!((p.vel.y - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_shoot_signs_toward_target() {
        let mut p = Projectile::new(2.0);
        p.shoot(Vec2::new(50.0, 50.0), Vec2::new(-50.0, -150.0), SPEED, RANGE);
        assert!(p.vel.x < 0.0);
        assert!(p.vel.y < 0.0);
        // gradient 0.5: vy = 1000/1.5, vx = vy/2
        assert!((p.vel.y + 666.666).abs() < 0.01);
        assert!((p.vel.x + 333.333).abs() < 0.01);
    }

    #[test]
    fn test_horizontal_shot_has_no_nan() {
        let mut p = Projectile::new(2.0);
        p.shoot(Vec2::new(10.0, 10.0), Vec2::new(-90.0, 10.0), SPEED, RANGE);
        assert!(p.vel.is_finite());
        assert_eq!(p.vel, Vec2::new(-SPEED, 0.0));

        p.shoot(Vec2::new(10.0, 10.0), Vec2::new(90.0, 10.0), SPEED, RANGE);
        assert_eq!(p.vel, Vec2::new(SPEED, 0.0));
    }

    #[test]
    fn test_vertical_shot() {
        let mut p = Projectile::new(2.0);
        p.shoot(Vec2::ZERO, Vec2::new(0.0, -40.0), SPEED, RANGE);
        assert_eq!(p.vel, Vec2::new(0.0, -SPEED));
    }

    #[test]
    fn test_stops_when_leaving_range_box() {
        let mut p = Projectile::new(2.0);
        p.shoot(Vec2::ZERO, Vec2::new(10.0, 0.0), SPEED, 100.0);
        p.update(0.05);
        assert!(p.is_in_flight());
        p.update(0.06);
        assert!(!p.is_in_flight());
    }

    #[test]
    fn test_diagonal_shot_flies_to_box_corner() {
        // The range is a box, not a circle: a 45° shot travels to the corner
        let mut diagonal = Projectile::new(2.0);
        diagonal.shoot(Vec2::ZERO, Vec2::new(100.0, 100.0), SPEED, 100.0);
        let mut straight = Projectile::new(2.0);
        straight.shoot(Vec2::ZERO, Vec2::new(100.0, 0.0), SPEED, 100.0);

        diagonal.update(0.15);
        straight.update(0.15);
        assert!(diagonal.pos.abs_diff_eq(Vec2::new(75.0, 75.0), 1e-3));
        // ~106 px from the origin, further than the range
        assert!(diagonal.pos.length() > 100.0);
        assert!(diagonal.is_in_flight());
        assert!(!straight.is_in_flight());

        diagonal.update(0.06);
        assert!(!diagonal.is_in_flight());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut p = Projectile::new(2.0);
        p.shoot(Vec2::ZERO, Vec2::new(10.0, 0.0), SPEED, RANGE);
        p.stop();
        let pos = p.pos;
        p.stop();
        assert!(!p.is_in_flight());
        assert_eq!(p.pos, pos);
    }

    #[test]
    fn test_pool_exhaustion_and_reclaim() {
        let config = ProjectileConfig {
            pool_capacity: 2,
            ..Default::default()
        };
        let mut pool = ProjectilePool::new(&config);
        let a = pool.fire(Vec2::ZERO, Vec2::X, SPEED, RANGE);
        let b = pool.fire(Vec2::ZERO, Vec2::Y, SPEED, RANGE);
        assert_eq!(a, Some(0));
        assert_eq!(b, Some(1));
        assert_eq!(pool.fire(Vec2::ZERO, Vec2::Y, SPEED, RANGE), None);

        pool.iter_mut().next().unwrap().stop();
        pool.reclaim();
        assert_eq!(pool.free_count(), 1);
        // Reclaim twice must not duplicate the slot
        pool.reclaim();
        assert_eq!(pool.free_count(), 1);
        assert_eq!(pool.fire(Vec2::ZERO, Vec2::X, SPEED, RANGE), Some(0));
        assert_eq!(pool.in_flight_count(), 2);

        pool.clear();
        assert_eq!(pool.free_count(), 2);
        assert_eq!(pool.in_flight_count(), 0);
    }
}
