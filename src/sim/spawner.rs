//! Wave spawning
//!
//! Mobs enter from a random edge of the arena. All randomness comes from the
//! caller's generator so a run is reproducible from its seed.

use glam::Vec2;
use rand::Rng;

use super::arena::Arena;
use super::mob::{Mob, MobKind};
use crate::config::MobConfig;

/// Arena edges a mob can enter from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];
}

/// Random point on `edge`, inset by the tile margin
pub fn spawn_point<R: Rng + ?Sized>(arena: &Arena, edge: Edge, rng: &mut R) -> Vec2 {
    let inner = arena.inner();
    let along_x = |rng: &mut R| rng.random_range(inner.min.x..=inner.max.x);
    let along_y = |rng: &mut R| rng.random_range(inner.min.y..=inner.max.y);
    match edge {
        Edge::Left => Vec2::new(inner.min.x, along_y(rng)),
        Edge::Right => Vec2::new(inner.max.x, along_y(rng)),
        Edge::Top => Vec2::new(along_x(rng), inner.min.y),
        Edge::Bottom => Vec2::new(along_x(rng), inner.max.y),
    }
}

/// Build a fresh wave of `count` mobs
pub fn spawn_wave<R: Rng + ?Sized>(
    arena: &Arena,
    count: u32,
    config: &MobConfig,
    rng: &mut R,
) -> Vec<Mob> {
    let mut mobs = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        let pos = spawn_point(arena, edge, rng);
        let kind = MobKind::random(rng);
        mobs.push(Mob::spawn(kind, pos, config, rng));
    }
    log::debug!("Spawned wave of {} mobs", mobs.len());
    mobs
}
