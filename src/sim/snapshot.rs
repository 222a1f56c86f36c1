//! Read-only per-frame view of the simulation
//!
//! Renderers and HUDs consume a `FrameSnapshot` and never touch
//! `GameState`. `SnapshotBuffer` hands snapshots to a reader on another
//! thread without tearing.

use std::sync::{Arc, Mutex, PoisonError};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::mob::MobKind;
use super::state::{GamePhase, GameState};
use crate::assets::SpriteKey;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub angle: f32,
    pub health: i32,
    pub health_max: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobView {
    pub kind: MobKind,
    pub pos: Vec2,
    pub angle: f32,
    pub alive: bool,
    pub sprite: SpriteKey,
}

/// A projectile in flight; stopped ones are never drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Top-left corner
    pub pos: Vec2,
}

/// HUD scalars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
    pub wave: u32,
    pub mobs_remaining: u32,
    pub loaded: u32,
    pub spare: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub player: PlayerView,
    /// Includes dead mobs still on the floor
    pub mobs: Vec<MobView>,
    /// Projectiles currently in flight
    pub projectiles: Vec<ProjectileView>,
    pub hud: Hud,
}

impl GameState {
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            player: PlayerView {
                pos: self.player.pos,
                angle: self.player.angle,
                health: self.player.health,
                health_max: self.player.health_max,
            },
            mobs: self
                .mobs
                .iter()
                .map(|m| MobView {
                    kind: m.kind,
                    pos: m.pos,
                    angle: m.angle,
                    alive: m.is_alive(),
                    sprite: if m.is_alive() {
                        SpriteKey::Mob(m.kind)
                    } else {
                        SpriteKey::DeadMob
                    },
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .filter(|p| p.is_in_flight())
                .map(|p| ProjectileView { pos: p.pos })
                .collect(),
            hud: Hud {
                score: self.score.current,
                high_score: self.score.high,
                wave: self.wave,
                mobs_remaining: self.mobs_alive,
                loaded: self.ammo.loaded,
                spare: self.ammo.spare,
            },
        }
    }
}

/// Latest-frame hand-off between one writer and one reader
///
/// The writer builds a complete snapshot and swaps it in; the reader holds
/// an `Arc` to whichever frame was current, so it never sees a half-written
/// one.
#[derive(Debug)]
pub struct SnapshotBuffer {
    latest: Mutex<Arc<FrameSnapshot>>,
}

impl SnapshotBuffer {
    pub fn new(initial: FrameSnapshot) -> Self {
        Self {
            latest: Mutex::new(Arc::new(initial)),
        }
    }

    pub fn publish(&self, snapshot: FrameSnapshot) {
        let next = Arc::new(snapshot);
        // A panicked peer cannot leave a half-written Arc behind
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }

    pub fn latest(&self) -> Arc<FrameSnapshot> {
        Arc::clone(&self.latest.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
