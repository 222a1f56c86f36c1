//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - One seeded RNG per run, never reseeded
//! - Entities are updated in a fixed order each tick
//! - No rendering, asset or platform dependencies

pub mod ammo;
pub mod arena;
pub mod collision;
pub mod mob;
pub mod player;
pub mod projectile;
pub mod score;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use ammo::{Ammo, Reload};
pub use arena::{Arena, Rect};
pub use collision::{CombatOutcome, resolve};
pub use mob::{Mob, MobKind};
pub use player::{MoveIntent, Player};
pub use projectile::{Projectile, ProjectilePool};
pub use score::Score;
pub use snapshot::{FrameSnapshot, Hud, MobView, PlayerView, ProjectileView, SnapshotBuffer};
pub use spawner::{Edge, spawn_point, spawn_wave};
pub use state::{GameEvent, GamePhase, GameState, PhaseEvent, Upgrade};
pub use tick::{InputEvent, TickInput, TickOutcome, tick};
