//! Collision detection and combat resolution
//!
//! Runs after every entity has moved for the tick. All tests are
//! axis-aligned box overlaps; hits change health and flags but never push
//! anything around.

use super::state::{GameEvent, GameState};

/// What the combat pass did this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatOutcome {
    /// Mobs killed by projectiles
    pub kills: u32,
    /// Damaging hits the player took
    pub player_hits: u32,
    /// Every mob of the wave is dead
    pub wave_cleared: bool,
    /// Player health reached zero
    pub player_dead: bool,
}

/// Projectiles against mobs, then mobs against the player
pub fn resolve(state: &mut GameState) -> CombatOutcome {
    let mut outcome = CombatOutcome::default();
    let score_per_kill = state.config.score_per_kill;

    for projectile in state.projectiles.iter_mut() {
        if !projectile.is_in_flight() {
            continue;
        }
        let bounds = projectile.bounds();
        let Some((index, mob)) = state
            .mobs
            .iter_mut()
            .enumerate()
            .find(|(_, m)| m.is_alive() && m.bounds().intersects(&bounds))
        else {
            continue;
        };

        // One hit per projectile
        projectile.stop();
        if mob.hit() {
            state.score.add(score_per_kill);
            state.mobs_alive = state.mobs_alive.saturating_sub(1);
            outcome.kills += 1;
            log::debug!(
                "{:?} #{} killed, {} remaining, score {}",
                mob.kind,
                index,
                state.mobs_alive,
                state.score.current
            );
            state.events.push(GameEvent::MobKilled {
                index,
                kind: mob.kind,
            });
        } else {
            state.events.push(GameEvent::MobHit { index });
        }
    }
    outcome.wave_cleared = state.mobs_alive == 0;

    let player_bounds = state.player.bounds();
    for mob in state.mobs.iter().filter(|m| m.is_alive()) {
        if !mob.bounds().intersects(&player_bounds) {
            continue;
        }
        if state.player.hit(state.time_ms) {
            outcome.player_hits += 1;
            state.events.push(GameEvent::PlayerHit {
                health: state.player.health,
            });
        }
        if state.player.is_dead() {
            outcome.player_dead = true;
        }
    }

    outcome
}
