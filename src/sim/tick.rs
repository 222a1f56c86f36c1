//! Per-frame simulation tick
//!
//! Order within a tick is fixed: discrete input events drive the phase
//! machine, then (only while Playing) player, firing, mobs, projectiles,
//! and finally the combat pass, which sees every entity's new position.

use glam::Vec2;

use super::collision;
use super::player::MoveIntent;
use super::state::{GamePhase, GameState, PhaseEvent, Upgrade};

/// Discrete input events, already decoded by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Start / pause / resume
    Confirm,
    Reload,
    /// Upgrade menu entry 1..=6
    UpgradeChoice(u8),
    Quit,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held direction keys
    pub intent: MoveIntent,
    /// Fire button held
    pub fire: bool,
    /// Cursor position in world space
    pub aim: Vec2,
    /// One-shot events since the last tick, in arrival order
    pub events: Vec<InputEvent>,
}

/// What the host needs to act on after a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Restart the frame clock so the next dt does not include idle time
    pub reset_clock: bool,
    /// Quit was requested
    pub quit: bool,
}

/// Advance the game by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    state.events.clear();
    let mut outcome = TickOutcome::default();

    for event in &input.events {
        match *event {
            InputEvent::Quit => outcome.quit = true,
            InputEvent::Confirm => {
                state.apply(PhaseEvent::Confirm);
            }
            InputEvent::UpgradeChoice(n) => match Upgrade::from_choice(n) {
                Some(upgrade) => {
                    state.apply(PhaseEvent::ChooseUpgrade(upgrade));
                }
                None => log::debug!("Ignoring upgrade choice {}", n),
            },
            InputEvent::Reload => {
                if state.phase == GamePhase::Playing {
                    state.reload();
                }
            }
        }
    }

    // Entering Playing this tick: the frame clock restarts, so this tick
    // covers no time.
    let dt = if state.take_clock_reset() {
        outcome.reset_clock = true;
        0.0
    } else {
        dt
    };

    if state.phase != GamePhase::Playing {
        return outcome;
    }

    state.time_ms += dt as f64 * 1000.0;

    state.player.intent = input.intent;
    state.player.update(dt, &state.arena, input.aim);

    if input.fire {
        state.fire(input.aim);
    }

    let target = state.player.pos;
    for mob in state.mobs.iter_mut().filter(|m| m.is_alive()) {
        mob.update(dt, target);
    }

    state.projectiles.update(dt);

    let combat = collision::resolve(state);
    state.projectiles.reclaim();

    if combat.wave_cleared {
        state.apply(PhaseEvent::WaveCleared);
    } else if combat.player_dead {
        state.apply(PhaseEvent::PlayerDied);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::state::GameEvent;

    const DT: f32 = 1.0 / 60.0;

    fn events(list: &[InputEvent]) -> TickInput {
        TickInput {
            events: list.to_vec(),
            ..Default::default()
        }
    }

    fn start_playing(state: &mut GameState) {
        tick(state, &events(&[InputEvent::Confirm]), DT);
        tick(state, &events(&[InputEvent::UpgradeChoice(5)]), DT);
    }

    #[test]
    fn test_game_over_to_playing() {
        let mut state = GameState::new(SimConfig::default(), 12345).unwrap();
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(&mut state, &events(&[InputEvent::Confirm]), DT);
        assert_eq!(state.phase, GamePhase::LevelingUp);

        // Out-of-range choice does nothing
        tick(&mut state, &events(&[InputEvent::UpgradeChoice(9)]), DT);
        assert_eq!(state.phase, GamePhase::LevelingUp);

        let out = tick(&mut state, &events(&[InputEvent::UpgradeChoice(1)]), DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(out.reset_clock);
        assert_eq!(state.time_ms, 0.0);
        assert_eq!(state.ammo.fire_rate, 2.0);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut state = GameState::new(SimConfig::default(), 12345).unwrap();
        start_playing(&mut state);
        tick(&mut state, &TickInput::default(), DT);
        let before: Vec<_> = state.mobs.iter().map(|m| m.pos).collect();
        let time = state.time_ms;

        tick(&mut state, &events(&[InputEvent::Confirm]), DT);
        assert_eq!(state.phase, GamePhase::Paused);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), DT);
        }
        let after: Vec<_> = state.mobs.iter().map(|m| m.pos).collect();
        assert_eq!(before, after);
        assert_eq!(state.time_ms, time);

        let out = tick(&mut state, &events(&[InputEvent::Confirm]), DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(out.reset_clock);
    }

    #[test]
    fn test_reload_ignored_outside_playing() {
        let mut state = GameState::new(SimConfig::default(), 1).unwrap();
        state.ammo.loaded = 0;
        tick(&mut state, &events(&[InputEvent::Reload]), DT);
        assert_eq!(state.ammo.loaded, 0);
        assert_eq!(state.ammo.spare, 24);
    }

    #[test]
    fn test_reload_while_playing() {
        let mut state = GameState::new(SimConfig::default(), 1).unwrap();
        start_playing(&mut state);
        state.ammo.loaded = 2;
        tick(&mut state, &events(&[InputEvent::Reload]), DT);
        assert_eq!((state.ammo.loaded, state.ammo.spare), (6, 18));
        assert!(state.events.contains(&GameEvent::Reloaded {
            loaded: 6,
            spare: 18
        }));
    }

    #[test]
    fn test_quit_is_reported_without_side_effects() {
        let mut state = GameState::new(SimConfig::default(), 1).unwrap();
        let out = tick(&mut state, &events(&[InputEvent::Quit]), DT);
        assert!(out.quit);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_fire_spawns_projectile() {
        let mut state = GameState::new(SimConfig::default(), 1).unwrap();
        start_playing(&mut state);
        // Let the fire cooldown run out
        for _ in 0..70 {
            tick(&mut state, &TickInput::default(), DT);
        }
        let input = TickInput {
            fire: true,
            aim: state.player.pos + Vec2::new(0.0, -100.0),
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.ammo.loaded, 5);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::ShotFired { .. }))
        );
    }

    #[test]
    fn test_mobs_close_in() {
        let mut state = GameState::new(SimConfig::default(), 77).unwrap();
        start_playing(&mut state);
        let target = state.player.pos;
        let dist_before: f32 = state.mobs.iter().map(|m| m.pos.distance(target)).sum();
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), DT);
        }
        let dist_after: f32 = state.mobs.iter().map(|m| m.pos.distance(target)).sum();
        assert!(dist_after < dist_before);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(SimConfig::default(), 99999).unwrap();
        let mut b = GameState::new(SimConfig::default(), 99999).unwrap();
        let inputs = [
            events(&[InputEvent::Confirm]),
            events(&[InputEvent::UpgradeChoice(4)]),
            TickInput {
                intent: MoveIntent {
                    up: true,
                    ..Default::default()
                },
                ..Default::default()
            },
            TickInput {
                fire: true,
                aim: Vec2::new(10.0, 10.0),
                ..Default::default()
            },
        ];
        for _ in 0..20 {
            for input in &inputs {
                tick(&mut a, input, DT);
                tick(&mut b, input, DT);
            }
        }
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.player.pos, b.player.pos);
        let pa: Vec<_> = a.mobs.iter().map(|m| m.pos).collect();
        let pb: Vec<_> = b.mobs.iter().map(|m| m.pos).collect();
        assert_eq!(pa, pb);
    }
}
