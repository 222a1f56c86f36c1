//! Mummy Arena headless driver
//!
//! Runs the simulation without a window: a scripted autopilot plays, a
//! render thread consumes published snapshots, and the HUD is logged.
//!
//! Usage: `mummy-arena [seconds] [seed]`, with `MUMMY_ARENA_CONFIG` pointing
//! at an optional JSON tuning file and `RUST_LOG` controlling verbosity.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use mummy_arena::SimConfig;
use mummy_arena::assets::{AssetLookup, HandleCache, SpriteKey};
use mummy_arena::consts::*;
use mummy_arena::sim::{
    GamePhase, GameState, InputEvent, MoveIntent, SnapshotBuffer, TickInput, tick,
};

/// Stand-in texture store: hands out sequential ids per file name
#[derive(Default)]
struct NameRegistry {
    names: Vec<String>,
}

impl AssetLookup for NameRegistry {
    type Handle = u32;

    fn lookup(&mut self, name: &str) -> u32 {
        log::debug!("Loading asset {}", name);
        self.names.push(name.to_string());
        (self.names.len() - 1) as u32
    }
}

/// Plays the game well enough to exercise every phase
struct Autopilot {
    upgrade_cursor: u8,
}

impl Autopilot {
    fn new() -> Self {
        Self { upgrade_cursor: 0 }
    }

    fn input(&mut self, state: &GameState) -> TickInput {
        let mut input = TickInput::default();
        match state.phase {
            GamePhase::GameOver => input.events.push(InputEvent::Confirm),
            GamePhase::LevelingUp => {
                self.upgrade_cursor = self.upgrade_cursor % 6 + 1;
                input.events.push(InputEvent::UpgradeChoice(self.upgrade_cursor));
            }
            GamePhase::Paused => input.events.push(InputEvent::Confirm),
            GamePhase::Playing => {
                let me = state.player.pos;
                let nearest = state
                    .mobs
                    .iter()
                    .filter(|m| m.is_alive())
                    .min_by(|a, b| a.pos.distance_squared(me).total_cmp(&b.pos.distance_squared(me)));
                if let Some(mob) = nearest {
                    input.aim = mob.pos;
                    input.fire = true;
                    let away = me - mob.pos;
                    if away.length() < 150.0 {
                        input.intent = MoveIntent {
                            up: away.y < 0.0,
                            down: away.y > 0.0,
                            left: away.x < 0.0,
                            right: away.x > 0.0,
                        };
                    }
                }
                if state.ammo.loaded == 0 {
                    input.events.push(InputEvent::Reload);
                }
            }
        }
        input
    }
}

fn load_config() -> SimConfig {
    let Ok(path) = std::env::var("MUMMY_ARENA_CONFIG") else {
        return SimConfig::default();
    };
    let loaded = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| SimConfig::from_json(&json).map_err(|e| e.to_string()));
    match loaded {
        Ok(config) => {
            log::info!("Loaded config from {}", path);
            config
        }
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path, e);
            SimConfig::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Mummy Arena (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60.0);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);

    let mut state = match GameState::new(load_config(), seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Game initialized with seed: {}", seed);

    let buffer = Arc::new(SnapshotBuffer::new(state.snapshot()));
    let running = Arc::new(AtomicBool::new(true));

    let renderer = {
        let buffer = Arc::clone(&buffer);
        let running = Arc::clone(&running);
        thread::spawn(move || {
            let mut cache = HandleCache::new(NameRegistry::default());
            let mut frames = 0u64;
            while running.load(Ordering::Acquire) {
                let snap = buffer.latest();
                if snap.phase == GamePhase::Playing {
                    cache.get(SpriteKey::Background);
                    cache.get(SpriteKey::AmmoIcon);
                    cache.get(SpriteKey::Player);
                    for mob in &snap.mobs {
                        cache.get(mob.sprite);
                    }
                }
                frames += 1;
                thread::yield_now();
            }
            log::info!("Renderer drew {} frames using {} sprites", frames, cache.len());
        })
    };

    // Wall-clock frames are simulated at 50 Hz and fed through a fixed 60 Hz step
    let frame_dt = 1.0 / 50.0_f32;
    let mut autopilot = Autopilot::new();
    let mut accumulator = 0.0_f32;
    let mut elapsed = 0.0_f32;
    let mut next_report = 1.0_f32;

    'frames: while elapsed < seconds {
        elapsed += frame_dt;
        accumulator += frame_dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = autopilot.input(&state);
            let outcome = tick(&mut state, &input, SIM_DT);
            for event in &state.events {
                log::trace!("{:?}", event);
            }
            if outcome.quit {
                break 'frames;
            }
            if outcome.reset_clock {
                accumulator = 0.0;
                break;
            }
            accumulator -= SIM_DT;
            substeps += 1;
        }

        buffer.publish(state.snapshot());

        if elapsed >= next_report {
            next_report += 1.0;
            let snap = buffer.latest();
            let hud = &snap.hud;
            log::info!(
                "[{:>5.1}s] {:?} wave {} | mobs {} | ammo {}/{} | health {}/{} | score {} (high {})",
                elapsed,
                state.phase,
                hud.wave,
                hud.mobs_remaining,
                hud.loaded,
                hud.spare,
                state.player.health,
                state.player.health_max,
                hud.score,
                hud.high_score
            );
        }
    }

    running.store(false, Ordering::Release);
    if renderer.join().is_err() {
        log::error!("Renderer thread panicked");
    }
    log::info!(
        "Finished after {:.1}s: score {}, high score {}, wave {}",
        elapsed,
        state.score.current,
        state.score.high,
        state.wave
    );
}
