//! Game state and the phase machine
//!
//! `GameState` owns every entity collection, the run's RNG and the clock.
//! Phase changes go through `GamePhase::next` only; `GameState::apply` runs
//! the side effects of entering a phase.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ammo::{Ammo, Reload};
use super::arena::Arena;
use super::mob::{Mob, MobKind};
use super::player::Player;
use super::projectile::ProjectilePool;
use super::score::Score;
use super::spawner::spawn_wave;
use crate::config::SimConfig;
use crate::error::ConfigError;

/// Current phase of the game; exactly one is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frozen mid-wave
    Paused,
    /// Between waves, waiting for an upgrade choice
    LevelingUp,
    /// Title / run ended
    GameOver,
    /// Active gameplay
    Playing,
}

/// Upgrades offered between waves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Upgrade {
    FireRate,
    MagazineSize,
    HealthMax,
    RunSpeed,
    Heal,
    Restock,
}

impl Upgrade {
    /// Menu entry 1..=6
    pub fn from_choice(n: u8) -> Option<Self> {
        match n {
            1 => Some(Upgrade::FireRate),
            2 => Some(Upgrade::MagazineSize),
            3 => Some(Upgrade::HealthMax),
            4 => Some(Upgrade::RunSpeed),
            5 => Some(Upgrade::Heal),
            6 => Some(Upgrade::Restock),
            _ => None,
        }
    }
}

/// Inputs to the phase machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    Confirm,
    ChooseUpgrade(Upgrade),
    WaveCleared,
    PlayerDied,
}

impl GamePhase {
    /// Transition table; anything not listed leaves the phase unchanged
    pub fn next(self, event: PhaseEvent) -> GamePhase {
        use GamePhase::*;
        match (self, event) {
            (GameOver, PhaseEvent::Confirm) => LevelingUp,
            (LevelingUp, PhaseEvent::ChooseUpgrade(_)) => Playing,
            (Playing, PhaseEvent::Confirm) => Paused,
            (Paused, PhaseEvent::Confirm) => Playing,
            (Playing, PhaseEvent::WaveCleared) => LevelingUp,
            (Playing, PhaseEvent::PlayerDied) => GameOver,
            (phase, _) => phase,
        }
    }
}

/// Things that happened during a tick, for audio and effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { slot: usize },
    Reloaded { loaded: u32, spare: u32 },
    ReloadFailed,
    MobHit { index: usize },
    MobKilled { index: usize, kind: MobKind },
    PlayerHit { health: i32 },
    WaveCleared { wave: u32 },
    PlayerDied,
    UpgradeChosen { upgrade: Upgrade },
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimConfig,
    pub arena: Arena,
    pub phase: GamePhase,
    pub player: Player,
    /// Current wave's mobs; dead ones stay until the next wave
    pub mobs: Vec<Mob>,
    pub mobs_alive: u32,
    pub projectiles: ProjectilePool,
    pub ammo: Ammo,
    pub score: Score,
    /// 1-based wave number; 0 before the first wave of a run
    pub wave: u32,
    /// Total Playing time in milliseconds
    pub time_ms: f64,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    clock_reset: bool,
}

impl GameState {
    /// Create a new game from a config and seed; starts in GameOver
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let arena = Arena::from_config(&config.arena)?;
        let mut player = Player::new(&config.player);
        player.spawn(&arena);
        Ok(Self {
            arena,
            phase: GamePhase::GameOver,
            player,
            mobs: Vec::new(),
            mobs_alive: 0,
            projectiles: ProjectilePool::new(&config.projectile),
            ammo: Ammo::new(&config.ammo),
            score: Score::default(),
            wave: 0,
            time_ms: 0.0,
            seed,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            clock_reset: false,
            config,
        })
    }

    /// Feed an event through the phase machine
    ///
    /// Returns true if the phase changed.
    pub fn apply(&mut self, event: PhaseEvent) -> bool {
        let from = self.phase;
        let to = from.next(event);
        if from == to {
            return false;
        }

        match (from, to) {
            (GamePhase::GameOver, GamePhase::LevelingUp) => self.start_run(),
            (GamePhase::LevelingUp, GamePhase::Playing) => {
                if let PhaseEvent::ChooseUpgrade(upgrade) = event {
                    self.apply_upgrade(upgrade);
                }
                self.start_wave();
                self.clock_reset = true;
            }
            (GamePhase::Paused, GamePhase::Playing) => self.clock_reset = true,
            (GamePhase::Playing, GamePhase::LevelingUp) => {
                log::info!("Wave {} cleared, score {}", self.wave, self.score.current);
                self.events.push(GameEvent::WaveCleared { wave: self.wave });
            }
            (GamePhase::Playing, GamePhase::GameOver) => {
                log::info!(
                    "Game over on wave {}: score {}, high score {}",
                    self.wave,
                    self.score.current,
                    self.score.high
                );
                self.events.push(GameEvent::PlayerDied);
            }
            _ => {}
        }

        log::info!("Phase {:?} -> {:?}", from, to);
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
        true
    }

    /// Whether the host should restart its frame clock; clears the request
    pub fn take_clock_reset(&mut self) -> bool {
        std::mem::take(&mut self.clock_reset)
    }

    /// Mutable access to the run's random stream
    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Fresh run: score, wave, player stats and ammo back to their starting values
    fn start_run(&mut self) {
        self.score.reset();
        self.wave = 0;
        self.player.reset_stats();
        self.ammo = Ammo::new(&self.config.ammo);
        self.mobs.clear();
        self.mobs_alive = 0;
        self.projectiles.clear();
        log::info!("New run (seed {})", self.seed);
    }

    fn apply_upgrade(&mut self, upgrade: Upgrade) {
        match upgrade {
            Upgrade::FireRate => self.ammo.bonus_fire_rate(),
            Upgrade::MagazineSize => self.ammo.bonus_magazine(),
            Upgrade::HealthMax => self.player.bonus_health_max(),
            Upgrade::RunSpeed => self.player.bonus_speed(),
            Upgrade::Heal => self.player.heal(self.config.upgrades.heal_amount),
            Upgrade::Restock => self.ammo.restock(self.config.upgrades.restock_amount),
        }
        log::info!("Upgrade chosen: {:?}", upgrade);
        self.events.push(GameEvent::UpgradeChosen { upgrade });
    }

    /// Materialize the next wave and put the player back in the middle
    fn start_wave(&mut self) {
        self.wave += 1;
        let count = self.config.waves.mob_count(self.wave);
        self.player.spawn(&self.arena);
        self.mobs = spawn_wave(&self.arena, count, &self.config.mobs, &mut self.rng);
        self.mobs_alive = count;
        self.projectiles.clear();
        log::info!("Wave {}: {} mobs", self.wave, count);
    }

    /// Reload request; only meaningful while Playing
    pub fn reload(&mut self) {
        let event = match self.ammo.reload() {
            Reload::Full | Reload::Partial => GameEvent::Reloaded {
                loaded: self.ammo.loaded,
                spare: self.ammo.spare,
            },
            Reload::Empty => GameEvent::ReloadFailed,
        };
        log::debug!("Reload: {:?}", event);
        self.events.push(event);
    }

    /// Fire from the player's center at `target` if ammo and cooldown allow
    ///
    /// Returns the projectile slot used. A full pool refuses the shot without
    /// spending a round.
    pub fn fire(&mut self, target: glam::Vec2) -> Option<usize> {
        if !self.ammo.can_fire(self.time_ms) || self.projectiles.free_count() == 0 {
            return None;
        }
        let slot = self.projectiles.fire(
            self.player.pos,
            target,
            self.config.projectile.speed,
            self.config.projectile.range,
        )?;
        self.ammo.try_fire(self.time_ms);
        log::debug!("Shot fired from slot {} ({} loaded)", slot, self.ammo.loaded);
        self.events.push(GameEvent::ShotFired { slot });
        Some(slot)
    }
}
