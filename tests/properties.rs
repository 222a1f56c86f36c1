//! Properties that must hold for any input sequence

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use mummy_arena::config::{MobConfig, PlayerConfig, ProjectileConfig};
use mummy_arena::sim::{
    Arena, GameState, InputEvent, Mob, MobKind, MoveIntent, Player, Projectile, Score, TickInput,
    tick,
};
use mummy_arena::SimConfig;

fn intent_strategy() -> impl Strategy<Value = MoveIntent> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(up, down, left, right)| MoveIntent {
            up,
            down,
            left,
            right,
        },
    )
}

fn kind_strategy() -> impl Strategy<Value = MobKind> {
    prop_oneof![
        Just(MobKind::Heavy),
        Just(MobKind::Fast),
        Just(MobKind::Weak)
    ]
}

proptest! {
    #[test]
    fn player_never_leaves_arena(
        left in -500.0f32..500.0,
        top in -500.0f32..500.0,
        width in 250.0f32..1500.0,
        height in 250.0f32..1500.0,
        tile in 0.0f32..100.0,
        steps in prop::collection::vec((intent_strategy(), 0.0f32..2.0), 1..60),
    ) {
        let arena = Arena::new(left, top, width, height, tile).unwrap();
        let mut player = Player::new(&PlayerConfig::default());
        player.spawn(&arena);
        for (intent, dt) in steps {
            player.intent = intent;
            player.update(dt, &arena, Vec2::ZERO);
            prop_assert!(player.pos.x >= left + tile && player.pos.x <= left + width - tile);
            prop_assert!(player.pos.y >= top + tile && player.pos.y <= top + height - tile);
        }
    }

    #[test]
    fn mob_spawn_speed_and_health(kind in kind_strategy(), seed in any::<u64>()) {
        let config = MobConfig::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mob = Mob::spawn(kind, Vec2::ZERO, &config, &mut rng);
        let base = kind.stats(&config);
        prop_assert!(mob.speed >= 0.8 * base.speed - 1e-3);
        prop_assert!(mob.speed <= base.speed + 1e-3);
        prop_assert_eq!(mob.health, base.health);
    }

    #[test]
    fn stop_twice_equals_stop_once(
        ox in -100.0f32..100.0, oy in -100.0f32..100.0,
        tx in -100.0f32..100.0, ty in -100.0f32..100.0,
    ) {
        let config = ProjectileConfig::default();
        let mut once = Projectile::new(config.size);
        once.shoot(Vec2::new(ox, oy), Vec2::new(tx, ty), config.speed, config.range);
        let mut twice = once.clone();
        once.stop();
        twice.stop();
        twice.stop();
        prop_assert!(!once.is_in_flight());
        prop_assert!(!twice.is_in_flight());
        prop_assert_eq!(once.pos, twice.pos);
    }

    #[test]
    fn shot_velocity_is_always_finite(
        ox in -100.0f32..100.0, oy in -100.0f32..100.0,
        tx in -100.0f32..100.0, ty in prop_oneof![Just(0.0f32), -100.0f32..100.0],
    ) {
        let mut p = Projectile::new(2.0);
        // Share a row with the origin half of the time
        let target = Vec2::new(tx, if ty == 0.0 { oy } else { ty });
        p.shoot(Vec2::new(ox, oy), target, 1000.0, 1000.0);
        prop_assert!(p.vel.is_finite());
    }

    #[test]
    fn high_score_is_running_max(
        runs in prop::collection::vec(prop::collection::vec(0u32..100, 0..20), 1..8),
    ) {
        let mut score = Score::default();
        for run in runs {
            score.reset();
            for points in run {
                let before = score.high;
                score.add(points);
                prop_assert_eq!(score.high, before.max(score.current));
                prop_assert!(score.high >= before);
            }
        }
    }

    #[test]
    fn tick_invariants_hold(
        seed in any::<u64>(),
        frames in prop::collection::vec(
            (intent_strategy(), any::<bool>(), -200.0f32..700.0, -200.0f32..700.0, 0u8..8),
            1..200,
        ),
    ) {
        let mut state = GameState::new(SimConfig::default(), seed).unwrap();
        let mut high = 0;
        for (intent, fire, ax, ay, action) in frames {
            let events = match action {
                0 => vec![InputEvent::Confirm],
                1 => vec![InputEvent::Reload],
                2 => vec![InputEvent::UpgradeChoice(ax.abs() as u8 % 8)],
                _ => Vec::new(),
            };
            let input = TickInput { intent, fire, aim: Vec2::new(ax, ay), events };
            tick(&mut state, &input, 1.0 / 30.0);

            let inner = state.arena.inner();
            prop_assert!(inner.contains(state.player.pos));
            prop_assert!(state.player.health >= 0);
            prop_assert!(state.player.health <= state.player.health_max);
            prop_assert!(state.ammo.loaded <= state.ammo.magazine_size);
            let alive = state.mobs.iter().filter(|m| m.is_alive()).count() as u32;
            prop_assert_eq!(alive, state.mobs_alive);
            prop_assert!(state.score.high >= high);
            high = state.score.high;
        }
    }
}
