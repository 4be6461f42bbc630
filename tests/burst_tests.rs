//! CoinBurst Integration Tests
//!
//! Tests for:
//! - Construction: coins hidden at rest, trigger enabled
//! - trigger(): run start, no-op while running, zero-coin runs
//! - update(): full run to completion, events, reset to rest
//! - Themes: material recoloring, unknown titles, mid-run switches
//! - Determinism with a fixed seed, path previews, delta-time stepping

use glam::Vec3;

use coin_burst::animation::{BurstEvent, CoinBurst, RunSummary};
use coin_burst::errors::CoinBurstError;
use coin_burst::resources::Color;
use coin_burst::settings::{BurstSettings, MotionSettings, RangeSetting};

const FRAME_CAP: usize = 10_000;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn seeded(coin_count: usize, seed: u64) -> CoinBurst {
    init_logging();
    let settings = BurstSettings {
        coin_count,
        seed: Some(seed),
        ..Default::default()
    };
    CoinBurst::new(settings).unwrap()
}

/// Steps until the run ends and returns the number of frames taken.
fn run_to_completion(burst: &mut CoinBurst) -> usize {
    let mut frames = 0;
    while burst.is_animating() {
        burst.update(None);
        frames += 1;
        assert!(frames < FRAME_CAP, "run did not finish");
    }
    frames
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn new_burst_is_idle_with_hidden_coins() {
    let burst = CoinBurst::new(BurstSettings::default()).unwrap();

    assert_eq!(burst.coins().len(), 50);
    assert!(!burst.is_animating());
    assert!(burst.is_trigger_enabled());

    for coin in burst.coins() {
        assert!(!coin.visible);
        assert_eq!(coin.transform.position, Vec3::ZERO);
        assert_eq!(coin.transform.scale, Vec3::splat(0.2));
        assert!(!coin.driver().is_active());
    }
}

#[test]
fn new_rejects_invalid_settings() {
    let settings = BurstSettings {
        motion: MotionSettings {
            speed: RangeSetting::new(0.02, 0.01),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        CoinBurst::new(settings),
        Err(CoinBurstError::InvalidRange { .. })
    ));
}

// ============================================================================
// Trigger
// ============================================================================

#[test]
fn trigger_starts_every_coin() {
    let mut burst = seeded(10, 1);
    assert!(burst.trigger());

    assert!(burst.is_animating());
    assert!(!burst.is_trigger_enabled());
    for coin in burst.coins() {
        assert!(coin.visible);
        assert!(coin.driver().is_active());
        assert_eq!(coin.driver().progress(), 0.0);
    }

    assert_eq!(
        burst.drain_events(),
        vec![BurstEvent::RunStarted { run: 1, coins: 10 }]
    );
}

#[test]
fn trigger_while_running_is_noop() {
    let mut burst = seeded(10, 2);
    burst.trigger();
    for _ in 0..5 {
        burst.update(None);
    }
    burst.drain_events();

    let snapshot: Vec<_> = burst
        .coins()
        .iter()
        .map(|c| {
            let d = c.driver();
            (*d.curve().unwrap(), d.progress(), d.speed(), d.rotation_rate())
        })
        .collect();

    assert!(!burst.trigger());

    let after: Vec<_> = burst
        .coins()
        .iter()
        .map(|c| {
            let d = c.driver();
            (*d.curve().unwrap(), d.progress(), d.speed(), d.rotation_rate())
        })
        .collect();
    assert_eq!(snapshot, after);
    assert!(burst.drain_events().is_empty());
}

#[test]
fn zero_coin_run_completes_immediately() {
    let mut burst = seeded(0, 3);
    assert!(burst.trigger());

    assert!(!burst.is_animating());
    assert!(burst.is_trigger_enabled());
    assert_eq!(
        burst.drain_events(),
        vec![
            BurstEvent::RunStarted { run: 1, coins: 0 },
            BurstEvent::RunComplete(RunSummary { run: 1, coins: 0 }),
        ]
    );
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn full_run_completes_once_and_resets() {
    let mut burst = seeded(25, 4);
    burst.trigger();
    run_to_completion(&mut burst);

    let events = burst.drain_events();
    let finished = events
        .iter()
        .filter(|e| matches!(e, BurstEvent::CoinFinished { .. }))
        .count();
    let completes: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            BurstEvent::RunComplete(summary) => Some(*summary),
            _ => None,
        })
        .collect();

    assert_eq!(finished, 25);
    assert_eq!(completes, vec![RunSummary { run: 1, coins: 25 }]);
    assert!(matches!(events.last(), Some(BurstEvent::RunComplete(_))));

    assert!(burst.is_trigger_enabled());
    assert_eq!(burst.coordinator().finished(), 0);
    for coin in burst.coins() {
        assert!(!coin.visible);
        assert!(!coin.driver().is_active());
        assert_eq!(coin.transform.position, Vec3::ZERO);
        assert_eq!(coin.transform.rotation, Vec3::ZERO);
    }

    // Idle frames change nothing
    burst.update(None);
    assert!(burst.drain_events().is_empty());
}

#[test]
fn every_coin_reports_its_index_once() {
    let mut burst = seeded(12, 5);
    burst.trigger();
    run_to_completion(&mut burst);

    let mut indices: Vec<_> = burst
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            BurstEvent::CoinFinished { index } => Some(index),
            _ => None,
        })
        .collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..12).collect::<Vec<_>>());
}

#[test]
fn run_stays_running_until_slowest_coin() {
    let mut burst = seeded(20, 6);
    burst.trigger();

    let slowest = burst
        .coins()
        .iter()
        .map(|c| c.driver().speed())
        .fold(f32::INFINITY, f32::min);

    // Coins are still in flight well before the slowest could have finished
    let safe_frames = (0.9 / slowest) as usize;
    for _ in 0..safe_frames {
        burst.update(None);
    }
    assert!(burst.is_animating());
}

#[test]
fn second_run_draws_new_curves() {
    let mut burst = seeded(5, 7);
    burst.trigger();
    let first: Vec<_> = burst.coins().iter().map(|c| *c.driver().curve().unwrap()).collect();
    run_to_completion(&mut burst);

    assert!(burst.trigger());
    let second: Vec<_> = burst.coins().iter().map(|c| *c.driver().curve().unwrap()).collect();
    assert_ne!(first, second);

    run_to_completion(&mut burst);
    assert_eq!(burst.coordinator().runs_completed(), 2);
}

#[test]
fn same_seed_same_run() {
    let mut a = seeded(8, 42);
    let mut b = seeded(8, 42);
    a.trigger();
    b.trigger();

    let frames_a = run_to_completion(&mut a);
    let frames_b = run_to_completion(&mut b);
    assert_eq!(frames_a, frames_b);
    assert_eq!(a.drain_events(), b.drain_events());
}

#[test]
fn delta_time_at_reference_rate_matches_fixed_step() {
    let mut fixed = seeded(4, 9);
    let mut timed = seeded(4, 9);
    fixed.trigger();
    timed.trigger();

    for _ in 0..10 {
        fixed.update(None);
        timed.update(Some(1.0 / 60.0));
    }

    for (a, b) in fixed.coins().iter().zip(timed.coins()) {
        assert!((a.driver().progress() - b.driver().progress()).abs() < 1e-4);
        assert!((a.transform.rotation.y - b.transform.rotation.y).abs() < 1e-4);
    }
}

#[test]
fn bad_delta_time_never_moves_coins_backwards() {
    let mut burst = seeded(1, 17);
    burst.trigger();
    for _ in 0..5 {
        burst.update(None);
    }

    for dt in [-0.5, f32::NAN, f32::NEG_INFINITY, f32::INFINITY, 0.0] {
        let before = burst.coins()[0].driver().progress();
        let rotation = burst.coins()[0].transform.rotation.y;
        burst.update(Some(dt));

        let after = burst.coins()[0].driver().progress();
        assert!(after >= before, "dt {dt}: {before} -> {after}");
        assert!(after.is_finite());
        assert!(burst.coins()[0].transform.rotation.y >= rotation);
    }

    assert!(burst.is_animating());
    run_to_completion(&mut burst);
    assert_eq!(burst.coordinator().runs_completed(), 1);
}

#[test]
fn model_matrix_tracks_position() {
    let mut burst = seeded(1, 10);
    burst.trigger();
    for _ in 0..10 {
        burst.update(None);
    }

    let coin = &mut burst.coins_mut()[0];
    let position = coin.transform.position;
    let matrix = coin.model_matrix();
    assert_eq!(Vec3::from(matrix.translation), position);
}

// ============================================================================
// Themes
// ============================================================================

#[test]
fn default_theme_is_purple() {
    let burst = seeded(1, 11);
    assert_eq!(burst.palette().active().unwrap().title, "purple");
    assert_eq!(burst.material().color(), Color::from_hex("#4e43f5").unwrap());
    assert_eq!(burst.material().shininess(), 100.0);
    assert_eq!(burst.material().specular(), Vec3::ONE);
    assert_eq!(burst.material().emissive(), Vec3::ZERO);
}

#[test]
fn select_theme_recolors_material() {
    let mut burst = seeded(1, 12);
    let version = burst.material().version();

    burst.select_theme("pink").unwrap();
    assert_eq!(burst.material().color(), Color::from_hex("#ff689f").unwrap());
    assert!(burst.material().version() > version);
    assert!(burst.palette().is_active("pink"));
}

#[test]
fn unknown_theme_is_rejected() {
    let mut burst = seeded(1, 13);
    let err = burst.select_theme("green").unwrap_err();
    assert!(matches!(err, CoinBurstError::UnknownTheme(ref t) if t == "green"));
    assert!(burst.palette().is_active("purple"));
}

#[test]
fn theme_switch_mid_run_leaves_animation_alone() {
    let mut burst = seeded(3, 14);
    burst.trigger();
    for _ in 0..5 {
        burst.update(None);
    }
    let progress: Vec<_> = burst.coins().iter().map(|c| c.driver().progress()).collect();

    burst.select_theme("blue").unwrap();

    assert!(burst.is_animating());
    let after: Vec<_> = burst.coins().iter().map(|c| c.driver().progress()).collect();
    assert_eq!(progress, after);
}

#[test]
fn cycle_theme_wraps_around() {
    let mut burst = seeded(1, 15);
    assert_eq!(burst.cycle_theme().unwrap().title, "pink");
    assert_eq!(burst.cycle_theme().unwrap().title, "blue");
    assert_eq!(burst.cycle_theme().unwrap().title, "purple");
}

#[test]
fn empty_palette_falls_back_to_default_color() {
    let settings = BurstSettings {
        coin_count: 1,
        palette: Vec::new(),
        ..Default::default()
    };
    let mut burst = CoinBurst::new(settings).unwrap();

    assert!(burst.palette().active().is_none());
    assert_eq!(burst.material().color().to_hex(), "#4e43f5");
    assert!(burst.cycle_theme().is_none());
}

// ============================================================================
// Path Preview
// ============================================================================

#[test]
fn path_preview_requires_a_curve() {
    let mut burst = seeded(2, 16);
    assert!(burst.path_preview(0, 200).is_none());

    burst.trigger();
    let points = burst.path_preview(1, 200).unwrap();
    assert_eq!(points.len(), 201);
    assert_eq!(points[0], Vec3::ZERO);

    assert!(burst.path_preview(2, 200).is_none());
}
