// Host-side tests for the entrance spring and the sound cycler.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod cycler {
        include!("../src/core/cycler.rs");
    }
    pub mod entrance {
        include!("../src/core/entrance.rs");
    }
    pub mod trigger {
        include!("../src/core/trigger.rs");
    }
}

use crate::core::cycler::*;
use crate::core::entrance::*;
use crate::core::trigger::*;

fn sample_curve(cfg: &EntranceConfig) -> Vec<f64> {
    (0..=200)
        .map(|i| spring_offset(cfg, i as f64 * cfg.duration_sec / 200.0))
        .collect()
}

#[test]
fn spring_starts_at_offset_and_overshoots_rest() {
    let cfg = EntranceConfig::default();
    let curve = sample_curve(&cfg);
    assert_eq!(curve[0], cfg.start_deg);
    let peak = curve.iter().cloned().fold(f64::MIN, f64::max);
    // bounce 0.4 swings a little past zero, well short of the start offset
    assert!(peak > 1.0 && peak < 10.0, "peak {peak}");
    assert!(curve.last().map_or(false, |v| v.abs() < 0.05));
}

#[test]
fn spring_without_bounce_never_overshoots() {
    let cfg = EntranceConfig {
        bounce: 0.0,
        ..EntranceConfig::default()
    };
    let curve = sample_curve(&cfg);
    assert!(curve.iter().all(|v| *v <= 0.0));
    // monotonic approach to rest
    assert!(curve.windows(2).all(|w| w[1] >= w[0] - 1e-12));
}

#[test]
fn spring_settles_exactly_after_duration() {
    let mut spring = EntranceSpring::new(EntranceConfig::default());
    assert_eq!(spring.angle_deg(), -60.0);
    let mid = spring.advance(1.0);
    assert!(mid != 0.0 && !spring.is_done());
    assert_eq!(spring.advance(1.0), 0.0);
    assert!(spring.is_done());
    assert_eq!(spring.advance(5.0), 0.0);
}

#[test]
fn spring_ignores_bad_frame_deltas() {
    let mut spring = EntranceSpring::new(EntranceConfig::default());
    spring.advance(f64::NAN);
    spring.advance(-1.0);
    assert_eq!(spring.angle_deg(), -60.0);
    assert!(!spring.is_done());
}

#[test]
fn step_index_is_symmetric_around_zero() {
    assert_eq!(step_index(0.0, 10.0), 0);
    assert_eq!(step_index(9.999, 10.0), 0);
    assert_eq!(step_index(-9.999, 10.0), 0);
    assert_eq!(step_index(10.0, 10.0), 1);
    assert_eq!(step_index(-25.0, 10.0), 2);
    assert_eq!(step_index(25.0, 5.0), 5);
    assert_eq!(step_index(f64::MAX, 10.0), u64::MAX);
}

#[test]
fn trigger_rebaseline_suppresses_next_fire() {
    let mut trigger = StepTrigger::new(10.0);
    trigger.rebaseline(-43.0);
    assert_eq!(trigger.last_step(), 4);
    assert!(!trigger.observe(-41.0));
    assert!(trigger.observe(-39.0));
    assert_eq!(trigger.last_step(), 3);
}

#[test]
fn cycler_wraps_and_tracks_single_clip() {
    let mut cycler = SoundCycler::new(3);
    assert_eq!(cycler.current_index(), 0);
    assert_eq!(cycler.playback(), Playback::Idle);

    let a = cycler.advance_and_play();
    assert_eq!((a.stop, a.index), (None, 1));
    let b = cycler.advance_and_play();
    assert_eq!((b.stop, b.index), (Some(a.play), 2));
    let c = cycler.advance_and_play();
    assert_eq!((c.stop, c.index), (Some(b.play), 0));
    assert!(a.play < b.play && b.play < c.play);

    assert!(!cycler.clip_ended(b.play));
    assert!(matches!(cycler.playback(), Playback::Playing { id, index: 0 } if id == c.play));
    assert!(cycler.clip_ended(c.play));
    assert_eq!(cycler.playback(), Playback::Idle);
    assert!(!cycler.playback_failed(c.play));
}
