// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn pan_tracker_reports_deltas_between_samples() {
    let mut pan = PanTracker::default();
    assert!(!pan.is_active());
    assert!(pan.begin(7, 100.0));
    assert!(pan.is_active());

    assert_eq!(pan.sample(7, 112.0), Some(12.0));
    assert_eq!(pan.sample(7, 90.5), Some(-21.5));
    // no movement, no sample
    assert_eq!(pan.sample(7, 90.5), None);
    assert_eq!(pan.sample(7, 91.0), Some(0.5));
}

#[test]
fn pan_tracker_ignores_other_pointers() {
    let mut pan = PanTracker::default();
    assert!(pan.begin(1, 0.0));
    // a second finger does not steal the pan
    assert!(!pan.begin(2, 50.0));
    assert_eq!(pan.sample(2, 80.0), None);
    assert!(!pan.end(2));
    assert!(pan.is_active());

    assert_eq!(pan.sample(1, 10.0), Some(10.0));
    assert!(pan.end(1));
    assert!(!pan.is_active());
}

#[test]
fn pan_tracker_samples_nothing_when_idle() {
    let mut pan = PanTracker::default();
    assert_eq!(pan.sample(0, 42.0), None);
    assert!(!pan.end(0));
}

#[test]
fn pan_tracker_restarts_from_new_origin() {
    let mut pan = PanTracker::default();
    pan.begin(1, 0.0);
    pan.sample(1, 300.0);
    pan.end(1);

    // a new pan measures from where it starts, not where the last one stopped
    pan.begin(1, 1000.0);
    assert_eq!(pan.sample(1, 1004.0), Some(4.0));
}
