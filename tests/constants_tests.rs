// Host-side tests for constants and presentation helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}
mod transform {
    include!("../src/transform.rs");
}

use constants::*;
use core_constants::*;
use transform::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_are_positive() {
    assert!(SENSITIVITY_DIVISOR > 0.0);
    assert!(STEP_THRESHOLD_DEG > 0.0);
    assert!(ENTRANCE_STIFFNESS > 0.0);
    assert!(ENTRANCE_MASS > 0.0);
    assert!(ENTRANCE_DURATION_SEC > 0.0);
    assert!(FRAME_DT_MAX_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // bounce maps onto a damping ratio in [0, 1]
    assert!((0.0..=1.0).contains(&ENTRANCE_BOUNCE));
    // the entrance starts at least one step away so it reads as motion
    assert!(ENTRANCE_START_DEG.abs() >= STEP_THRESHOLD_DEG);
    // a single long frame cannot skip most of the entrance
    assert!(FRAME_DT_MAX_SEC < ENTRANCE_DURATION_SEC);
    assert!(MASTER_GAIN > 0.0 && MASTER_GAIN <= 1.0);
}

#[test]
fn sound_bank_paths_are_distinct_wavs() {
    assert_eq!(SOUND_BANK.len(), 5);
    for (i, path) in SOUND_BANK.iter().enumerate() {
        assert!(path.starts_with('/') && path.ends_with(".wav"), "{path}");
        assert!(!SOUND_BANK[i + 1..].contains(path), "duplicate {path}");
    }
}

#[test]
fn dial_transform_composes_lift_zoom_and_rotation() {
    assert_eq!(
        dial_transform(0.0),
        "translateY(-70%) scale(2) rotateZ(0.000deg)"
    );
    assert_eq!(
        dial_transform(-60.0),
        "translateY(-70%) scale(2) rotateZ(-60.000deg)"
    );
    assert!(dial_transform(1234.5678).ends_with("rotateZ(1234.568deg)"));
}

#[test]
fn dial_style_disables_touch_scrolling_and_transitions() {
    let style = dial_style(12.0);
    assert!(style.starts_with("transform:translateY(-70%) scale(2) rotateZ(12.000deg);"));
    assert!(style.contains("touch-action:none"));
    assert!(style.contains("transition:none"));
}
