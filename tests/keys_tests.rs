// Host-side tests for keyboard stage controls.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod keys {
    include!("../src/keys.rs");
}

use constants::*;
use keys::*;

#[test]
fn space_toggles_and_r_resets() {
    assert_eq!(action_for_key(" "), Some(StageAction::TogglePause));
    assert_eq!(action_for_key("r"), Some(StageAction::Reset));
    assert_eq!(action_for_key("R"), Some(StageAction::Reset));
}

#[test]
fn plus_and_minus_change_speed() {
    for k in ["+", "=", "ArrowUp"] {
        assert_eq!(action_for_key(k), Some(StageAction::Faster), "key {k}");
    }
    for k in ["-", "_", "ArrowDown"] {
        assert_eq!(action_for_key(k), Some(StageAction::Slower), "key {k}");
    }
}

#[test]
fn unrelated_keys_are_ignored() {
    for k in ["a", "Enter", "Escape", "1", ""] {
        assert_eq!(action_for_key(k), None, "key {k:?}");
    }
}

#[test]
fn speed_steps_are_reversible_inside_range() {
    let up = stepped_speed(1.0, true);
    assert!((up - SPEED_STEP).abs() < 1e-6);
    assert!((stepped_speed(up, false) - 1.0).abs() < 1e-6);
}

#[test]
fn speed_is_clamped_and_stays_positive() {
    let mut s = 1.0;
    for _ in 0..50 {
        s = stepped_speed(s, true);
    }
    assert_eq!(s, SPEED_MAX);
    for _ in 0..50 {
        s = stepped_speed(s, false);
    }
    assert_eq!(s, SPEED_MIN);
    assert!(SPEED_MIN > 0.0);
}
