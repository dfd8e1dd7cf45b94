// Host-side tests for inline style formatting and the DOM contract.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use constants::*;
use style::*;

#[test]
fn style_values_carry_units() {
    assert_eq!(scale_transform(0.75), "scale(0.75)");
    assert_eq!(millis(10000.0), "10000ms");
    assert_eq!(millis(-300.0), "-300ms");
    assert_eq!(seconds(2.5), "2.5s");
    assert_eq!(percent(42.0), "42%");
}

#[test]
fn first_element_delay_is_not_negative_zero() {
    assert_eq!(millis(0.0 - 0.0 * 300.0), "0ms");
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        STAGE_ID,
        CONTAINER_ID,
        STARS_ID,
        CANVAS_ID,
        AUDIO_ID,
        SOUND_OVERLAY_ID,
        NEXT_TRACK_ID,
        MUSIC_TOGGLE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn element_classes_nest_in_order() {
    assert_eq!(
        [LOVE_CLASS, HORIZONTAL_CLASS, VERTICAL_CLASS, WORD_CLASS],
        ["love", "love_horizontal", "love_vertical", "love_word"]
    );
    assert!(LAYOUT_EVENTS.contains(&"orientationchange"));
    assert!(GESTURE_EVENTS.contains(&"touchstart"));
}
