//! Descriptors for the pool of floating love phrases.
//!
//! Each element nests two animation handles (horizontal drift, vertical bob)
//! that share a start offset and are scaled by one global speed factor.

use crate::constants::{HORIZONTAL_BASE_MS, STAGGER_STEP_MS, VERTICAL_BASE_MS};
use crate::phrases::normalized_random_phrase;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTiming {
    pub horizontal_ms: f32,
    pub vertical_ms: f32,
}

impl AnimationTiming {
    /// Durations shrink as speed grows. `speed` must be positive.
    pub fn for_speed(speed: f32) -> Self {
        Self {
            horizontal_ms: HORIZONTAL_BASE_MS / speed,
            vertical_ms: VERTICAL_BASE_MS / speed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Running,
    Paused,
}

impl PlayState {
    pub fn as_css(self) -> &'static str {
        match self {
            PlayState::Running => "running",
            PlayState::Paused => "paused",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PlayState::Running => PlayState::Paused,
            PlayState::Paused => PlayState::Running,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecorativeElement {
    pub index: usize,
    pub delay_ms: f32,
    pub text: String,
    pub special: bool,
    pub timing: AnimationTiming,
}

/// Start offset for element `index`: negative so that elements begin mid-cycle.
#[inline]
pub fn stagger_delay_ms(index: usize) -> f32 {
    0.0 - index as f32 * STAGGER_STEP_MS
}

pub fn generate_elements<R: Rng + ?Sized>(
    count: usize,
    speed: f32,
    rng: &mut R,
) -> Vec<DecorativeElement> {
    let timing = AnimationTiming::for_speed(speed);
    let elements: Vec<DecorativeElement> = (0..count)
        .map(|index| DecorativeElement {
            index,
            delay_ms: stagger_delay_ms(index),
            text: normalized_random_phrase(rng),
            special: index + 1 == count,
            timing,
        })
        .collect();
    log::debug!(
        "[stage] generated {} elements ({:.0}ms / {:.0}ms)",
        elements.len(),
        timing.horizontal_ms,
        timing.vertical_ms
    );
    elements
}

/// Re-time every element for a new global speed.
pub fn apply_speed(elements: &mut [DecorativeElement], speed: f32) {
    let timing = AnimationTiming::for_speed(speed);
    for el in elements.iter_mut() {
        el.timing = timing;
    }
}
