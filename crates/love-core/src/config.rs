//! Startup configuration for the love stage.
//!
//! Values are fixed for the lifetime of a page load apart from `speed`,
//! which the stage can change at runtime through the validated setter below.

use crate::constants::{DEFAULT_ELEMENT_COUNT, DEFAULT_SPEED, DEFAULT_USER_SCALE};
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct ShowConfig {
    element_count: usize,
    speed: f32,
    user_scale: f32,
    pub is_mobile: bool,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            element_count: DEFAULT_ELEMENT_COUNT,
            speed: DEFAULT_SPEED,
            user_scale: DEFAULT_USER_SCALE,
            is_mobile: false,
        }
    }
}

impl ShowConfig {
    pub fn new(element_count: usize, is_mobile: bool) -> Result<Self, ConfigError> {
        if element_count == 0 {
            return Err(ConfigError::EmptyStage);
        }
        Ok(Self {
            element_count,
            is_mobile,
            ..Self::default()
        })
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn user_scale(&self) -> f32 {
        self.user_scale
    }

    pub fn set_speed(&mut self, speed: f32) -> Result<(), ConfigError> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    /// Pick the desktop or mobile variant of a `(desktop, mobile)` count pair.
    #[inline]
    pub fn pick(&self, counts: (usize, usize)) -> usize {
        if self.is_mobile {
            counts.1
        } else {
            counts.0
        }
    }
}
