//! Stage fitting: keeps the love container centred and sized across viewports.

use crate::constants::*;

/// Coarse device facts read once from the host (user agent, screen, orientation).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceProfile {
    pub is_mobile: bool,
    pub is_iphone: bool,
    pub screen_width: u32,
    pub screen_height: u32,
    pub device_pixel_ratio: f64,
    pub portrait: bool,
}

impl DeviceProfile {
    pub fn from_user_agent(
        user_agent: &str,
        screen_width: u32,
        screen_height: u32,
        device_pixel_ratio: f64,
        portrait: bool,
    ) -> Self {
        Self {
            is_mobile: is_mobile_user_agent(user_agent),
            is_iphone: is_iphone_user_agent(user_agent),
            screen_width,
            screen_height,
            device_pixel_ratio,
            portrait,
        }
    }

    /// Screen dimensions as (short side, long side), independent of rotation.
    #[inline]
    pub fn screen_sides(&self) -> (u32, u32) {
        (
            self.screen_width.min(self.screen_height),
            self.screen_width.max(self.screen_height),
        )
    }

    fn is_iphone_11_like(&self) -> bool {
        self.is_iphone
            && (self.screen_sides() == IPHONE_11_SCREEN
                || self.device_pixel_ratio == IPHONE_11_PIXEL_RATIO)
    }
}

const MOBILE_MARKERS: [&str; 5] = ["mobi", "android", "iphone", "ipad", "ipod"];

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|m| ua.contains(m))
}

pub fn is_iphone_user_agent(user_agent: &str) -> bool {
    user_agent.to_ascii_lowercase().contains("iphone")
}

/// Portrait when the media query says so or the viewport is taller than wide.
#[inline]
pub fn is_portrait(media_query_portrait: bool, inner_width: f64, inner_height: f64) -> bool {
    media_query_portrait || inner_height > inner_width
}

/// Device-class correction applied on top of viewport fitting.
///
/// Rows are evaluated in order and later matches override earlier ones.
pub fn device_scale(profile: &DeviceProfile) -> f32 {
    let mut scale = DEVICE_SCALE_DEFAULT;
    if profile.is_mobile {
        scale = DEVICE_SCALE_MOBILE;
    }
    if profile.is_iphone_11_like() && profile.portrait {
        scale = DEVICE_SCALE_IPHONE_PORTRAIT;
    }
    scale
}

/// Viewport-fit factor for a stage of the given client size.
#[inline]
pub fn base_stage_scale(stage_width: f32, stage_height: f32) -> f32 {
    stage_width.min(stage_height) / STAGE_REFERENCE_SIZE * STAGE_SAFETY_MARGIN
}

/// Final container scale: viewport fit × device class × user multiplier.
pub fn stage_scale(stage_width: f32, stage_height: f32, device: f32, user: f32) -> f32 {
    base_stage_scale(stage_width, stage_height) * device * user
}
