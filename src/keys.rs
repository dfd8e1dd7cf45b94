use crate::constants::{SPEED_MAX, SPEED_MIN, SPEED_STEP};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageAction {
    TogglePause,
    Faster,
    Slower,
    Reset,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<StageAction> {
    match key {
        " " | "Spacebar" => Some(StageAction::TogglePause),
        "+" | "=" | "ArrowUp" => Some(StageAction::Faster),
        "-" | "_" | "ArrowDown" => Some(StageAction::Slower),
        "r" | "R" => Some(StageAction::Reset),
        _ => None,
    }
}

/// One multiplicative speed step, kept inside the supported range.
#[inline]
pub fn stepped_speed(current: f32, faster: bool) -> f32 {
    let next = if faster {
        current * SPEED_STEP
    } else {
        current / SPEED_STEP
    };
    next.clamp(SPEED_MIN, SPEED_MAX)
}
