// DOM contract with the host page.

// Element ids
pub const STAGE_ID: &str = "stage";
pub const CONTAINER_ID: &str = "ui";
pub const STARS_ID: &str = "stars-container";
pub const CANVAS_ID: &str = "threejs-canvas";
pub const AUDIO_ID: &str = "bg-audio";
pub const SOUND_OVERLAY_ID: &str = "sound-overlay";
pub const NEXT_TRACK_ID: &str = "next-track";
pub const MUSIC_TOGGLE_ID: &str = "music-toggle";

// Class names
pub const LOVE_CLASS: &str = "love";
pub const HORIZONTAL_CLASS: &str = "love_horizontal";
pub const VERTICAL_CLASS: &str = "love_vertical";
pub const WORD_CLASS: &str = "love_word";
pub const SPECIAL_CLASS: &str = "special";
pub const OVERLAY_SHOW_CLASS: &str = "show";

// Media query used for the portrait check
pub const PORTRAIT_QUERY: &str = "(orientation: portrait)";

// Page events that re-run stage fitting
pub const LAYOUT_EVENTS: [&str; 2] = ["resize", "orientationchange"];

// Page events that count as a user gesture for blocked autoplay
pub const GESTURE_EVENTS: [&str; 2] = ["click", "touchstart"];

// Keyboard speed control
pub const SPEED_STEP: f32 = 1.25;
pub const SPEED_MIN: f32 = 0.25;
pub const SPEED_MAX: f32 = 4.0;
