// Shared tuning constants for the love stage and the 3D backdrop.

// ---------------- Love stage ----------------
pub const DEFAULT_ELEMENT_COUNT: usize = 100;
pub const DEFAULT_SPEED: f32 = 1.0;
pub const DEFAULT_USER_SCALE: f32 = 0.75;

// Animation timings (milliseconds at speed 1.0)
pub const HORIZONTAL_BASE_MS: f32 = 10_000.0;
pub const VERTICAL_BASE_MS: f32 = 20_000.0;
pub const STAGGER_STEP_MS: f32 = 300.0; // delay = -(index * step)

// Display width of every phrase, in codepoints
pub const PHRASE_WIDTH: usize = 14;
pub const PHRASE_FILLER: char = '\u{00A0}';

// Stage fitting
pub const STAGE_REFERENCE_SIZE: f32 = 900.0;
pub const STAGE_SAFETY_MARGIN: f32 = 0.95;

// Device-class multipliers
pub const DEVICE_SCALE_DEFAULT: f32 = 1.0;
pub const DEVICE_SCALE_MOBILE: f32 = 0.9;
pub const DEVICE_SCALE_IPHONE_PORTRAIT: f32 = 0.8;
pub const IPHONE_11_SCREEN: (u32, u32) = (414, 896); // short side, long side
pub const IPHONE_11_PIXEL_RATIO: f64 = 2.0;

// Star field
pub const STARS_DESKTOP: usize = 500;
pub const STARS_MOBILE: usize = 250;
pub const SHOOTING_STARS_DESKTOP: usize = 3;
pub const SHOOTING_STARS_MOBILE: usize = 1;
pub const STAR_DELAY_MAX_SEC: f32 = 3.0;
pub const SHOOTING_STAR_DELAY_MAX_SEC: f32 = 4.0;

// ---------------- Audio ----------------
pub const DEFAULT_VOLUME: f64 = 0.7;
pub const FIRST_TRACK_KEY: &str = "xinloi";
pub const ANALYSER_FFT_SIZE: u32 = 256;

// ---------------- 3D scene ----------------
// Motion increments are authored per frame at this rate.
pub const REFERENCE_FPS: f32 = 60.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_ORBIT_X: (f32, f32) = (2.0, 0.2); // amplitude, angular rate
pub const CAMERA_ORBIT_Y: (f32, f32) = (1.0, 0.3);

// Fog (linear, black)
pub const FOG_NEAR: f32 = 1.0;
pub const FOG_FAR: f32 = 50.0;

// Particle clouds: (desktop, mobile)
pub const GLOW_PARTICLES: (usize, usize) = (1000, 500);
pub const GALAXY_PARTICLES: (usize, usize) = (400, 200);
pub const REACTIVE_PARTICLES: (usize, usize) = (200, 100);
pub const GLOW_EXTENT: f32 = 20.0;
pub const REACTIVE_EXTENT: f32 = 10.0;
pub const GALAXY_RADIUS_MIN: f32 = 5.0;
pub const GALAXY_RADIUS_SPAN: f32 = 15.0;
pub const GALAXY_HEIGHT: f32 = 2.0;
pub const GALAXY_Z_OFFSET: f32 = -10.0;
pub const GALAXY_POINT_SIZE: f32 = 0.1;
pub const GALAXY_OPACITY: f32 = 0.8;
pub const CLOUD_SPIN_Y: f32 = 0.1; // rad/s
pub const CLOUD_SPIN_X: f32 = 0.05;

// Hearts
pub const HEART_DEPTH: f32 = 0.2;
pub const HEART_CURVE_SEGMENTS: usize = 16;
pub const HEART_POSITION: [f32; 3] = [0.0, 0.0, 2.0];
pub const HEART_BASE_SCALE: f32 = 0.5;
pub const HEART_PULSE: f32 = 0.05;
pub const HEART_SPIN_Y: f32 = 0.5;
pub const HEART_WOBBLE_Z: f32 = 0.1;
pub const HEART_COLOR: u32 = 0xff69b4;
pub const HEART_EMISSIVE: u32 = 0xff1493;
pub const HEART_EMISSIVE_INTENSITY: f32 = 0.3;
pub const HEART_SHININESS: f32 = 100.0;
pub const HEART_OPACITY: f32 = 0.9;
pub const HEART_LIGHT_INTENSITY: f32 = 1.0;
pub const HEART_LIGHT_DISTANCE: f32 = 10.0;

pub const FLOATING_HEARTS: (usize, usize) = (10, 5);
pub const FLOATING_HEART_SHAPE_SCALE: f32 = 0.5; // floating hearts use a half-size outline
pub const FLOATING_HEART_SCALE: f32 = 0.3;
pub const FLOATING_HEART_COLOR: u32 = 0xff1493;
pub const FLOATING_HEART_EMISSIVE: u32 = 0xff69b4;
pub const FLOATING_HEART_EMISSIVE_INTENSITY: f32 = 0.2;
pub const FLOATING_HEART_SHININESS: f32 = 30.0;
pub const FLOATING_HEART_OPACITY: f32 = 0.7;
pub const FLOATING_HEART_SPAWN: [f32; 3] = [15.0, 10.0, 10.0];
pub const FLOATING_HEART_SPAWN_Z_OFFSET: f32 = -5.0;
pub const FLOATING_HEART_WRAP: f32 = 20.0;
pub const FLOAT_BOB_Y: f32 = 0.01;
pub const FLOAT_BOB_X: f32 = 0.005;
pub const FLOAT_BOB_X_RATE: f32 = 0.7;

// Trails
pub const LIGHT_TRAILS: (usize, usize) = (6, 3);
pub const LIGHT_TRAIL_POINTS: usize = 50;
pub const LIGHT_TRAIL_OPACITY: f32 = 0.3;
pub const LIGHT_TRAIL_WRAP: f32 = 20.0;
pub const RAINBOW_TRAILS: (usize, usize) = (4, 2);
pub const RAINBOW_TRAIL_POINTS: usize = 100;
pub const RAINBOW_TRAIL_OPACITY: f32 = 0.6;
pub const RAINBOW_TRAIL_WRAP: f32 = 25.0;
pub const TRAIL_EXTENT: f32 = 20.0;

// Lights
pub const AMBIENT_COLOR: u32 = 0x404040;
pub const AMBIENT_INTENSITY: f32 = 0.3;
pub const DIRECTIONAL_COLOR: u32 = 0xff69b4;
pub const DIRECTIONAL_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const ORBIT_LIGHT_COLORS: [u32; 4] = [0xff1493, 0xff69b4, 0xffb6c1, 0xffc0cb];
pub const ORBIT_LIGHT_INTENSITY: f32 = 0.3;
pub const ORBIT_LIGHT_DISTANCE: f32 = 20.0;
pub const ORBIT_LIGHT_EXTENT: f32 = 20.0;
pub const ORBIT_RADIUS_MIN: f32 = 10.0;
pub const ORBIT_RADIUS_SPAN: f32 = 10.0;
pub const MAX_POINT_LIGHTS: usize = 5; // heart light + orbiters

// Bloom
pub const BLOOM_STRENGTH: f32 = 0.5;
pub const BLOOM_RADIUS: f32 = 0.4;
pub const BLOOM_THRESHOLD: f32 = 0.85;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;
