pub mod audio;
pub mod color;
pub mod config;
pub mod constants;
pub mod elements;
pub mod error;
pub mod layout;
pub mod phrases;
pub mod player;
pub mod playlist;
pub mod scene;
pub mod stars;

pub use audio::*;
pub use config::*;
pub use elements::*;
pub use error::*;
pub use layout::*;
pub use phrases::*;
pub use player::*;
pub use playlist::*;
pub use stars::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");
