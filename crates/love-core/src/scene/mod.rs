//! The 3D backdrop as plain data.
//!
//! `SceneState` is the composition root created once at startup and owned by
//! the frame driver. Every frame the driver calls [`SceneState::update`] with
//! the elapsed time and the current audio amplitude; the renderer then reads
//! the descriptors back out. Nothing here touches a graphics API.

pub mod camera;
pub mod hearts;
pub mod lights;
pub mod particles;
pub mod trails;
pub mod wrap;

pub use camera::*;
pub use hearts::*;
pub use lights::*;
pub use particles::*;
pub use trails::*;
pub use wrap::*;

use crate::config::ShowConfig;
use crate::constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct SceneState {
    pub time: f32,
    pub amplitude: f32,
    pub glow: ParticleCloud,
    pub galaxy: ParticleCloud,
    pub reactive: ParticleCloud,
    pub heart: CenterHeart,
    pub floating_hearts: Vec<FloatingHeart>,
    pub light_trails: Vec<Trail>,
    pub rainbow_trails: Vec<Trail>,
    pub lights: LightRig,
    pub camera: Camera,
    rng: StdRng,
}

impl SceneState {
    pub fn new(config: &ShowConfig, aspect: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let glow = glow_cloud(config.pick(GLOW_PARTICLES), &mut rng);
        let galaxy = galaxy_cloud(config.pick(GALAXY_PARTICLES), &mut rng);
        let reactive = reactive_cloud(config.pick(REACTIVE_PARTICLES), &mut rng);
        let floating_hearts = (0..config.pick(FLOATING_HEARTS))
            .map(|_| FloatingHeart::spawn(&mut rng))
            .collect();
        let light_trails = (0..config.pick(LIGHT_TRAILS))
            .map(|_| Trail::light(&mut rng))
            .collect();
        let rainbow_trails = (0..config.pick(RAINBOW_TRAILS))
            .map(|_| Trail::rainbow(&mut rng))
            .collect();
        let lights = LightRig::new(&mut rng);
        let scene = Self {
            time: 0.0,
            amplitude: 0.0,
            glow,
            galaxy,
            reactive,
            heart: CenterHeart::default(),
            floating_hearts,
            light_trails,
            rainbow_trails,
            lights,
            camera: Camera::new(aspect),
            rng,
        };
        log::info!(
            "[scene] particles={}/{}/{} hearts={} trails={}+{}",
            scene.glow.len(),
            scene.galaxy.len(),
            scene.reactive.len(),
            scene.floating_hearts.len(),
            scene.light_trails.len(),
            scene.rainbow_trails.len()
        );
        scene
    }

    /// Particle clouds in draw order.
    pub fn clouds(&self) -> [&ParticleCloud; 3] {
        [&self.galaxy, &self.glow, &self.reactive]
    }

    pub fn trails(&self) -> impl Iterator<Item = &Trail> + '_ {
        self.light_trails.iter().chain(self.rainbow_trails.iter())
    }

    /// Advance the clock by `dt_sec` and move every object.
    ///
    /// `amplitude` is the averaged audio level for this frame (0 when
    /// analysis is unavailable); it is stored for the reactive shader only.
    pub fn update(&mut self, dt_sec: f32, amplitude: f32) {
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        self.time += dt;
        self.amplitude = amplitude.clamp(0.0, 1.0);
        let t = self.time;
        let steps = dt * REFERENCE_FPS;

        self.glow.update(t);
        self.galaxy.update(t);
        self.reactive.update(t);
        self.heart.update(t);
        update_floating_hearts(&mut self.floating_hearts, t, steps, &mut self.rng);
        update_trails(&mut self.light_trails, steps, &mut self.rng);
        update_trails(&mut self.rainbow_trails, steps, &mut self.rng);
        self.lights.update(t);
        self.camera.orbit(t);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }
}

pub fn update_floating_hearts(
    hearts: &mut [FloatingHeart],
    time: f32,
    steps: f32,
    rng: &mut StdRng,
) -> usize {
    hearts
        .iter_mut()
        .map(|h| h.step(time, steps, rng))
        .filter(|&wrapped| wrapped)
        .count()
}

/// Returns how many trails wrapped this frame.
pub fn update_trails(trails: &mut [Trail], steps: f32, rng: &mut StdRng) -> usize {
    trails
        .iter_mut()
        .map(|t| t.step(steps, rng))
        .filter(|&wrapped| wrapped)
        .count()
}
