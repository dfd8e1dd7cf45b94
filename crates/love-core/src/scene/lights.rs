use super::wrap::span;
use crate::color::{hex_rgb, hex_vec3};
use crate::constants::*;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub distance: f32,
}

/// A coloured point light circling the vertical axis.
#[derive(Clone, Debug)]
pub struct OrbitLight {
    pub light: PointLight,
    pub base_angle: f32,
    pub height: f32,
    pub radius: f32,
    pub speed: f32,
}

impl OrbitLight {
    fn spawn<R: Rng + ?Sized>(color: u32, rng: &mut R) -> Self {
        let start = Vec3::new(
            (rng.gen::<f32>() - 0.5) * ORBIT_LIGHT_EXTENT,
            (rng.gen::<f32>() - 0.5) * ORBIT_LIGHT_EXTENT,
            (rng.gen::<f32>() - 0.5) * ORBIT_LIGHT_EXTENT,
        );
        let mut orbit = Self {
            light: PointLight {
                position: start,
                color: hex_rgb(color),
                intensity: ORBIT_LIGHT_INTENSITY,
                distance: ORBIT_LIGHT_DISTANCE,
            },
            base_angle: start.z.atan2(start.x),
            height: start.y,
            radius: span(rng, ORBIT_RADIUS_MIN, ORBIT_RADIUS_SPAN),
            speed: span(rng, 0.005, 0.01),
        };
        orbit.update(0.0);
        orbit
    }

    /// `speed` is radians per reference frame.
    pub fn update(&mut self, time: f32) {
        let angle = self.base_angle + time * self.speed * REFERENCE_FPS;
        self.light.position = Vec3::new(
            angle.cos() * self.radius,
            self.height,
            angle.sin() * self.radius,
        );
    }
}

#[derive(Clone, Debug)]
pub struct LightRig {
    /// colour × intensity
    pub ambient: Vec3,
    /// unit vector from the scene towards the light
    pub directional_dir: Vec3,
    pub directional: Vec3,
    pub heart_light: PointLight,
    pub orbiters: Vec<OrbitLight>,
}

impl LightRig {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            ambient: hex_vec3(AMBIENT_COLOR) * AMBIENT_INTENSITY,
            directional_dir: Vec3::from_array(DIRECTIONAL_POSITION).normalize(),
            directional: hex_vec3(DIRECTIONAL_COLOR) * DIRECTIONAL_INTENSITY,
            heart_light: PointLight {
                position: Vec3::from_array(HEART_POSITION),
                color: hex_rgb(HEART_COLOR),
                intensity: HEART_LIGHT_INTENSITY,
                distance: HEART_LIGHT_DISTANCE,
            },
            orbiters: ORBIT_LIGHT_COLORS
                .iter()
                .map(|&c| OrbitLight::spawn(c, rng))
                .collect(),
        }
    }

    pub fn update(&mut self, time: f32) {
        for o in &mut self.orbiters {
            o.update(time);
        }
    }

    /// Heart light first, then the orbiters.
    pub fn point_lights(&self) -> impl Iterator<Item = &PointLight> + '_ {
        std::iter::once(&self.heart_light).chain(self.orbiters.iter().map(|o| &o.light))
    }
}
