use super::wrap::span;
use crate::color::hsl_to_rgb;
use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// One point sprite as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position_size: [f32; 4],
    pub color: [f32; 4],
}

impl ParticleInstance {
    pub fn new(position: Vec3, size: f32, rgb: [f32; 3]) -> Self {
        Self {
            position_size: [position.x, position.y, position.z, size],
            color: [rgb[0], rgb[1], rgb[2], 1.0],
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.position_size[0],
            self.position_size[1],
            self.position_size[2],
        )
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.position_size[3]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudKind {
    /// Foreground glow: wobbling sprites, sized in screen pixels, faded by depth.
    Glow,
    /// Background spiral field: fixed world-space size.
    Galaxy,
    /// Sprites displaced by live audio amplitude.
    Reactive,
}

impl CloudKind {
    /// Selector read by the particle shader.
    pub fn shader_mode(self) -> f32 {
        match self {
            CloudKind::Glow => 0.0,
            CloudKind::Galaxy => 1.0,
            CloudKind::Reactive => 2.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParticleCloud {
    pub kind: CloudKind,
    pub instances: Vec<ParticleInstance>,
    pub rotation: Vec3,
    pub opacity: f32,
}

impl ParticleCloud {
    /// Glow and galaxy clouds turn slowly; the reactive cloud stays put.
    pub fn spins(&self) -> bool {
        !matches!(self.kind, CloudKind::Reactive)
    }

    pub fn update(&mut self, time: f32) {
        if self.spins() {
            self.rotation.x = time * CLOUD_SPIN_X;
            self.rotation.y = time * CLOUD_SPIN_Y;
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ))
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * extent,
        (rng.gen::<f32>() - 0.5) * extent,
        (rng.gen::<f32>() - 0.5) * extent,
    )
}

pub fn glow_cloud<R: Rng + ?Sized>(count: usize, rng: &mut R) -> ParticleCloud {
    let instances = (0..count)
        .map(|_| {
            let pos = centered(rng, GLOW_EXTENT);
            let rgb = hsl_to_rgb(span(rng, 0.8, 0.2), 0.8, span(rng, 0.6, 0.4));
            ParticleInstance::new(pos, span(rng, 0.5, 2.0), rgb)
        })
        .collect();
    ParticleCloud {
        kind: CloudKind::Glow,
        instances,
        rotation: Vec3::ZERO,
        opacity: 1.0,
    }
}

pub fn galaxy_cloud<R: Rng + ?Sized>(count: usize, rng: &mut R) -> ParticleCloud {
    let instances = (0..count)
        .map(|_| {
            let angle = rng.gen::<f32>() * TAU;
            let radius = span(rng, GALAXY_RADIUS_MIN, GALAXY_RADIUS_SPAN);
            let height = (rng.gen::<f32>() - 0.5) * GALAXY_HEIGHT;
            let pos = Vec3::new(
                angle.cos() * radius,
                height,
                angle.sin() * radius + GALAXY_Z_OFFSET,
            );
            let rgb = hsl_to_rgb(span(rng, 0.6, 0.1), 0.3, span(rng, 0.8, 0.2));
            ParticleInstance::new(pos, GALAXY_POINT_SIZE, rgb)
        })
        .collect();
    ParticleCloud {
        kind: CloudKind::Galaxy,
        instances,
        rotation: Vec3::ZERO,
        opacity: GALAXY_OPACITY,
    }
}

pub fn reactive_cloud<R: Rng + ?Sized>(count: usize, rng: &mut R) -> ParticleCloud {
    let instances = (0..count)
        .map(|_| {
            let pos = centered(rng, REACTIVE_EXTENT);
            let rgb = hsl_to_rgb(span(rng, 0.7, 0.3), 0.9, span(rng, 0.5, 0.5));
            ParticleInstance::new(pos, span(rng, 1.0, 3.0), rgb)
        })
        .collect();
    ParticleCloud {
        kind: CloudKind::Reactive,
        instances,
        rotation: Vec3::ZERO,
        opacity: 1.0,
    }
}
