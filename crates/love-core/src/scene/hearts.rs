//! Heart meshes: the extruded outline, the pulsing centrepiece and the
//! small floating hearts.

use super::wrap::{span, WrapBounds};
use crate::color::hex_rgb;
use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::Rng;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Per-instance data for the heart pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshInstance {
    pub model: [[f32; 4]; 4],
    /// rgb + opacity
    pub color: [f32; 4],
    /// emissive rgb (pre-multiplied by intensity) + shininess
    pub emissive: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub shininess: f32,
    pub opacity: f32,
}

impl Material {
    pub fn instance(&self, model: Mat4) -> MeshInstance {
        let e = self.emissive_intensity;
        MeshInstance {
            model: model.to_cols_array_2d(),
            color: [self.color[0], self.color[1], self.color[2], self.opacity],
            emissive: [
                self.emissive[0] * e,
                self.emissive[1] * e,
                self.emissive[2] * e,
                self.shininess,
            ],
        }
    }
}

pub fn center_heart_material() -> Material {
    Material {
        color: hex_rgb(HEART_COLOR),
        emissive: hex_rgb(HEART_EMISSIVE),
        emissive_intensity: HEART_EMISSIVE_INTENSITY,
        shininess: HEART_SHININESS,
        opacity: HEART_OPACITY,
    }
}

pub fn floating_heart_material() -> Material {
    Material {
        color: hex_rgb(FLOATING_HEART_COLOR),
        emissive: hex_rgb(FLOATING_HEART_EMISSIVE),
        emissive_intensity: FLOATING_HEART_EMISSIVE_INTENSITY,
        shininess: FLOATING_HEART_SHININESS,
        opacity: FLOATING_HEART_OPACITY,
    }
}

// ---------------- Geometry ----------------

#[inline]
fn cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Flattened outline of both lobes. Each lobe is a closed loop that starts
/// and ends at the origin (the last point is not repeated).
pub fn heart_outline(segments: usize) -> [Vec<Vec2>; 2] {
    let segments = segments.max(2);
    let lobe = |side: f32| -> Vec<Vec2> {
        let curves = [
            [
                Vec2::ZERO,
                Vec2::new(0.0, 1.0),
                Vec2::new(side, 1.5),
                Vec2::new(side, 0.5),
            ],
            [
                Vec2::new(side, 0.5),
                Vec2::new(side, -0.5),
                Vec2::new(0.0, -1.0),
                Vec2::ZERO,
            ],
        ];
        let mut pts = Vec::with_capacity(segments * 2);
        for c in &curves {
            for i in 0..segments {
                let t = i as f32 / segments as f32;
                pts.push(cubic(c[0], c[1], c[2], c[3], t));
            }
        }
        pts
    };
    [lobe(-1.0), lobe(1.0)]
}

/// Signed area (positive for counter-clockwise loops).
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f32>()
        * 0.5
}

#[derive(Clone, Debug, Default)]
pub struct HeartGeometry {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

impl HeartGeometry {
    fn push(&mut self, p: Vec3, n: Vec3) -> u16 {
        self.vertices.push(MeshVertex {
            position: p.to_array(),
            normal: n.to_array(),
        });
        (self.vertices.len() - 1) as u16
    }

    /// Fan-triangulated caps at z = 0 and z = depth plus flat-shaded walls.
    fn extrude_loop(&mut self, loop_pts: &[Vec2], depth: f32) {
        let mut pts = loop_pts.to_vec();
        if signed_area(&pts) < 0.0 {
            pts.reverse();
        }
        let n = pts.len();
        let centroid = pts.iter().copied().sum::<Vec2>() / n as f32;

        for (z, normal, front) in [(depth, Vec3::Z, true), (0.0, Vec3::NEG_Z, false)] {
            let c = self.push(centroid.extend(z), normal);
            let first = self.vertices.len() as u16;
            for p in &pts {
                self.push(p.extend(z), normal);
            }
            for i in 0..n as u16 {
                let a = first + i;
                let b = first + (i + 1) % n as u16;
                if front {
                    self.indices.extend_from_slice(&[c, a, b]);
                } else {
                    self.indices.extend_from_slice(&[c, b, a]);
                }
            }
        }

        for i in 0..n {
            let a = pts[i];
            let b = pts[(i + 1) % n];
            let d = b - a;
            let normal = Vec3::new(d.y, -d.x, 0.0).normalize_or_zero();
            let a0 = self.push(a.extend(0.0), normal);
            let b0 = self.push(b.extend(0.0), normal);
            let b1 = self.push(b.extend(depth), normal);
            let a1 = self.push(a.extend(depth), normal);
            self.indices.extend_from_slice(&[a0, b0, b1, a0, b1, a1]);
        }
    }
}

pub fn heart_geometry(depth: f32, segments: usize) -> HeartGeometry {
    let mut geo = HeartGeometry::default();
    for lobe in heart_outline(segments).iter() {
        geo.extrude_loop(lobe, depth);
    }
    log::debug!(
        "[scene] heart mesh: {} vertices, {} triangles",
        geo.vertices.len(),
        geo.indices.len() / 3
    );
    geo
}

#[inline]
fn trs(position: Vec3, rotation: Vec3, scale: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(scale),
        Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z),
        position,
    )
}

// ---------------- Centrepiece ----------------

#[derive(Clone, Debug)]
pub struct CenterHeart {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for CenterHeart {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(HEART_POSITION),
            rotation: Vec3::ZERO,
            scale: HEART_BASE_SCALE,
        }
    }
}

impl CenterHeart {
    pub fn update(&mut self, time: f32) {
        self.rotation.y = time * HEART_SPIN_Y;
        self.rotation.z = time.sin() * HEART_WOBBLE_Z;
        self.scale = HEART_BASE_SCALE + (time * 2.0).sin() * HEART_PULSE;
    }

    pub fn instance(&self) -> MeshInstance {
        center_heart_material().instance(trs(self.position, self.rotation, self.scale))
    }
}

// ---------------- Floating hearts ----------------

#[derive(Clone, Debug)]
pub struct FloatingHeart {
    pub position: Vec3,
    pub rotation: Vec3,
    pub speed: f32,
    pub rotation_speed: f32,
    pub float_speed: f32,
}

pub fn floating_heart_bounds() -> WrapBounds {
    WrapBounds {
        threshold: FLOATING_HEART_WRAP,
        extent: Vec3::from_array(FLOATING_HEART_SPAWN),
        center: Vec3::new(0.0, 0.0, FLOATING_HEART_SPAWN_Z_OFFSET),
    }
}

impl FloatingHeart {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            position: floating_heart_bounds().sample(rng),
            rotation: Vec3::ZERO,
            speed: span(rng, 0.01, 0.02),
            rotation_speed: span(rng, 0.01, 0.02),
            float_speed: span(rng, 0.005, 0.01),
        }
    }

    /// Advance by `steps` reference frames at clock `time`.
    pub fn step<R: Rng + ?Sized>(&mut self, time: f32, steps: f32, rng: &mut R) -> bool {
        self.rotation.y += self.rotation_speed * steps;
        self.rotation.z += self.speed * steps;
        self.position.y += (time * self.float_speed).sin() * FLOAT_BOB_Y * steps;
        self.position.x += (time * self.float_speed * FLOAT_BOB_X_RATE).cos() * FLOAT_BOB_X * steps;
        floating_heart_bounds().wrap(&mut self.position, rng)
    }

    pub fn instance(&self) -> MeshInstance {
        floating_heart_material().instance(trs(
            self.position,
            self.rotation,
            FLOATING_HEART_SCALE * FLOATING_HEART_SHAPE_SCALE,
        ))
    }
}
