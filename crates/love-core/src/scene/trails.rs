use super::wrap::{random_direction, span, WrapBounds};
use crate::color::hsl_to_rgb;
use crate::constants::*;
use glam::{Mat4, Quat, Vec3};
use rand::Rng;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailKind {
    Light,
    Rainbow,
}

/// A jagged polyline streak drifting through the scene.
#[derive(Clone, Debug)]
pub struct Trail {
    pub kind: TrailKind,
    pub points: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
    pub opacity: f32,
    pub position: Vec3,
    pub rotation_y: f32,
    pub direction: Vec3,
    pub speed: f32,
    pub rotation_speed: f32,
    pub bounds: WrapBounds,
}

fn scatter_points<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * TRAIL_EXTENT,
                (rng.gen::<f32>() - 0.5) * TRAIL_EXTENT,
                (rng.gen::<f32>() - 0.5) * TRAIL_EXTENT,
            )
        })
        .collect()
}

impl Trail {
    pub fn light<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let points = scatter_points(LIGHT_TRAIL_POINTS, rng);
        let colors = (0..LIGHT_TRAIL_POINTS)
            .map(|_| hsl_to_rgb(span(rng, 0.9, 0.1), 0.8, span(rng, 0.6, 0.4)))
            .collect();
        Self {
            kind: TrailKind::Light,
            points,
            colors,
            opacity: LIGHT_TRAIL_OPACITY,
            position: Vec3::ZERO,
            rotation_y: 0.0,
            speed: span(rng, 0.005, 0.01),
            direction: random_direction(rng),
            rotation_speed: 0.0,
            bounds: WrapBounds::cube(LIGHT_TRAIL_WRAP, LIGHT_TRAIL_WRAP),
        }
    }

    pub fn rainbow<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let points = scatter_points(RAINBOW_TRAIL_POINTS, rng);
        let colors = (0..RAINBOW_TRAIL_POINTS)
            .map(|j| hsl_to_rgb(j as f32 / RAINBOW_TRAIL_POINTS as f32, 0.8, 0.6))
            .collect();
        Self {
            kind: TrailKind::Rainbow,
            points,
            colors,
            opacity: RAINBOW_TRAIL_OPACITY,
            position: Vec3::ZERO,
            rotation_y: 0.0,
            speed: span(rng, 0.01, 0.02),
            direction: random_direction(rng),
            rotation_speed: span(rng, 0.005, 0.01),
            bounds: WrapBounds::cube(RAINBOW_TRAIL_WRAP, RAINBOW_TRAIL_WRAP),
        }
    }

    /// Drift by `steps` reference frames. Returns true when the trail wrapped.
    pub fn step<R: Rng + ?Sized>(&mut self, steps: f32, rng: &mut R) -> bool {
        self.position += self.direction * self.speed * steps;
        self.rotation_y += self.rotation_speed * steps;
        self.bounds.wrap(&mut self.position, rng)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.rotation_y), self.position)
    }

    /// Expand the strip into world-space segment pairs for a line-list draw.
    pub fn append_segments(&self, out: &mut Vec<LineVertex>) {
        let model = self.model_matrix();
        let world: Vec<Vec3> = self
            .points
            .iter()
            .map(|p| model.transform_point3(*p))
            .collect();
        let vertex = |i: usize| {
            let c = self.colors[i];
            LineVertex {
                position: world[i].to_array(),
                color: [c[0], c[1], c[2], self.opacity],
            }
        };
        for i in 1..world.len() {
            out.push(vertex(i - 1));
            out.push(vertex(i));
        }
    }

    pub fn segment_vertex_count(&self) -> usize {
        self.points.len().saturating_sub(1) * 2
    }
}
