use crate::constants::*;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Fixed sinusoidal orbit, always looking at the origin.
    pub fn orbit(&mut self, time: f32) {
        self.eye = orbit_eye(time);
        self.target = Vec3::ZERO;
    }
}

#[inline]
pub fn orbit_eye(time: f32) -> Vec3 {
    Vec3::new(
        (time * CAMERA_ORBIT_X.1).sin() * CAMERA_ORBIT_X.0,
        (time * CAMERA_ORBIT_Y.1).cos() * CAMERA_ORBIT_Y.0,
        CAMERA_Z,
    )
}
