//! Right-handed perspective camera with a damped pointer-follow update.

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_Z, FOLLOW_DAMPING, POINTER_PARALLAX,
};
use crate::input::PointerOffset;
use glam::{Mat4, Vec3};

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
    /// Camera for the decorative background, aimed at the origin.
    pub fn decorative(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-6), self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// One damped step toward `(x * parallax, -y * parallax)`. Repeated
    /// steps are a contraction: the remaining error shrinks by
    /// `1 - FOLLOW_DAMPING` each call and never changes sign.
    pub fn follow_pointer(&mut self, pointer: PointerOffset) {
        let tx = pointer.x * POINTER_PARALLAX;
        let ty = -pointer.y * POINTER_PARALLAX;
        self.eye.x += (tx - self.eye.x) * FOLLOW_DAMPING;
        self.eye.y += (ty - self.eye.y) * FOLLOW_DAMPING;
        self.target = Vec3::ZERO;
    }
}
