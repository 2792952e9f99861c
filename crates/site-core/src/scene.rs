//! Geometry generation and spin state for the background scene.

use crate::constants::{
    PARTICLE_SPIN_X, PARTICLE_SPIN_Y, TORUS_SPIN_Y, TORUS_SPIN_Z,
};
use glam::{EulerRot, Mat4, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Flat xyz position buffer: `count` points uniform in a cube of edge
/// `spread` centered on the origin.
pub fn particle_positions(count: usize, spread: f32, rng: &mut impl Rng) -> Vec<f32> {
    let mut data = Vec::with_capacity(count * 3);
    for _ in 0..count * 3 {
        data.push((rng.gen::<f32>() - 0.5) * spread);
    }
    data
}

/// Wireframe torus as a line list: per lattice point, one segment along the
/// major ring and one around the tube, so `2 * radial * tubular` segments.
pub fn torus_wireframe(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> Vec<[f32; 3]> {
    let point = |u_idx: u32, v_idx: u32| -> [f32; 3] {
        let u = u_idx as f32 / tubular_segments as f32 * TAU;
        let v = v_idx as f32 / radial_segments as f32 * TAU;
        let ring = radius + tube * v.cos();
        [ring * u.cos(), ring * u.sin(), tube * v.sin()]
    };
    let mut lines = Vec::with_capacity((tubular_segments * radial_segments * 4) as usize);
    for u in 0..tubular_segments {
        for v in 0..radial_segments {
            lines.push(point(u, v));
            lines.push(point(u + 1, v));
            lines.push(point(u, v));
            lines.push(point(u, v + 1));
        }
    }
    lines
}

/// Accumulated rotation of the two scene objects.
#[derive(Default, Clone, Copy, Debug)]
pub struct SceneSpin {
    pub particles: Vec3,
    pub torus: Vec3,
}

impl SceneSpin {
    pub fn advance(&mut self) {
        self.particles.y += PARTICLE_SPIN_Y;
        self.particles.x += PARTICLE_SPIN_X;
        self.torus.z += TORUS_SPIN_Z;
        self.torus.y += TORUS_SPIN_Y;
    }

    pub fn particle_model(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.particles.x,
            self.particles.y,
            self.particles.z,
        )
    }

    pub fn torus_model(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.torus.x, self.torus.y, self.torus.z)
    }
}
