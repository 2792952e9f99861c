// Host-side tests for scene geometry generation and spin state.

use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{
    particle_positions, torus_wireframe, SceneSpin, PARTICLE_COUNT, PARTICLE_SPIN_X,
    PARTICLE_SPIN_Y, PARTICLE_SPREAD, TORUS_RADIAL_SEGMENTS, TORUS_RADIUS, TORUS_SPIN_Y,
    TORUS_SPIN_Z, TORUS_TUBE, TORUS_TUBULAR_SEGMENTS,
};

#[test]
fn particle_buffer_length_follows_point_count() {
    let mut rng = StdRng::seed_from_u64(7);
    let data = particle_positions(PARTICLE_COUNT, PARTICLE_SPREAD, &mut rng);
    assert_eq!(data.len(), PARTICLE_COUNT * 3);
}

#[test]
fn particles_stay_inside_the_spawn_cube() {
    let mut rng = StdRng::seed_from_u64(42);
    let half = PARTICLE_SPREAD / 2.0;
    for v in particle_positions(PARTICLE_COUNT, PARTICLE_SPREAD, &mut rng) {
        assert!(v >= -half && v <= half);
    }
}

#[test]
fn particles_are_not_degenerate() {
    // A constant buffer would render as a single dot; make sure the spread
    // actually spreads.
    let mut rng = StdRng::seed_from_u64(1);
    let data = particle_positions(64, 10.0, &mut rng);
    let min = data.iter().cloned().fold(f32::MAX, f32::min);
    let max = data.iter().cloned().fold(f32::MIN, f32::max);
    assert!(max - min > 1.0);
}

#[test]
fn torus_wireframe_segment_count() {
    let lines = torus_wireframe(
        TORUS_RADIUS,
        TORUS_TUBE,
        TORUS_RADIAL_SEGMENTS,
        TORUS_TUBULAR_SEGMENTS,
    );
    // Two segments per lattice point, two endpoints per segment.
    let expected = (TORUS_RADIAL_SEGMENTS * TORUS_TUBULAR_SEGMENTS * 4) as usize;
    assert_eq!(lines.len(), expected);
    assert_eq!(lines.len() % 2, 0);
}

#[test]
fn torus_vertices_satisfy_the_torus_equation() {
    for [x, y, z] in torus_wireframe(3.0, 0.5, 16, 100) {
        let ring = (x * x + y * y).sqrt() - 3.0;
        let r = (ring * ring + z * z).sqrt();
        assert!((r - 0.5).abs() < 1e-4, "vertex off the tube surface: r={r}");
    }
}

#[test]
fn spin_advances_by_fixed_increments() {
    let mut spin = SceneSpin::default();
    for _ in 0..10 {
        spin.advance();
    }
    assert!((spin.particles.y - 10.0 * PARTICLE_SPIN_Y).abs() < 1e-6);
    assert!((spin.particles.x - 10.0 * PARTICLE_SPIN_X).abs() < 1e-6);
    assert!((spin.torus.z - 10.0 * TORUS_SPIN_Z).abs() < 1e-6);
    assert!((spin.torus.y - 10.0 * TORUS_SPIN_Y).abs() < 1e-6);
    // Axes the scene never rotates around stay put.
    assert_eq!(spin.particles.z, 0.0);
    assert_eq!(spin.torus.x, 0.0);
}

#[test]
fn spin_model_matrices_are_rotations() {
    let mut spin = SceneSpin::default();
    for _ in 0..500 {
        spin.advance();
    }
    for m in [spin.particle_model(), spin.torus_model()] {
        // Rotation matrices preserve length.
        let v = m.transform_vector3(glam::Vec3::X);
        assert!((v.length() - 1.0).abs() < 1e-5);
    }
}
