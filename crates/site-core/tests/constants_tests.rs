// Host-side sanity checks on the shared tuning constants.

use site_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_within_reasonable_bounds() {
    assert!(FOLLOW_DAMPING > 0.0 && FOLLOW_DAMPING < 1.0);
    assert!(POINTER_PARALLAX > 0.0);
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_Z > CAMERA_NEAR && CAMERA_Z < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_positive() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_SPREAD > 0.0);
    assert!(PARTICLE_SIZE > 0.0);
    assert!(TORUS_RADIUS > 0.0);
    assert!(TORUS_TUBE > 0.0);
    assert!(TORUS_TUBE < TORUS_RADIUS);
    assert!(TORUS_RADIAL_SEGMENTS > 0);
    assert!(TORUS_TUBULAR_SEGMENTS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_and_colors_are_normalized() {
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
    assert!(TORUS_OPACITY > 0.0 && TORUS_OPACITY <= 1.0);
    for c in ACCENT_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
    for c in CLEAR_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spin_increments_are_small_and_positive() {
    for inc in [PARTICLE_SPIN_X, PARTICLE_SPIN_Y, TORUS_SPIN_Y, TORUS_SPIN_Z] {
        assert!(inc > 0.0);
        assert!(inc < 0.1, "per-frame increments should be subtle");
    }
}
