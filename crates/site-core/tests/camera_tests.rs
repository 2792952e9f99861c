// Host-side tests for the pointer-follow camera.

use site_core::{Camera, PointerOffset, FOLLOW_DAMPING, POINTER_PARALLAX};

#[test]
fn follow_converges_to_scaled_pointer_target() {
    let mut cam = Camera::decorative(16.0 / 9.0);
    let pointer = PointerOffset { x: 0.4, y: -0.3 };

    for _ in 0..2000 {
        cam.follow_pointer(pointer);
    }

    assert!((cam.eye.x - pointer.x * POINTER_PARALLAX).abs() < 1e-4);
    assert!((cam.eye.y - -pointer.y * POINTER_PARALLAX).abs() < 1e-4);
    // Depth is never touched by the parallax.
    assert_eq!(cam.eye.z, site_core::CAMERA_Z);
}

#[test]
fn follow_is_a_contraction_without_overshoot() {
    let mut cam = Camera::decorative(1.0);
    let pointer = PointerOffset { x: 0.5, y: 0.0 };
    let target = pointer.x * POINTER_PARALLAX;

    let mut prev_err = (target - cam.eye.x).abs();
    for _ in 0..200 {
        let before = cam.eye.x;
        cam.follow_pointer(pointer);
        // Error shrinks by exactly the damping complement each step.
        let err = (target - cam.eye.x).abs();
        assert!((err - prev_err * (1.0 - FOLLOW_DAMPING)).abs() < 1e-5);
        // Never steps past the target.
        assert!((target - before).signum() == (target - cam.eye.x).signum() || err < 1e-6);
        prev_err = err;
    }
}

#[test]
fn follow_keeps_camera_aimed_at_origin() {
    let mut cam = Camera::decorative(1.0);
    cam.target = glam::Vec3::new(1.0, 2.0, 3.0);
    cam.follow_pointer(PointerOffset { x: 0.1, y: 0.1 });
    assert_eq!(cam.target, glam::Vec3::ZERO);
}

#[test]
fn matrices_are_finite_for_decorative_defaults() {
    let cam = Camera::decorative(1920.0 / 1080.0);
    let vp = cam.view_proj();
    assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    // A point at the origin projects in front of the camera.
    let clip = vp * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
}
