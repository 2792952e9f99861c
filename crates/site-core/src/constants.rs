// Shared tuning constants for the decorative background and the camera.

// Particle field
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_SPREAD: f32 = 15.0; // edge of the spawn cube, centered on origin
pub const PARTICLE_SIZE: f32 = 0.012; // world-space quad size
pub const PARTICLE_OPACITY: f32 = 0.4;

// Torus
pub const TORUS_RADIUS: f32 = 3.0;
pub const TORUS_TUBE: f32 = 0.5;
pub const TORUS_RADIAL_SEGMENTS: u32 = 16;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 100;
pub const TORUS_OPACITY: f32 = 0.06;

// Per-frame spin increments (radians)
pub const PARTICLE_SPIN_Y: f32 = 0.0004;
pub const PARTICLE_SPIN_X: f32 = 0.0002;
pub const TORUS_SPIN_Z: f32 = 0.001;
pub const TORUS_SPIN_Y: f32 = 0.0005;

// Accent color, #4facfe
pub const ACCENT_COLOR: [f32; 3] = [79.0 / 255.0, 172.0 / 255.0, 254.0 / 255.0];

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;
pub const POINTER_PARALLAX: f32 = 1.5; // pointer offset -> world-space camera target
pub const FOLLOW_DAMPING: f32 = 0.05; // per-frame exponential smoothing factor

// Display
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const CLEAR_COLOR: [f64; 4] = [0.02, 0.027, 0.059, 1.0];
