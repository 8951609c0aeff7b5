//! Cube Bounce - spheres bouncing inside a rotating cube
//!
//! Core modules:
//! - `sim`: Sphere field physics and the independent point-mass bounce
//! - `renderer`: wgpu meshes, pipeline and draw calls
//! - `camera`: Free-fly camera and view/projection matrices
//! - `platform`: Frame timing and keyboard state
//! - `settings`: Display settings loaded from JSON
//! - `app`: winit event loop driving one step and one render per frame

pub mod app;
pub mod camera;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::AppError;
pub use settings::Settings;

/// Fixed configuration constants
pub mod consts {
    /// Number of spheres spawned at startup
    pub const BODY_COUNT: usize = 15;
    /// Edge length of the bounding cube (centered at origin)
    pub const CUBE_SIZE: f32 = 2.0;
    /// Radius shared by every sphere
    pub const BODY_RADIUS: f32 = 0.2;

    /// Point mass ground plane (vertical axis)
    pub const GROUND_LEVEL: f32 = -5.0;
    /// Point mass gravitational acceleration
    pub const GRAVITY: f32 = -9.81;

    /// Camera translation per processed frame while a movement key is held
    pub const CAMERA_SPEED: f32 = 0.001;
    /// Vertical field of view in degrees
    pub const CAMERA_FOV_DEG: f32 = 45.0;
    pub const CAMERA_NEAR: f32 = 0.1;
    pub const CAMERA_FAR: f32 = 100.0;

    /// Latitude/longitude subdivisions of the sphere mesh
    pub const SPHERE_SEGMENTS: u32 = 30;
    /// Spheres are drawn smaller than their collision radius
    pub const SPHERE_DRAW_SCALE: f32 = 0.25;
    /// Sphere spin rate (radians per second)
    pub const SPHERE_SPIN_SPEED: f32 = 1.0;
    /// Axis both the cube and the spheres spin around (normalized at use)
    pub const SPIN_AXIS: [f32; 3] = [0.5, 1.0, 0.0];
    /// Alpha of the translucent cube
    pub const CUBE_ALPHA: f32 = 0.25;

    pub const CLEAR_COLOR: [f64; 3] = [0.2, 0.3, 0.3];
}
