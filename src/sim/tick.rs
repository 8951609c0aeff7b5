//! Per-frame simulation step
//!
//! Advances the sphere field by one variable-length frame: integrate, then
//! sphere-sphere collisions, then sphere-wall collisions. Both collision
//! passes see the positions produced by this frame's integration.

use super::collision::{resolve_sphere_collisions, resolve_wall_collisions};
use super::state::Body;

/// Explicit Euler position update: `position += velocity * dt`
pub fn integrate_positions(bodies: &mut [Body], dt: f32) {
    for body in bodies.iter_mut() {
        body.position += body.velocity * dt;
    }
}

/// Counts of collision responses applied during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub sphere_swaps: usize,
    pub wall_flips: usize,
}

/// Advance the bodies by `dt` seconds inside a cube of edge `cube_size`
///
/// `dt` must be finite and non-negative; it is not checked.
pub fn step(bodies: &mut [Body], cube_size: f32, dt: f32) -> StepReport {
    integrate_positions(bodies, dt);
    let sphere_swaps = resolve_sphere_collisions(bodies);
    let wall_flips = resolve_wall_collisions(bodies, cube_size);
    StepReport {
        sphere_swaps,
        wall_flips,
    }
}
