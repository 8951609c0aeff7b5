//! Sphere field state and spawning
//!
//! Bodies are identified by their index; the collection never grows or
//! shrinks after `SphereField::spawn`.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::tick::{StepReport, step};
use crate::consts::*;

/// A simulated sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub radius: f32,
    /// Render tint, ignored by physics
    pub color: Vec3,
    pub velocity: Vec3,
}

impl Body {
    pub fn new(position: Vec3, radius: f32, velocity: Vec3) -> Self {
        Self {
            position,
            radius,
            color: Vec3::ONE,
            velocity,
        }
    }
}

/// Axis-aligned containment cube centered at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCube {
    /// Edge length
    pub size: f32,
}

impl BoundingCube {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }
}

impl Default for BoundingCube {
    fn default() -> Self {
        Self::new(CUBE_SIZE)
    }
}

/// The sphere collection and the cube it bounces in
#[derive(Debug, Clone)]
pub struct SphereField {
    /// Seed the bodies were spawned from
    pub seed: u64,
    pub cube: BoundingCube,
    pub bodies: Vec<Body>,
}

impl SphereField {
    /// Spawn `count` bodies of the given radius at random positions inside
    /// the cube (kept one radius away from every wall), with random colors
    /// and random velocities in [-1, 1] per axis.
    pub fn spawn(seed: u64, count: usize, cube_size: f32, radius: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let cube = BoundingCube::new(cube_size);
        let max_offset = cube.half_size() - radius;

        let bodies = (0..count)
            .map(|_| {
                let position = random_vec3(&mut rng) * (max_offset * 2.0) - Vec3::splat(max_offset);
                let color = random_vec3(&mut rng);
                let velocity = random_vec3(&mut rng) * 2.0 - Vec3::ONE;
                Body {
                    position,
                    radius,
                    color,
                    velocity,
                }
            })
            .collect();

        Self { seed, cube, bodies }
    }

    /// Spawn with the default count, cube and radius
    pub fn with_seed(seed: u64) -> Self {
        Self::spawn(seed, BODY_COUNT, CUBE_SIZE, BODY_RADIUS)
    }

    /// Advance by one frame
    pub fn step(&mut self, dt: f32) -> StepReport {
        step(&mut self.bodies, self.cube.size, dt)
    }
}

/// Three independent samples from [0, 1)
fn random_vec3(rng: &mut Pcg32) -> Vec3 {
    Vec3::new(rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_count_and_radius() {
        let field = SphereField::with_seed(7);
        assert_eq!(field.bodies.len(), BODY_COUNT);
        assert!(field.bodies.iter().all(|b| b.radius == BODY_RADIUS));
        assert_eq!(field.cube.size, CUBE_SIZE);
    }

    #[test]
    fn test_spawn_inside_cube() {
        let field = SphereField::spawn(42, 200, 2.0, 0.2);
        let limit = 1.0 - 0.2 + 1e-6;
        for body in &field.bodies {
            for axis in 0..3 {
                assert!(body.position[axis].abs() <= limit, "{:?}", body.position);
                assert!(body.velocity[axis] >= -1.0 && body.velocity[axis] <= 1.0);
                assert!(body.color[axis] >= 0.0 && body.color[axis] <= 1.0);
            }
        }
    }

    #[test]
    fn test_spawn_determinism() {
        let a = SphereField::with_seed(99999);
        let b = SphereField::with_seed(99999);
        assert_eq!(a.bodies, b.bodies);

        let c = SphereField::with_seed(12345);
        assert_ne!(a.bodies, c.bodies);
    }

    #[test]
    fn test_half_size() {
        assert_eq!(BoundingCube::new(2.0).half_size(), 1.0);
        assert_eq!(BoundingCube::default().half_size(), CUBE_SIZE / 2.0);
    }
}
