//! Simulation module
//!
//! Everything here is plain arithmetic over in-memory state:
//! - No rendering or platform dependencies
//! - Seeded RNG only (spawning)
//! - Stable iteration order (by body index)

pub mod collision;
pub mod point_mass;
pub mod state;
pub mod tick;

pub use collision::{resolve_sphere_collisions, resolve_wall_collisions, spheres_overlap, wall_contact};
pub use point_mass::PointMass;
pub use state::{Body, BoundingCube, SphereField};
pub use tick::{StepReport, integrate_positions, step};
