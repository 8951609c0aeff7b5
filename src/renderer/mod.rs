//! wgpu rendering module
//!
//! Instanced, depth-tested meshes: one draw for all spheres, one for the cube.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::Mesh;
pub use vertex::{Globals, Instance, Vertex};
