//! GPU vertex, instance and uniform types (must match shader.wgsl)

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

use crate::consts::*;
use crate::sim::{Body, BoundingCube};

/// Mesh vertex with position and normal
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Per-instance model matrix and tint
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl Instance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Instance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }

    pub fn new(model: Mat4, color: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
        }
    }

    /// A sphere drawn at its body's position, spinning with time and shrunk
    /// to `SPHERE_DRAW_SCALE` of its collision radius
    pub fn sphere(body: &Body, elapsed: f32) -> Self {
        let model = Mat4::from_translation(body.position)
            * Mat4::from_quat(spin(elapsed * SPHERE_SPIN_SPEED))
            * Mat4::from_scale(Vec3::splat(body.radius * SPHERE_DRAW_SCALE));
        Self::new(model, body.color.extend(1.0).to_array())
    }

    /// The translucent cube, spinning about `SPIN_AXIS` at one radian per second
    pub fn cube(cube: &BoundingCube, elapsed: f32) -> Self {
        let model = Mat4::from_quat(spin(elapsed)) * Mat4::from_scale(Vec3::splat(cube.size));
        Self::new(model, [1.0, 1.0, 1.0, CUBE_ALPHA])
    }
}

fn spin(angle: f32) -> Quat {
    Quat::from_axis_angle(Vec3::from_array(SPIN_AXIS).normalize(), angle)
}

/// Per-frame uniforms
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    /// Direction light travels in (xyz), w unused
    pub light_dir: [f32; 4],
}

impl Globals {
    pub fn new(view_proj: Mat4) -> Self {
        let light = Vec3::new(-0.3, -1.0, -0.5).normalize();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light_dir: light.extend(0.0).to_array(),
        }
    }
}
