//! Mesh generation for 3D primitives

use std::f32::consts::{PI, TAU};

use super::vertex::Vertex;

/// Indexed triangle list
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Latitude/longitude sphere centered at the origin
///
/// `segments` rings from pole to pole and `segments` slices around the
/// z axis; the seam column is duplicated.
pub fn uv_sphere(radius: f32, segments: u32) -> Mesh {
    let segments = segments.max(3);
    let stride = segments + 1;
    let mut vertices = Vec::with_capacity((stride * stride) as usize);

    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * PI;
        for j in 0..=segments {
            let phi = j as f32 / segments as f32 * TAU;
            let normal = [theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos()];
            let position = normal.map(|n| n * radius);
            vertices.push(Vertex::new(position, normal));
        }
    }

    let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
    for i in 0..segments {
        for j in 0..segments {
            let a = i * stride + j;
            let b = a + stride;
            // Two triangles per quad
            indices.extend_from_slice(&[a, b, a + 1]);
            indices.extend_from_slice(&[a + 1, b, b + 1]);
        }
    }

    Mesh { vertices, indices }
}

/// Unit cube with corners at +-0.5
pub fn unit_cube() -> Mesh {
    const CORNERS: [[f32; 3]; 8] = [
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
    ];
    #[rustfmt::skip]
    const INDICES: [u32; 36] = [
        0, 1, 2, 2, 3, 0, // back
        4, 5, 6, 6, 7, 4, // front
        4, 5, 1, 1, 0, 4, // bottom
        7, 6, 2, 2, 3, 7, // top
        4, 0, 3, 3, 7, 4, // left
        5, 1, 2, 2, 6, 5, // right
    ];

    let vertices = CORNERS
        .iter()
        .map(|&c| {
            let len = (c[0] * c[0] + c[1] * c[1] + c[2] * c[2]).sqrt();
            Vertex::new(c, c.map(|v| v / len))
        })
        .collect();

    Mesh {
        vertices,
        indices: INDICES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_counts() {
        let mesh = uv_sphere(1.0, 30);
        assert_eq!(mesh.vertices.len(), 31 * 31);
        assert_eq!(mesh.index_count(), 30 * 30 * 6);
    }

    #[test]
    fn test_sphere_indices_in_range() {
        let mesh = uv_sphere(1.0, 12);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let mesh = uv_sphere(2.5, 16);
        for v in &mesh.vertices {
            let [x, y, z] = v.position;
            assert!(((x * x + y * y + z * z).sqrt() - 2.5).abs() < 1e-4);
            let [nx, ny, nz] = v.normal;
            assert!(((nx * nx + ny * ny + nz * nz).sqrt() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cube_mesh() {
        let mesh = unit_cube();
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.index_count(), 36);
        assert!(mesh.indices.iter().all(|&i| i < 8));
        assert!(
            mesh.vertices
                .iter()
                .all(|v| v.position.iter().all(|c| c.abs() == 0.5))
        );
    }
}
