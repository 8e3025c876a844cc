//! GPU-ready packing of a [`SurfaceMesh`].

use atorus_math::{Point2, Vector3};
use bytemuck::{Pod, Zeroable};

use crate::mesh::SurfaceMesh;

/// Separate `f32` attribute arrays, one buffer per attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// 3 floats per vertex.
    pub positions: Vec<f32>,
    /// 3 floats per vertex.
    pub normals: Vec<f32>,
    /// 2 floats per vertex.
    pub uvs: Vec<f32>,
    /// 3 floats per vertex.
    pub tangents: Vec<f32>,
    /// 3 indices per triangle.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Vertex with f32 data packed for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub tangent: [f32; 3],
}

impl GpuVertex {
    pub fn new(position: Vector3, normal: Vector3, uv: Point2, tangent: Vector3) -> Self {
        Self {
            position: position.as_vec3().to_array(),
            normal: normal.as_vec3().to_array(),
            uv: uv.as_vec2().to_array(),
            tangent: tangent.as_vec3().to_array(),
        }
    }
}

/// Interleaved vertices plus indices, ready for a single vertex buffer upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterleavedMesh {
    pub vertices: Vec<GpuVertex>,
    pub indices: Vec<u32>,
}

impl InterleavedMesh {
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl SurfaceMesh {
    /// Flatten every attribute to `f32` arrays.
    pub fn to_buffers(&self) -> MeshBuffers {
        MeshBuffers {
            positions: flatten3(&self.positions),
            normals: flatten3(&self.normals),
            uvs: self
                .uvs
                .iter()
                .flat_map(|w| w.as_vec2().to_array())
                .collect(),
            tangents: flatten3(&self.tangents),
            indices: self.indices.clone(),
        }
    }

    /// Pack every vertex into a [`GpuVertex`].
    pub fn to_interleaved(&self) -> InterleavedMesh {
        let vertices = (0..self.vertex_count())
            .map(|i| GpuVertex::new(self.positions[i], self.normals[i], self.uvs[i], self.tangents[i]))
            .collect();
        InterleavedMesh {
            vertices,
            indices: self.indices.clone(),
        }
    }
}

fn flatten3(vectors: &[Vector3]) -> Vec<f32> {
    vectors.iter().flat_map(|v| v.as_vec3().to_array()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use atorus_geometry::SurfaceParameters;
    use atorus_math::DVec3;

    fn quad() -> SurfaceMesh {
        SurfaceMesh {
            positions: vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(1.0, 1.0, 0.0)],
            normals: vec![DVec3::Z; 4],
            uvs: vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(1.0, 1.0),
            ],
            tangents: vec![DVec3::X; 4],
            indices: vec![0, 2, 1, 1, 2, 3],
            params: SurfaceParameters::default(),
        }
    }

    #[test]
    fn test_flat_buffer_lengths() {
        let buffers = quad().to_buffers();
        assert_eq!(buffers.vertex_count(), 4);
        assert_eq!(buffers.positions.len(), 12);
        assert_eq!(buffers.normals.len(), 12);
        assert_eq!(buffers.uvs.len(), 8);
        assert_eq!(buffers.tangents.len(), 12);
        assert_eq!(buffers.indices, vec![0, 2, 1, 1, 2, 3]);
    }

    #[test]
    fn test_flat_buffer_layout() {
        let buffers = quad().to_buffers();
        assert_eq!(&buffers.positions[9..12], &[1.0, 1.0, 0.0]);
        assert_eq!(&buffers.uvs[2..4], &[1.0, 0.0]);
        assert_eq!(&buffers.normals[0..3], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_interleaved_layout() {
        let mesh = quad().to_interleaved();
        assert_eq!(std::mem::size_of::<GpuVertex>(), 11 * 4);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.vertex_bytes().len(), 4 * 44);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
        assert_eq!(mesh.vertices[3].position, [1.0, 1.0, 0.0]);
        assert_eq!(mesh.vertices[3].tangent, [1.0, 0.0, 0.0]);
    }
}
