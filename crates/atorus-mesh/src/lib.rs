//! Tessellation of the astroidal torus into GPU-ready triangle meshes.

pub mod buffers;
pub mod config;
pub mod grid;
pub mod mesh;
pub mod model;
pub mod normals;
pub mod tangents;
pub mod tessellator;

pub use buffers::{GpuVertex, InterleavedMesh, MeshBuffers};
pub use config::{GridLayout, NormalMethod, TessellationConfig};
pub use grid::Grid;
pub use mesh::SurfaceMesh;
pub use model::TorusModel;
pub use tessellator::{tessellate, tessellate_with};
