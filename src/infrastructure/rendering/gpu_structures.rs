use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::domain::geometry::{IndexedMesh, Mesh};
use crate::domain::scene::{Camera, DrawGeometry};

/// Interleaved vertex as uploaded to the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    /// Model-space position
    pub position: [f32; 3],
    /// RGB color
    pub color: [f32; 3],
}

impl ShapeVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Vertex buffer descriptor for wgpu
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    pub fn from_mesh(mesh: &Mesh) -> Vec<ShapeVertex> {
        mesh.positions
            .iter()
            .zip(&mesh.colors)
            .map(|(&position, &color)| ShapeVertex { position, color })
            .collect()
    }

    pub fn from_indexed(mesh: &IndexedMesh) -> Vec<ShapeVertex> {
        mesh.positions
            .iter()
            .zip(&mesh.colors)
            .map(|(&position, &color)| ShapeVertex { position, color })
            .collect()
    }
}

/// Camera uniform (bind group 0)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self { view_proj: Mat4::IDENTITY.to_cols_array_2d() }
    }
}

impl CameraUniforms {
    pub fn from_camera(camera: &Camera) -> Self {
        Self { view_proj: camera.view_projection().to_cols_array_2d() }
    }
}

/// Per-node model matrix (bind group 1)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct NodeUniforms {
    pub node_transform: [[f32; 4]; 4],
}

impl NodeUniforms {
    pub fn new(transform: Mat4) -> Self {
        Self { node_transform: transform.to_cols_array_2d() }
    }
}

/// CPU-side buffers for one node, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuGeometry {
    pub vertices: Vec<ShapeVertex>,
    pub indices: Option<Vec<u32>>,
    pub topology: wgpu::PrimitiveTopology,
}

impl GpuGeometry {
    pub fn from_draw(geometry: &DrawGeometry<'_>) -> Self {
        match geometry {
            DrawGeometry::List(mesh) => Self {
                vertices: ShapeVertex::from_mesh(mesh),
                indices: None,
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
            DrawGeometry::Strip(mesh) => Self {
                vertices: ShapeVertex::from_mesh(mesh),
                indices: None,
                topology: wgpu::PrimitiveTopology::TriangleStrip,
            },
            DrawGeometry::Indexed(indexed) => Self {
                vertices: ShapeVertex::from_indexed(indexed),
                indices: Some(indexed.indices.clone()),
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
        }
    }

    /// Number of vertices (or indices) a draw call consumes.
    pub fn draw_count(&self) -> u32 {
        self.indices.as_ref().map_or(self.vertices.len(), Vec::len) as u32
    }
}
